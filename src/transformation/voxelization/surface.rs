use crate::bounding_volume::{Aabb, VoxelAabb};
use crate::grid::{GridSpec, LabelGrid};
use crate::math::{Real, Vector, VoxelCoords};
use crate::query::intersection_test_aabb_triangle;
use crate::shape::{MaterialId, Triangle};
use crate::transformation::voxelization::{
    OutOfDomainPolicy, SurfaceTest, VoxelizationError, VoxelizationParameters,
    SURFACE_TEST_MARGIN,
};

/// Statistics of the rasterization of a surface into a grid.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SurfaceStats {
    /// Number of voxels tagged by this rasterization.
    pub tagged: usize,
    /// Number of triangles ignored because they stick out of the grid domain.
    pub skipped_triangles: usize,
    /// The box of every voxel crossed by the surface, including voxels that were already
    /// occupied. `None` if the surface crosses no voxel.
    pub shell: Option<VoxelAabb>,
}

/// The half extents of the box tested against the triangles, for every voxel of `spec`.
pub fn surface_probe_half_extents(spec: &GridSpec, test: SurfaceTest) -> Vector<Real> {
    let half_extents = match test {
        SurfaceTest::IsotropicProbe => Vector::repeat(spec.min_voxel_size() * 0.5),
        SurfaceTest::Conservative => spec.voxel_size() * 0.5,
    };

    half_extents * (1.0 + SURFACE_TEST_MARGIN)
}

/// Tags with `material` every free voxel of `grid` crossed by one of the `triangles`.
///
/// Voxels already occupied, by this material or any other, are left unchanged. Which voxels
/// are crossed depends on `params.surface_test`.
///
/// Triangles with a vertex outside of the grid domain are handled according to
/// `params.out_of_domain`. With [`OutOfDomainPolicy::Reject`], the grid is left untouched if
/// any triangle sticks out of the domain.
pub fn rasterize_surface(
    grid: &mut LabelGrid,
    spec: &GridSpec,
    triangles: &[Triangle],
    material: MaterialId,
    params: &VoxelizationParameters,
) -> Result<SurfaceStats, VoxelizationError> {
    assert_eq!(
        grid.resolution(),
        spec.resolution(),
        "the grid does not match its specification"
    );

    if params.out_of_domain == OutOfDomainPolicy::Reject {
        if let Some(point) = triangles
            .iter()
            .flat_map(|tri| tri.vertices())
            .find(|pt| !spec.contains_point(pt))
        {
            return Err(VoxelizationError::OutOfDomain { point });
        }
    }

    let half_extents = surface_probe_half_extents(spec, params.surface_test);
    let last = spec.resolution() - VoxelCoords::new(1, 1, 1).coords;
    let mut stats = SurfaceStats::default();

    for triangle in triangles {
        if !triangle.vertices().iter().all(|pt| spec.contains_point(pt)) {
            stats.skipped_triangles += 1;
            continue;
        }

        let aabb = triangle.local_aabb();
        let mins = spec
            .world_to_index_clamped(&aabb.mins)
            .map(|i| i.saturating_sub(1));
        let maxs = spec
            .world_to_index_clamped(&aabb.maxs)
            .map(|i| i + 1)
            .inf(&last);

        for k in mins.z..=maxs.z {
            for j in mins.y..=maxs.y {
                for i in mins.x..=maxs.x {
                    let coords = VoxelCoords::new(i, j, k);
                    let probe =
                        Aabb::from_half_extents(spec.index_to_world_center(coords), half_extents);

                    if !intersection_test_aabb_triangle(&probe, triangle) {
                        continue;
                    }

                    if grid.tag_if_free(coords, material) {
                        stats.tagged += 1;
                    }

                    match &mut stats.shell {
                        Some(shell) => shell.take_voxel(coords),
                        None => stats.shell = Some(VoxelAabb::from_voxel(coords)),
                    }
                }
            }
        }
    }

    if stats.skipped_triangles > 0 {
        log::warn!(
            "{} triangles of material {} stick out of the grid domain and were ignored",
            stats.skipped_triangles,
            material
        );
    }

    Ok(stats)
}
