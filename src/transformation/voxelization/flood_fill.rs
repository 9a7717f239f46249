use std::collections::VecDeque;

use crate::bounding_volume::{AxisMask, VoxelAabb};
use crate::grid::{GridSpec, LabelGrid};
use crate::math::{Point, Real, VoxelCoords};
use crate::shape::MaterialId;
use crate::transformation::voxelization::{
    OutOfDomainPolicy, VoxelizationError, VoxelizationParameters,
};

/// Statistics of the flood fill of an object interior.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FillStats {
    /// Number of voxels tagged by the fill.
    pub filled: usize,
    /// Number of seeds ignored because they lie outside of the grid domain.
    pub skipped_seeds: usize,
    /// The box of the filled voxels, `None` if nothing was filled.
    pub region: Option<VoxelAabb>,
    /// The faces of the grid domain reached by the filled voxels.
    pub touched_faces: AxisMask,
    /// The linear indices of the filled voxels, in the order they were tagged.
    pub filled_voxels: Vec<usize>,
}

/// Tags with `material` every free voxel 6-connected to the voxel of one of the `seeds`.
///
/// Every seed must map to a free voxel, otherwise the fill fails with
/// [`VoxelizationError::SeedNotInterior`] before modifying the grid. Seeds reached by the fill
/// of a previous seed are accepted and do not start a new fill. Seeds outside of the grid
/// domain are handled according to `params.out_of_domain`.
///
/// The fill stops at any occupied voxel, so it is bounded by the surface shell previously
/// rasterized for the same object (if the shell has no gap) and by the grid boundaries.
pub fn flood_fill(
    grid: &mut LabelGrid,
    spec: &GridSpec,
    seeds: &[Point<Real>],
    material: MaterialId,
    params: &VoxelizationParameters,
) -> Result<FillStats, VoxelizationError> {
    assert_eq!(
        grid.resolution(),
        spec.resolution(),
        "the grid does not match its specification"
    );

    let mut stats = FillStats::default();
    let mut seed_voxels = Vec::with_capacity(seeds.len());

    for seed in seeds {
        match spec.world_to_index(seed) {
            Ok(voxel) => {
                let found = grid.get(voxel);

                if found != 0 {
                    return Err(VoxelizationError::SeedNotInterior {
                        seed: *seed,
                        voxel,
                        found,
                    });
                }

                seed_voxels.push(voxel);
            }
            Err(err) => match params.out_of_domain {
                OutOfDomainPolicy::Reject => return Err(err),
                OutOfDomainPolicy::Skip => {
                    log::warn!(
                        "seed {:?} of material {} lies outside of the grid domain and was ignored",
                        seed,
                        material
                    );
                    stats.skipped_seeds += 1;
                }
            },
        }
    }

    let mut queue = VecDeque::new();

    for seed_voxel in seed_voxels {
        if !grid.tag_if_free(seed_voxel, material) {
            // Already filled from a previous seed.
            continue;
        }

        stats.record(grid, seed_voxel);
        queue.push_back(seed_voxel);

        while let Some(voxel) = queue.pop_front() {
            for neighbor in grid.face_neighbors(voxel) {
                if grid.tag_if_free(neighbor, material) {
                    stats.record(grid, neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
    }

    if let Some(region) = &stats.region {
        stats.touched_faces = region.touched_faces(grid.resolution());
    }

    Ok(stats)
}

impl FillStats {
    fn record(&mut self, grid: &LabelGrid, voxel: VoxelCoords) {
        self.filled += 1;
        self.filled_voxels.push(grid.linear_index(voxel));

        match &mut self.region {
            Some(region) => region.take_voxel(voxel),
            None => self.region = Some(VoxelAabb::from_voxel(voxel)),
        }
    }
}

/// Resets to free space every voxel tagged by the fill described by `stats`.
pub fn revert_fill(grid: &mut LabelGrid, stats: &FillStats) {
    let data = grid.data_mut();

    for id in &stats.filled_voxels {
        data[*id] = 0;
    }
}
