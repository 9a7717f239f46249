use crate::bounding_volume::{BoundingVolume, VoxelAabb};
use crate::grid::LabelGrid;
use crate::math::VoxelCoords;
use crate::shape::MaterialId;
use crate::transformation::voxelization::VoxelizationError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The smallest box of voxels containing every voxel of `grid` labelled with `material`.
///
/// Fails with [`VoxelizationError::EmptyResult`] if no voxel carries this material.
pub fn bounding_box(grid: &LabelGrid, material: MaterialId) -> Result<VoxelAabb, VoxelizationError> {
    let resolution = grid.resolution();
    let slab_len = resolution.x as usize * resolution.y as usize;
    let label = material.get();

    if grid.is_empty() {
        return Err(VoxelizationError::EmptyResult { material });
    }

    #[cfg(feature = "parallel")]
    let result = grid
        .data()
        .par_chunks(slab_len)
        .enumerate()
        .filter_map(|(k, slab)| slab_bounding_box(slab, resolution.x, k as u32, label))
        .reduce_with(|a, b| a.merged(&b));

    #[cfg(not(feature = "parallel"))]
    let result = grid
        .data()
        .chunks(slab_len)
        .enumerate()
        .filter_map(|(k, slab)| slab_bounding_box(slab, resolution.x, k as u32, label))
        .reduce(|a, b| a.merged(&b));

    result.ok_or(VoxelizationError::EmptyResult { material })
}

/// The smallest box of voxels containing every voxel of `grid` labelled with `material`,
/// only looking at voxels inside of `region`.
///
/// This is equivalent to [`bounding_box`] whenever `region` is known to contain every voxel
/// of `material`, e.g., the shell box of an object that did not leak.
pub fn bounding_box_in(
    grid: &LabelGrid,
    material: MaterialId,
    region: &VoxelAabb,
) -> Result<VoxelAabb, VoxelizationError> {
    let label = material.get();

    if grid.is_empty() {
        return Err(VoxelizationError::EmptyResult { material });
    }

    let last = grid.resolution() - VoxelCoords::new(1, 1, 1).coords;
    let maxs = region.maxs.inf(&last);
    let mut result: Option<VoxelAabb> = None;

    for k in region.mins.z..=maxs.z {
        for j in region.mins.y..=maxs.y {
            for i in region.mins.x..=maxs.x {
                let coords = VoxelCoords::new(i, j, k);

                if grid.get(coords) == label {
                    match &mut result {
                        Some(aabb) => aabb.take_voxel(coords),
                        None => result = Some(VoxelAabb::from_voxel(coords)),
                    }
                }
            }
        }
    }

    result.ok_or(VoxelizationError::EmptyResult { material })
}

/// The box of voxels labelled `label` within the `k`-th xy-slab of a grid.
fn slab_bounding_box(slab: &[u32], nx: u32, k: u32, label: u32) -> Option<VoxelAabb> {
    let mut result: Option<VoxelAabb> = None;

    for (id, _) in slab.iter().enumerate().filter(|(_, l)| **l == label) {
        let coords = VoxelCoords::new(id as u32 % nx, id as u32 / nx, k);

        match &mut result {
            Some(aabb) => aabb.take_voxel(coords),
            None => result = Some(VoxelAabb::from_voxel(coords)),
        }
    }

    result
}

#[cfg(test)]
mod test {
    use super::{bounding_box, bounding_box_in};
    use crate::bounding_volume::VoxelAabb;
    use crate::grid::LabelGrid;
    use crate::math::VoxelCoords;
    use crate::shape::MaterialId;
    use crate::transformation::voxelization::VoxelizationError;

    fn grid_with_two_materials() -> LabelGrid {
        let mut grid = LabelGrid::new(VoxelCoords::new(8, 6, 5));

        for coords in [
            VoxelCoords::new(2, 1, 1),
            VoxelCoords::new(5, 3, 1),
            VoxelCoords::new(3, 4, 3),
        ] {
            grid.set(coords, 1);
        }

        grid.set(VoxelCoords::new(7, 5, 4), 2);
        grid
    }

    #[test]
    fn bounding_box_of_material() {
        let grid = grid_with_two_materials();
        let first = MaterialId::new(1).unwrap();
        let second = MaterialId::new(2).unwrap();

        assert_eq!(
            bounding_box(&grid, first),
            Ok(VoxelAabb::new(
                VoxelCoords::new(2, 1, 1),
                VoxelCoords::new(5, 4, 3)
            ))
        );
        assert_eq!(
            bounding_box(&grid, second),
            Ok(VoxelAabb::from_voxel(VoxelCoords::new(7, 5, 4)))
        );
    }

    #[test]
    fn missing_material_is_empty_result() {
        let grid = grid_with_two_materials();
        let absent = MaterialId::new(3).unwrap();

        assert_eq!(
            bounding_box(&grid, absent),
            Err(VoxelizationError::EmptyResult { material: absent })
        );
    }

    #[test]
    fn restricted_scan_matches_full_scan() {
        let grid = grid_with_two_materials();
        let first = MaterialId::new(1).unwrap();
        let region = VoxelAabb::new(VoxelCoords::new(1, 1, 0), VoxelCoords::new(6, 5, 4));

        assert_eq!(
            bounding_box_in(&grid, first, &region),
            bounding_box(&grid, first)
        );

        let partial = VoxelAabb::new(VoxelCoords::new(0, 0, 0), VoxelCoords::new(3, 5, 1));
        assert_eq!(
            bounding_box_in(&grid, first, &partial),
            Ok(VoxelAabb::from_voxel(VoxelCoords::new(2, 1, 1)))
        );
    }
}
