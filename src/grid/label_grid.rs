use crate::grid::GridSpec;
use crate::math::VoxelCoords;
use crate::shape::MaterialId;

/// The six face-adjacent directions, as `(axis, step)` pairs.
static FACE_DIRECTIONS: [(usize, bool); 6] = [
    (0, true),
    (0, false),
    (1, true),
    (1, false),
    (2, true),
    (2, false),
];

/// A dense 3D array of material ids.
///
/// The value `0` marks a free voxel; any other value is the [`MaterialId`] of the object
/// owning the voxel. Voxels are stored with `i` varying fastest, i.e., voxel `(i, j, k)` is at
/// index `i + j * nx + k * nx * ny`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelGrid {
    resolution: VoxelCoords,
    data: Vec<u32>,
}

impl LabelGrid {
    /// A new grid with `resolution` voxels, all free.
    pub fn new(resolution: VoxelCoords) -> Self {
        let len = resolution.x as usize * resolution.y as usize * resolution.z as usize;
        Self {
            resolution,
            data: vec![0; len],
        }
    }

    /// A new grid matching the resolution of `spec`, all free.
    pub fn for_spec(spec: &GridSpec) -> Self {
        Self::new(spec.resolution())
    }

    /// The number of voxels along each axis.
    #[inline]
    pub fn resolution(&self) -> VoxelCoords {
        self.resolution
    }

    /// The total number of voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Does this grid have no voxel at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw labels, in storage order.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// The raw labels, in storage order, mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Are the given coordinates inside of this grid?
    #[inline]
    pub fn contains_voxel(&self, coords: VoxelCoords) -> bool {
        coords.x < self.resolution.x && coords.y < self.resolution.y && coords.z < self.resolution.z
    }

    /// The storage index of the voxel `coords`.
    #[inline]
    pub fn linear_index(&self, coords: VoxelCoords) -> usize {
        debug_assert!(self.contains_voxel(coords));
        let nx = self.resolution.x as usize;
        let ny = self.resolution.y as usize;
        coords.x as usize + coords.y as usize * nx + coords.z as usize * nx * ny
    }

    /// The voxel stored at index `linear_index`.
    #[inline]
    pub fn voxel_coords(&self, linear_index: usize) -> VoxelCoords {
        let nx = self.resolution.x as usize;
        let ny = self.resolution.y as usize;
        VoxelCoords::new(
            (linear_index % nx) as u32,
            ((linear_index / nx) % ny) as u32,
            (linear_index / (nx * ny)) as u32,
        )
    }

    /// The label of the voxel `coords`.
    ///
    /// Panics if `coords` is outside of the grid.
    #[inline]
    pub fn get(&self, coords: VoxelCoords) -> u32 {
        self.data[self.linear_index(coords)]
    }

    /// Sets the label of the voxel `coords`.
    ///
    /// Panics if `coords` is outside of the grid.
    #[inline]
    pub fn set(&mut self, coords: VoxelCoords, label: u32) {
        let id = self.linear_index(coords);
        self.data[id] = label;
    }

    /// Is the voxel `coords` free, i.e., not owned by any object?
    #[inline]
    pub fn is_free(&self, coords: VoxelCoords) -> bool {
        self.get(coords) == 0
    }

    /// Tags the voxel `coords` with `material` if it is free.
    ///
    /// Returns `true` if the voxel was tagged.
    #[inline]
    pub fn tag_if_free(&mut self, coords: VoxelCoords, material: MaterialId) -> bool {
        let id = self.linear_index(coords);

        if self.data[id] == 0 {
            self.data[id] = material.get();
            true
        } else {
            false
        }
    }

    /// Resets every voxel to free.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Number of voxels owned by `material`.
    pub fn count(&self, material: MaterialId) -> usize {
        let label = material.get();
        self.data.iter().filter(|v| **v == label).count()
    }

    /// The largest label present in this grid, `0` if every voxel is free.
    pub fn max_label(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Iterates through all the voxels with their labels, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (VoxelCoords, u32)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(id, label)| (self.voxel_coords(id), *label))
    }

    /// The face-adjacent neighbors of `coords` that are inside of the grid.
    pub fn face_neighbors(&self, coords: VoxelCoords) -> impl Iterator<Item = VoxelCoords> {
        let resolution = self.resolution;
        FACE_DIRECTIONS.iter().filter_map(move |(axis, forward)| {
            let mut neighbor = coords;

            if *forward {
                if coords[*axis] >= resolution[*axis].saturating_sub(1) {
                    return None;
                }
                neighbor[*axis] += 1;
            } else {
                if coords[*axis] == 0 {
                    return None;
                }
                neighbor[*axis] -= 1;
            }

            Some(neighbor)
        })
    }
}

#[cfg(test)]
mod test {
    use super::LabelGrid;
    use crate::math::VoxelCoords;
    use crate::shape::MaterialId;

    #[test]
    fn linear_index_round_trip() {
        let grid = LabelGrid::new(VoxelCoords::new(3, 4, 5));

        for id in 0..grid.len() {
            assert_eq!(grid.linear_index(grid.voxel_coords(id)), id);
        }

        assert_eq!(grid.linear_index(VoxelCoords::new(1, 0, 0)), 1);
        assert_eq!(grid.linear_index(VoxelCoords::new(0, 1, 0)), 3);
        assert_eq!(grid.linear_index(VoxelCoords::new(0, 0, 1)), 12);
    }

    #[test]
    fn tagging_never_overwrites() {
        let mut grid = LabelGrid::new(VoxelCoords::new(2, 2, 2));
        let first = MaterialId::new(1).unwrap();
        let second = MaterialId::new(2).unwrap();
        let voxel = VoxelCoords::new(1, 0, 1);

        assert!(grid.tag_if_free(voxel, first));
        assert!(!grid.tag_if_free(voxel, second));
        assert_eq!(grid.get(voxel), 1);
        assert_eq!(grid.count(first), 1);
        assert_eq!(grid.count(second), 0);
        assert_eq!(grid.max_label(), 1);

        grid.clear();
        assert!(grid.is_free(voxel));
    }

    #[test]
    fn face_neighbors_stay_in_grid() {
        let grid = LabelGrid::new(VoxelCoords::new(3, 3, 3));

        assert_eq!(grid.face_neighbors(VoxelCoords::new(1, 1, 1)).count(), 6);
        assert_eq!(grid.face_neighbors(VoxelCoords::new(0, 0, 0)).count(), 3);
        assert_eq!(grid.face_neighbors(VoxelCoords::new(2, 1, 0)).count(), 4);

        for n in grid.face_neighbors(VoxelCoords::new(0, 2, 1)) {
            assert!(grid.contains_voxel(n));
        }

        let far = VoxelCoords::new(u32::MAX, 1, 1);
        assert!(grid
            .face_neighbors(far)
            .all(|n| n.x == u32::MAX || n.x == u32::MAX - 1));
        assert_eq!(grid.face_neighbors(far).count(), 5);
    }
}
