//! Axis Aligned Bounding Box in voxel index space.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::grid::{GridSpec, LabelGrid};
use crate::math::{VoxelCoords, DIM};
use crate::shape::MaterialId;
use core::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// A set of signed coordinate axes, used to identify faces of the grid domain.
pub struct AxisMask(u8);

bitflags::bitflags! {
    /// Flags for identifying signed directions along coordinate axes, or faces of the domain.
    impl AxisMask: u8 {
        /// The direction or face along the `+x` coordinate axis.
        const X_POS = 1 << 0;
        /// The direction or face along the `-x` coordinate axis.
        const X_NEG = 1 << 1;
        /// The direction or face along the `+y` coordinate axis.
        const Y_POS = 1 << 2;
        /// The direction or face along the `-y` coordinate axis.
        const Y_NEG = 1 << 3;
        /// The direction or face along the `+z` coordinate axis.
        const Z_POS = 1 << 4;
        /// The direction or face along the `-z` coordinate axis.
        const Z_NEG = 1 << 5;
    }
}

impl AxisMask {
    /// The face along the `+axis` direction if `positive` is `true`, or `-axis` otherwise.
    pub fn face(axis: usize, positive: bool) -> Self {
        let bit = 1u8 << (axis * 2 + usize::from(!positive));
        Self::from_bits_truncate(bit)
    }
}

/// An inclusive box of voxel indices.
///
/// Both `mins` and `maxs` are voxels belonging to the box, so a box made of a single voxel has
/// `mins == maxs`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct VoxelAabb {
    /// The voxel with the smallest indices contained by this box.
    pub mins: VoxelCoords,
    /// The voxel with the largest indices contained by this box.
    pub maxs: VoxelCoords,
}

impl VoxelAabb {
    /// Creates a new box of voxels.
    ///
    /// Each component of `mins` must be smaller or equal to the related component of `maxs`.
    #[inline]
    pub fn new(mins: VoxelCoords, maxs: VoxelCoords) -> Self {
        debug_assert!((0..DIM).all(|d| mins[d] <= maxs[d]));
        Self { mins, maxs }
    }

    /// The box containing only the voxel `coords`.
    #[inline]
    pub fn from_voxel(coords: VoxelCoords) -> Self {
        Self::new(coords, coords)
    }

    /// Enlarges this box so it also contains the voxel `coords`.
    #[inline]
    pub fn take_voxel(&mut self, coords: VoxelCoords) {
        self.mins = self.mins.inf(&coords);
        self.maxs = self.maxs.sup(&coords);
    }

    /// Does this box contain the voxel `coords`?
    #[inline]
    pub fn contains_voxel(&self, coords: VoxelCoords) -> bool {
        (0..DIM).all(|d| coords[d] >= self.mins[d] && coords[d] <= self.maxs[d])
    }

    /// The number of voxels along each axis of this box.
    #[inline]
    pub fn extents(&self) -> VoxelCoords {
        VoxelCoords::new(
            self.maxs.x - self.mins.x + 1,
            self.maxs.y - self.mins.y + 1,
            self.maxs.z - self.mins.z + 1,
        )
    }

    /// The number of voxels contained by this box.
    #[inline]
    pub fn num_voxels(&self) -> usize {
        let extents = self.extents();
        extents.x as usize * extents.y as usize * extents.z as usize
    }

    /// The faces of a grid with `resolution` voxels that this box reaches.
    pub fn touched_faces(&self, resolution: VoxelCoords) -> AxisMask {
        let mut result = AxisMask::empty();

        for d in 0..DIM {
            if self.mins[d] == 0 {
                result |= AxisMask::face(d, false);
            }
            if self.maxs[d] + 1 >= resolution[d] {
                result |= AxisMask::face(d, true);
            }
        }

        result
    }

    /// The world-space box covered by the voxels of this box.
    pub fn to_world(&self, spec: &GridSpec) -> Aabb {
        Aabb::new(
            spec.voxel_aabb(self.mins).mins,
            spec.voxel_aabb(self.maxs).maxs,
        )
    }

    /// A grid shaped like `spec` where every voxel of this box is set to `material`.
    ///
    /// Voxels of this box outside of the grid are ignored.
    pub fn to_mask_grid(&self, spec: &GridSpec, material: MaterialId) -> LabelGrid {
        let mut grid = LabelGrid::for_spec(spec);
        let last = grid.resolution() - VoxelCoords::new(1, 1, 1).coords;
        let maxs = self.maxs.inf(&last);

        for k in self.mins.z..=maxs.z {
            for j in self.mins.y..=maxs.y {
                for i in self.mins.x..=maxs.x {
                    grid.set(VoxelCoords::new(i, j, k), material.get());
                }
            }
        }

        grid
    }
}

impl fmt::Display for VoxelAabb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[({}, {}, {}), ({}, {}, {})]",
            self.mins.x, self.mins.y, self.mins.z, self.maxs.x, self.maxs.y, self.maxs.z
        )
    }
}

impl BoundingVolume for VoxelAabb {
    #[inline]
    fn intersects(&self, other: &VoxelAabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &VoxelAabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &VoxelAabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &VoxelAabb) -> VoxelAabb {
        VoxelAabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }
}
