use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, VoxelCoords, DIM};
use crate::transformation::voxelization::VoxelizationError;

/// Errors raised when building an invalid [`GridSpec`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum GridSpecError {
    /// The bounds along `axis` are not finite, or `max <= min`.
    #[error("invalid bounds along axis {axis}: [{min}, {max}]")]
    InvalidBounds {
        /// The offending axis (0 for `x`, 1 for `y`, 2 for `z`).
        axis: usize,
        /// The lower bound given for this axis.
        min: Real,
        /// The upper bound given for this axis.
        max: Real,
    },
    /// The grid has no voxel along `axis`.
    #[error("the grid resolution along axis {axis} must be at least 1")]
    ZeroResolution {
        /// The offending axis (0 for `x`, 1 for `y`, 2 for `z`).
        axis: usize,
    },
    /// The total number of voxels does not fit in memory indices.
    #[error("the grid resolution {resolution} has too many voxels")]
    TooManyVoxels {
        /// The requested resolution.
        resolution: VoxelCoords,
    },
}

/// Description of the rectilinear simulation domain and its voxelization.
///
/// The domain `[mins, maxs]` is split into `resolution.x * resolution.y * resolution.z`
/// voxels. Each axis has its own voxel size `(max - min) / n`, so voxels may be anisotropic,
/// but the spacing is uniform along a given axis.
///
/// Voxel `(i, j, k)` covers the half-open box
/// `[mins + (i, j, k) * size, mins + (i + 1, j + 1, k + 1) * size)`, except on the upper
/// domain faces which belong to the last voxel of their axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridSpec {
    mins: Point<Real>,
    maxs: Point<Real>,
    resolution: VoxelCoords,
}

impl GridSpec {
    /// Creates the description of a grid covering `[mins, maxs]` with `resolution` voxels.
    pub fn new(
        mins: Point<Real>,
        maxs: Point<Real>,
        resolution: VoxelCoords,
    ) -> Result<Self, GridSpecError> {
        for axis in 0..DIM {
            let (min, max) = (mins[axis], maxs[axis]);

            if !min.is_finite() || !max.is_finite() || max <= min {
                return Err(GridSpecError::InvalidBounds { axis, min, max });
            }

            if resolution[axis] == 0 {
                return Err(GridSpecError::ZeroResolution { axis });
            }
        }

        let num_voxels = (resolution.x as u64)
            .checked_mul(resolution.y as u64)
            .and_then(|n| n.checked_mul(resolution.z as u64))
            .filter(|n| usize::try_from(*n).is_ok());

        if num_voxels.is_none() {
            return Err(GridSpecError::TooManyVoxels { resolution });
        }

        Ok(Self {
            mins,
            maxs,
            resolution,
        })
    }

    /// Creates a grid from the flat `[xmin, xmax, ymin, ymax, zmin, zmax]` bounds and the
    /// `[nx, ny, nz]` voxel counts.
    pub fn from_bounds(bounds: [Real; 6], resolution: [u32; 3]) -> Result<Self, GridSpecError> {
        Self::new(
            Point::new(bounds[0], bounds[2], bounds[4]),
            Point::new(bounds[1], bounds[3], bounds[5]),
            VoxelCoords::from(resolution),
        )
    }

    /// The corner of the domain with the smallest coordinates.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        self.mins
    }

    /// The corner of the domain with the largest coordinates.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        self.maxs
    }

    /// The number of voxels along each axis.
    #[inline]
    pub fn resolution(&self) -> VoxelCoords {
        self.resolution
    }

    /// The total number of voxels of this grid.
    #[inline]
    pub fn num_voxels(&self) -> usize {
        self.resolution.x as usize * self.resolution.y as usize * self.resolution.z as usize
    }

    /// The whole domain, as an Aabb.
    #[inline]
    pub fn domain(&self) -> Aabb {
        Aabb::new(self.mins, self.maxs)
    }

    /// The size of a voxel along each axis.
    #[inline]
    pub fn voxel_size(&self) -> Vector<Real> {
        let res = Vector::new(
            self.resolution.x as Real,
            self.resolution.y as Real,
            self.resolution.z as Real,
        );
        (self.maxs - self.mins).component_div(&res)
    }

    /// The smallest voxel size among all axes.
    #[inline]
    pub fn min_voxel_size(&self) -> Real {
        self.voxel_size().min()
    }

    /// Does the domain contain this point? Points on the domain faces are contained.
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        (0..DIM).all(|d| point[d] >= self.mins[d] && point[d] <= self.maxs[d])
    }

    /// The voxel containing `point`.
    ///
    /// Fails with [`VoxelizationError::OutOfDomain`] if the point lies outside of the domain
    /// (or has non-finite coordinates).
    pub fn world_to_index(&self, point: &Point<Real>) -> Result<VoxelCoords, VoxelizationError> {
        if self.contains_point(point) {
            Ok(self.world_to_index_clamped(point))
        } else {
            Err(VoxelizationError::OutOfDomain { point: *point })
        }
    }

    /// The voxel containing `point`, or the closest voxel to it if it lies outside of the domain.
    pub fn world_to_index_clamped(&self, point: &Point<Real>) -> VoxelCoords {
        let size = self.voxel_size();
        let mut result = VoxelCoords::origin();

        for d in 0..DIM {
            let last = self.resolution[d] - 1;
            let t = ((point[d] - self.mins[d]) / size[d]).floor();

            // NOTE: NaN fails both comparisons and ends up in the first voxel.
            result[d] = if t >= last as Real {
                last
            } else if t > 0.0 {
                t as u32
            } else {
                0
            };
        }

        result
    }

    /// The world-space center of the voxel `coords`.
    #[inline]
    pub fn index_to_world_center(&self, coords: VoxelCoords) -> Point<Real> {
        let size = self.voxel_size();
        Point::new(
            self.mins.x + (coords.x as Real + 0.5) * size.x,
            self.mins.y + (coords.y as Real + 0.5) * size.y,
            self.mins.z + (coords.z as Real + 0.5) * size.z,
        )
    }

    /// The world-space box covered by the voxel `coords`.
    #[inline]
    pub fn voxel_aabb(&self, coords: VoxelCoords) -> Aabb {
        Aabb::from_half_extents(self.index_to_world_center(coords), self.voxel_size() * 0.5)
    }

    /// Is the voxel `coords` on one of the six faces of the domain?
    #[inline]
    pub fn is_on_domain_boundary(&self, coords: VoxelCoords) -> bool {
        (0..DIM).any(|d| coords[d] == 0 || coords[d] >= self.resolution[d] - 1)
    }
}
