use crate::math::{Point, Real, VoxelCoords};
use crate::shape::MaterialId;
use crate::transformation::voxelization::LeakReport;

/// Errors that can occur while embedding an object into the grid.
///
/// Errors are specific to one object: a [`GridAccumulator`](crate::accumulator::GridAccumulator)
/// records them in the report of the failing object and carries on with the next ones.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum VoxelizationError {
    /// A point lies outside of the grid domain.
    ///
    /// Only raised for triangle vertices and seeds when the out-of-domain policy is
    /// [`OutOfDomainPolicy::Reject`](super::OutOfDomainPolicy::Reject), and by
    /// [`GridSpec::world_to_index`](crate::grid::GridSpec::world_to_index).
    #[error("point {point:?} lies outside of the grid domain")]
    OutOfDomain {
        /// The offending point.
        point: Point<Real>,
    },

    /// A seed maps to a voxel that is already occupied, by the surface shell of its own object
    /// or by another object.
    ///
    /// This usually means the seed is not strictly inside of its object, or that the object is
    /// too thin for the grid resolution.
    #[error("seed {seed:?} maps to voxel {voxel:?}, already occupied by material {found}")]
    SeedNotInterior {
        /// The seed, in world coordinates.
        seed: Point<Real>,
        /// The voxel containing the seed.
        voxel: VoxelCoords,
        /// The label found in this voxel.
        found: u32,
    },

    /// The interior flood fill escaped the surface shell of the object.
    ///
    /// Depending on the [`LeakPolicy`](super::LeakPolicy), the filled voxels were either kept
    /// (the output is then suspect) or reverted.
    #[error("{0}")]
    LeakDetected(LeakReport),

    /// No voxel of the grid carries this material.
    #[error("no voxel carries the material {material}")]
    EmptyResult {
        /// The material looked for.
        material: MaterialId,
    },
}
