//! Bounding volumes, in world space and in voxel index space.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
pub use crate::bounding_volume::bounding_box::{bounding_box, bounding_box_in};
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;
#[doc(inline)]
pub use crate::bounding_volume::voxel_aabb::{AxisMask, VoxelAabb};

#[doc(hidden)]
pub mod aabb;
#[doc(hidden)]
pub mod bounding_volume;
#[doc(hidden)]
pub mod voxel_aabb;

mod bounding_box;
