//! Placement, meshing and voxelization of objects.

pub use self::object_transform::ObjectTransform;

mod object_transform;
pub mod to_trimesh;
pub mod utils;
pub mod voxelization;
