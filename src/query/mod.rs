//! Geometric queries between the shapes to voxelize and the voxels.

pub use self::intersection_test_aabb_triangle::intersection_test_aabb_triangle;

mod intersection_test_aabb_triangle;
pub mod sat;
