//! Triangle mesh generation for simple solids.
//!
//! Meshes are returned as a vertex buffer and an index buffer, with triangles wound
//! counter-clockwise when seen from outside of the solid. They are closed, which makes them
//! directly usable as the surface of an [`Object`](crate::shape::Object).

pub use self::ball_to_trimesh::ball;
pub use self::cuboid_to_trimesh::cuboid;

mod ball_to_trimesh;
mod cuboid_to_trimesh;
