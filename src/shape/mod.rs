//! Shapes embedded into the voxel grid.

pub use self::material::MaterialId;
pub use self::object::{Object, ObjectBuilderError};
pub use self::triangle::Triangle;

mod material;
mod object;
mod triangle;
