/*!
embedgrid3d
===========

**embedgrid3d** turns closed triangle meshes into a labelled voxel grid for
particle-in-cell and field-solver simulations.

Every object is rasterized into the voxels its surface crosses, then its
interior is flood-filled from one or more seed points. The resulting dense grid
stores, for each voxel, `0` for free space or the material id of the object
occupying it.

```
# #[cfg(feature = "f32")] {
use embedgrid3d::accumulator::GridAccumulator;
use embedgrid3d::grid::GridSpec;
use embedgrid3d::math::{Point, Vector};
use embedgrid3d::shape::{MaterialId, Object};
use embedgrid3d::transformation::ObjectTransform;

let spec = GridSpec::from_bounds([-2.0, 2.0, -2.0, 2.0, -2.0, 2.0], [21, 21, 21]).unwrap();
let cube = Object::cuboid(Vector::repeat(1.0), vec![Point::origin()], MaterialId::new(1).unwrap());

let mut accumulator = GridAccumulator::new(spec);
let report = accumulator.process(&cube, &ObjectTransform::identity());
assert!(report.is_ok());

let run = accumulator.finish();
assert!(run.grid.count(MaterialId::new(1).unwrap()) > 0);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod accumulator;
pub mod bounding_volume;
pub mod grid;
pub mod query;
pub mod shape;
pub mod transformation;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Rotation3, Translation3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The rigid transformation type.
    pub use Isometry3 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = Rotation3<N>;

    /// The translation type.
    pub use Translation3 as Translation;

    /// Integer coordinates `(i, j, k)` of a voxel.
    pub type VoxelCoords = Point3<u32>;
}
