//! Application of the Separating Axis Theorem (SAT) to triangle/box overlap tests.
//!
//! Two convex shapes do not intersect if and only if there exists an axis onto which their
//! projections do not overlap. For a box and a triangle, only 13 candidate axes need to be
//! tested: the 3 face normals of the box, the normal of the triangle, and the 9 cross products
//! between the box axes and the triangle edges.
//!
//! Every function of this module works in the local frame of the box, i.e., with the box
//! centered at the origin. Separations are positive when the shapes are apart along the
//! returned axis.

pub use self::sat_aabb_triangle::*;

mod sat_aabb_triangle;
