use crate::math::{Point, Real, Vector};
use crate::transformation::utils;

/// Discretizes the boundary of a cuboid centered at the origin as a triangle-mesh.
pub fn cuboid(half_extents: &Vector<Real>) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let (vtx, idx) = unit_cuboid();
    (utils::scaled(vtx, half_extents * 2.0), idx)
}

/**
 * Generates a cuboid shape with a split index buffer.
 *
 * The cuboid is centered at the origin, and has its half extents set to 0.5.
 */
fn unit_cuboid() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let coords = vec![
        Point::new(-0.5, -0.5, 0.5),
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ];

    let faces = vec![
        // -x
        [4, 5, 0],
        [5, 1, 0],
        // -z
        [5, 6, 1],
        [6, 2, 1],
        // +x
        [6, 7, 3],
        [2, 6, 3],
        // +z
        [7, 4, 0],
        [3, 7, 0],
        // -y
        [0, 1, 2],
        [3, 0, 2],
        // +y
        [7, 6, 5],
        [4, 7, 5],
    ];

    (coords, faces)
}
