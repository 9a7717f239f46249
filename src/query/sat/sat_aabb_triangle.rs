use crate::math::{Real, UnitVector, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::Triangle;

use na::Unit;

/// Computes the separation between a box centered at the origin and a triangle, along `axis`.
///
/// Both directions of the axis are tested and the largest separation is returned. A positive
/// value means the shapes are separated along this axis, a negative one is the overlap of their
/// projections.
pub fn aabb_triangle_compute_separation_wrt_local_line(
    half_extents1: &Vector<Real>,
    triangle2: &Triangle,
    axis: &UnitVector<Real>,
) -> Real {
    let radius1 = axis.abs().dot(half_extents1);
    let (min2, max2) = triangle2.extents_on_dir(axis);

    (min2 - radius1).max(-radius1 - max2)
}

/// Finds the best separating axis among the face normals of a box centered at the origin.
pub fn aabb_triangle_find_local_separating_normal_oneway(
    half_extents1: &Vector<Real>,
    triangle2: &Triangle,
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for d in 0..DIM {
        let (min2, max2) = triangle2.extents_on_dir(&Vector::ith(d, 1.0));
        let separation_pos = min2 - half_extents1[d];
        let separation_neg = -half_extents1[d] - max2;

        if separation_pos > best_separation {
            best_separation = separation_pos;
            best_dir = Vector::ith(d, 1.0);
        }

        if separation_neg > best_separation {
            best_separation = separation_neg;
            best_dir = Vector::ith(d, -1.0);
        }
    }

    (best_separation, best_dir)
}

/// Computes the separation along the normal of a triangle, relative to a box centered at
/// the origin.
///
/// Degenerate triangles have no normal and yield `-Real::MAX`.
pub fn triangle_aabb_find_local_separating_normal_oneway(
    triangle1: &Triangle,
    half_extents2: &Vector<Real>,
) -> (Real, Vector<Real>) {
    match triangle1.normal() {
        Some(normal) => {
            let separation =
                aabb_triangle_compute_separation_wrt_local_line(half_extents2, triangle1, &normal);
            (separation, *normal)
        }
        None => (-Real::MAX, Vector::zeros()),
    }
}

/// Finds the best separating axis among the cross products of the box and triangle edges.
pub fn aabb_triangle_find_local_separating_edge_twoway(
    half_extents1: &Vector<Real>,
    triangle2: &Triangle,
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for edge in triangle2.edges_scaled_directions() {
        for d in 0..DIM {
            let axis = Vector::<Real>::ith(d, 1.0).cross(&edge);

            // Edges parallel to a box axis are already covered by the face normals.
            if let Some(axis) = Unit::try_new(axis, DEFAULT_EPSILON) {
                let separation =
                    aabb_triangle_compute_separation_wrt_local_line(half_extents1, triangle2, &axis);

                if separation > best_separation {
                    best_separation = separation;
                    best_dir = *axis;
                }
            }
        }
    }

    (best_separation, best_dir)
}
