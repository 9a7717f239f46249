use crate::bounding_volume::Aabb;
use crate::math::Point;
use crate::query::sat;
use crate::shape::Triangle;

/// Tests if an axis-aligned box and a triangle intersect.
///
/// Shapes that merely touch are considered intersecting.
pub fn intersection_test_aabb_triangle(aabb1: &Aabb, triangle2: &Triangle) -> bool {
    let center = aabb1.center();
    let half_extents = aabb1.half_extents();
    let local_triangle2 = triangle2.map_vertices(|pt| Point::from(pt - center));

    /*
     *
     * Point-Face cases.
     *
     */
    let sep1 =
        sat::aabb_triangle_find_local_separating_normal_oneway(&half_extents, &local_triangle2).0;
    if sep1 > 0.0 {
        return false;
    }

    let sep2 =
        sat::triangle_aabb_find_local_separating_normal_oneway(&local_triangle2, &half_extents).0;
    if sep2 > 0.0 {
        return false;
    }

    /*
     *
     * Edge-Edge cases.
     *
     */
    let sep3 =
        sat::aabb_triangle_find_local_separating_edge_twoway(&half_extents, &local_triangle2).0;

    sep3 <= 0.0
}
