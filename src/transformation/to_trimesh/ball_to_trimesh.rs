use crate::math::{Point, Real, Vector};
use crate::transformation::utils;
use na::RealField;

/// Discretizes the boundary of a ball centered at the origin as a triangle-mesh.
///
/// The ball is split into `ntheta_subdiv` meridians around the `y` axis and `nphi_subdiv`
/// parallels from the south pole to the north pole.
pub fn ball(
    radius: Real,
    ntheta_subdiv: u32,
    nphi_subdiv: u32,
) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let diameter = radius * 2.0;
    let (vtx, idx) = unit_sphere(ntheta_subdiv, nphi_subdiv);
    (utils::scaled(vtx, Vector::repeat(diameter)), idx)
}

fn unit_sphere(ntheta_subdiv: u32, nphi_subdiv: u32) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let dtheta = Real::two_pi() / (ntheta_subdiv as Real);
    let dphi = Real::pi() / (nphi_subdiv as Real);

    let mut coords = Vec::new();
    let mut curr_phi = -Real::frac_pi_2();

    for _ in 0..nphi_subdiv + 1 {
        utils::push_circle(
            curr_phi.cos(),
            ntheta_subdiv + 1,
            dtheta,
            curr_phi.sin(),
            &mut coords,
        );
        curr_phi += dphi;
    }

    // index buffer
    let mut idx = Vec::new();

    for i in 0..nphi_subdiv {
        let bottom = i * (ntheta_subdiv + 1);
        let up = bottom + (ntheta_subdiv + 1);
        utils::push_open_ring_indices(bottom, up, ntheta_subdiv + 1, &mut idx);
    }

    (utils::scaled(coords, Vector::repeat(0.5)), idx)
}
