use embedgrid3d_f64::accumulator::GridAccumulator;
use embedgrid3d_f64::grid::GridSpec;
use embedgrid3d_f64::math::{Point, Vector};
use embedgrid3d_f64::shape::{MaterialId, Object};
use embedgrid3d_f64::transformation::voxelization::VoxelizationParameters;
use embedgrid3d_f64::transformation::ObjectTransform;

const HALF_EXTENT: f64 = 0.8;

fn transform() -> ObjectTransform {
    ObjectTransform::from_params([0.0, 0.0, 0.0, 30.0, 20.0, 10.0, 1.0, 1.0, 1.0])
}

/// Voxelizes the rotated cube on a `n^3` grid, returns the volume of its voxels.
fn voxelized_volume(n: u32) -> f64 {
    let spec = GridSpec::from_bounds([-2.0, 2.0, -2.0, 2.0, -2.0, 2.0], [n, n, n]).unwrap();
    let material = MaterialId::new(1).unwrap();
    let cube = Object::cuboid(Vector::repeat(HALF_EXTENT), vec![Point::origin()], material);
    let transform = transform();
    let inv_rotation = transform.rotation().inverse();

    let mut accumulator =
        GridAccumulator::with_parameters(spec, VoxelizationParameters::conservative());
    let report = accumulator.process(&cube, &transform).clone();
    assert!(report.is_ok());

    // The interior voxels never cross the surface: their centers lie inside the cube.
    let fill = report.fill.unwrap();
    assert!(fill.filled > 0);

    for id in &fill.filled_voxels {
        let center = spec.index_to_world_center(accumulator.grid().voxel_coords(*id));
        let local = inv_rotation * center.coords;
        assert!(local.amax() < HALF_EXTENT, "voxel {} at {}", id, center);
    }

    let voxel_volume = spec.voxel_size().product();
    accumulator.grid().count(material) as f64 * voxel_volume
}

#[test]
fn volume_converges_from_above() {
    let exact = (2.0 * HALF_EXTENT).powi(3);
    let errors: Vec<_> = [21, 41, 81]
        .iter()
        .map(|n| voxelized_volume(*n) - exact)
        .collect();

    assert!(errors.iter().all(|e| *e >= 0.0), "errors: {:?}", errors);
    assert!(errors[1] < errors[0], "errors: {:?}", errors);
    assert!(errors[2] < errors[1], "errors: {:?}", errors);
    assert!(errors[2] / exact < 0.5, "errors: {:?}", errors);
}
