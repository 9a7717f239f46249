use embedgrid3d_f64::accumulator::GridAccumulator;
use embedgrid3d_f64::grid::GridSpec;
use embedgrid3d_f64::math::{Point, Vector};
use embedgrid3d_f64::shape::{MaterialId, Object};
use embedgrid3d_f64::transformation::voxelization::VoxelizationParameters;
use embedgrid3d_f64::transformation::ObjectTransform;

#[test]
fn sphere_bounding_box_matches_its_radius() {
    let spec = GridSpec::from_bounds([-2.0, 2.0, -2.0, 2.0, -2.0, 2.0], [41, 41, 41]).unwrap();
    let material = MaterialId::new(3).unwrap();
    let sphere = Object::ball(1.0, 32, 16, vec![Point::origin()], material);
    let transform = ObjectTransform::new(Vector::zeros(), Vector::zeros(), Vector::repeat(1.5));

    let mut accumulator =
        GridAccumulator::with_parameters(spec, VoxelizationParameters::conservative());
    let report = accumulator.process(&sphere, &transform);
    assert!(report.is_ok());

    let aabb = report.outcome.clone().unwrap();
    assert_eq!(accumulator.bounding_box(), Some(&aabb));

    let h = spec.min_voxel_size();
    let mins = spec.index_to_world_center(aabb.mins);
    let maxs = spec.index_to_world_center(aabb.maxs);

    for d in 0..3 {
        assert!((mins[d] + 1.5).abs() < h, "axis {}: {}", d, mins[d]);
        assert!((maxs[d] - 1.5).abs() < h, "axis {}: {}", d, maxs[d]);
    }

    let run = accumulator.finish();
    let mask = run.bounding_box_grid(material).unwrap();
    assert_eq!(mask.count(material), aabb.num_voxels());
}
