use embedgrid3d_f64::accumulator::GridAccumulator;
use embedgrid3d_f64::bounding_volume::BoundingVolume;
use embedgrid3d_f64::grid::GridSpec;
use embedgrid3d_f64::math::{Point, Vector};
use embedgrid3d_f64::shape::{MaterialId, Object};
use embedgrid3d_f64::transformation::voxelization::VoxelizationParameters;
use embedgrid3d_f64::transformation::ObjectTransform;

fn spec() -> GridSpec {
    GridSpec::from_bounds([-3.0, 3.0, -2.0, 2.0, -2.0, 2.0], [61, 41, 41]).unwrap()
}

fn objects() -> [(Object, ObjectTransform); 2] {
    let cube = Object::cuboid(
        Vector::repeat(0.8),
        vec![Point::origin()],
        MaterialId::new(1).unwrap(),
    );
    let ball = Object::ball(0.9, 24, 12, vec![Point::origin()], MaterialId::new(2).unwrap());

    [
        (
            cube,
            ObjectTransform::from_params([-1.5, 0.0, 0.0, 30.0, 0.0, 15.0, 1.0, 1.0, 1.0]),
        ),
        (
            ball,
            ObjectTransform::from_params([1.5, 0.2, -0.1, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]),
        ),
    ]
}

#[test]
fn disjoint_objects_do_not_share_voxels() {
    let objects = objects();
    let params = VoxelizationParameters::conservative();

    let mut together = GridAccumulator::with_parameters(spec(), params);
    let reports = together.process_all(objects.iter().map(|(o, t)| (o, t)));
    assert!(reports.iter().all(|r| r.is_ok()));

    let first_box = reports[0].outcome.clone().unwrap();
    let second_box = reports[1].outcome.clone().unwrap();
    assert!(!first_box.intersects(&second_box));

    let together = together.finish();

    for (object, transform) in &objects {
        let mut alone = GridAccumulator::with_parameters(spec(), params);
        assert!(alone.process(object, transform).is_ok());
        let alone = alone.finish();
        let label = object.material.get();

        // Every voxel of the object alone has the same label in the shared grid, and no
        // other voxel of the shared grid carries this label.
        for (id, value) in alone.grid.data().iter().enumerate() {
            assert_eq!(*value == label, together.grid.data()[id] == label);
        }
    }

    assert_eq!(together.grid.max_label(), 2);
}
