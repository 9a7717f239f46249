// The box case that leaks with the isotropic surface test: the grid is three times finer
// along `y` than along `x`, and six times finer than along `z`.

use embedgrid3d_f64::accumulator::GridAccumulator;
use embedgrid3d_f64::bounding_volume::{AxisMask, BoundingVolume};
use embedgrid3d_f64::grid::GridSpec;
use embedgrid3d_f64::math::{Point, Vector};
use embedgrid3d_f64::shape::{MaterialId, Object};
use embedgrid3d_f64::transformation::voxelization::{
    LeakPolicy, OutOfDomainPolicy, VoxelizationError, VoxelizationParameters,
};
use embedgrid3d_f64::transformation::ObjectTransform;

fn spec() -> GridSpec {
    GridSpec::from_bounds([-3.0, 3.0, -3.0, 3.0, -3.0, 3.0], [101, 301, 51]).unwrap()
}

fn transform() -> ObjectTransform {
    ObjectTransform::from_params([-1.5, -1.5, -1.5, 45.0, 45.0, 45.0, 0.5, 0.5, 0.5])
}

fn unit_box() -> Object {
    Object::cuboid(
        Vector::repeat(1.0),
        vec![Point::origin()],
        MaterialId::new(1).unwrap(),
    )
}

#[test]
fn isotropic_probe_leaks_and_is_flagged() {
    let object = unit_box();
    let mut accumulator = GridAccumulator::new(spec());
    let report = accumulator.process(&object, &transform()).clone();

    assert!(report.is_suspect());
    assert!(!report.is_ok());

    let leak = report.leak().unwrap();
    let shell = leak.shell.unwrap();
    assert!(!shell.contains(&leak.region));
    assert!(!leak.escaped_faces.is_empty());
    assert_eq!(leak.touched_faces, AxisMask::all());
    assert!(!leak.reverted);

    // The labels are kept, so the object floods most of the domain.
    let run = accumulator.finish();
    assert!(run.grid.count(object.material) > run.spec.num_voxels() / 2);
    assert_eq!(run.bounding_box, report.outcome.clone().ok());
    assert_eq!(run.errors().count(), 0);
}

#[test]
fn reverted_leak_keeps_the_shell_only() {
    let object = unit_box();
    let params = VoxelizationParameters {
        leak_policy: LeakPolicy::Revert,
        ..VoxelizationParameters::default()
    };
    let mut accumulator = GridAccumulator::with_parameters(spec(), params);
    let report = accumulator.process(&object, &transform()).clone();

    let leak = report.leak().unwrap();
    assert!(leak.reverted);

    let surface = report.surface.as_ref().unwrap();
    let shell = surface.shell.unwrap();
    assert_eq!(accumulator.grid().count(object.material), surface.tagged);
    assert_eq!(report.outcome.as_ref().ok().map(|b| shell.contains(b)), Some(true));
}

#[test]
fn conservative_test_does_not_leak() {
    let object = unit_box();
    let mut accumulator =
        GridAccumulator::with_parameters(spec(), VoxelizationParameters::conservative());
    let report = accumulator.process(&object, &transform()).clone();

    assert!(report.is_ok(), "unexpected report: {:?}", report.warnings);

    let fill = report.fill.as_ref().unwrap();
    let shell = report.surface.as_ref().unwrap().shell.unwrap();
    assert!(fill.filled > 0);
    assert!(fill.touched_faces.is_empty());
    assert!(shell.contains(&fill.region.unwrap()));

    // The box of the labelled voxels covers the placed mesh.
    let placed = transform().transform_object(&object);
    let mesh_aabb = placed.local_aabb();
    let bbox = report.outcome.unwrap().to_world(accumulator.spec());

    for d in 0..3 {
        assert!(bbox.mins[d] <= mesh_aabb.mins[d] + 1.0e-9);
        assert!(bbox.maxs[d] >= mesh_aabb.maxs[d] - 1.0e-9);
    }

    // A 45/45/45 degrees rotated box of side 1 has a volume of 1.
    let voxel_size = accumulator.spec().voxel_size();
    let voxel_volume = voxel_size.x * voxel_size.y * voxel_size.z;
    let volume = accumulator.grid().count(object.material) as f64 * voxel_volume;
    assert!(volume > 1.0 && volume < 1.5, "volume: {}", volume);
}

#[test]
fn seeds_outside_the_domain_can_be_rejected() {
    let object = Object::cuboid(
        Vector::repeat(1.0),
        vec![Point::new(20.0, 0.0, 0.0)],
        MaterialId::new(1).unwrap(),
    );
    let params = VoxelizationParameters {
        out_of_domain: OutOfDomainPolicy::Reject,
        ..VoxelizationParameters::conservative()
    };
    let mut accumulator = GridAccumulator::with_parameters(spec(), params);
    let report = accumulator.process(&object, &transform());

    assert!(matches!(
        report.outcome,
        Err(VoxelizationError::OutOfDomain { .. })
    ));
}
