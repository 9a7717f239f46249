use embedgrid3d_f64::accumulator::GridAccumulator;
use embedgrid3d_f64::grid::{GridSpec, LabelGrid};
use embedgrid3d_f64::math::{Point, Vector};
use embedgrid3d_f64::shape::{MaterialId, Object};
use embedgrid3d_f64::transformation::voxelization::VoxelizationParameters;
use embedgrid3d_f64::transformation::ObjectTransform;
use oorandom::Rand64;

const HALF_EXTENT: f64 = 1.0;

fn spec() -> GridSpec {
    GridSpec::from_bounds([-2.0, 2.0, -2.0, 2.0, -2.0, 2.0], [41, 43, 39]).unwrap()
}

fn transform() -> ObjectTransform {
    ObjectTransform::from_params([0.1, -0.05, 0.0, 15.0, -30.0, 40.0, 1.0, 1.0, 1.0])
}

fn voxelize(seeds: Vec<Point<f64>>) -> LabelGrid {
    let object = Object::cuboid(
        Vector::repeat(HALF_EXTENT),
        seeds,
        MaterialId::new(1).unwrap(),
    );
    let mut accumulator =
        GridAccumulator::with_parameters(spec(), VoxelizationParameters::conservative());
    assert!(accumulator.process(&object, &transform()).is_ok());
    accumulator.finish().grid
}

fn random_interior_point(rng: &mut Rand64) -> Point<f64> {
    let mut coord = || (rng.rand_float() * 2.0 - 1.0) * 0.6 * HALF_EXTENT;
    Point::new(coord(), coord(), coord())
}

#[test]
fn any_interior_seed_gives_the_same_grid() {
    let reference = voxelize(vec![Point::origin()]);
    let mut rng = Rand64::new(42);

    for _ in 0..10 {
        let seed = random_interior_point(&mut rng);
        assert_eq!(voxelize(vec![seed]), reference, "seed: {}", seed);
    }
}

#[test]
fn several_seeds_give_the_same_grid() {
    let reference = voxelize(vec![Point::origin()]);
    let mut rng = Rand64::new(7);
    let seeds: Vec<_> = (0..5).map(|_| random_interior_point(&mut rng)).collect();

    assert_eq!(voxelize(seeds), reference);
}
