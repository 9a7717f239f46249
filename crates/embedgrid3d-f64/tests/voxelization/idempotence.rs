use embedgrid3d_f64::grid::{GridSpec, LabelGrid};
use embedgrid3d_f64::math::{Point, Vector};
use embedgrid3d_f64::shape::{MaterialId, Object};
use embedgrid3d_f64::transformation::voxelization::{
    flood_fill, rasterize_surface, VoxelizationError, VoxelizationParameters,
};
use embedgrid3d_f64::transformation::ObjectTransform;

fn embed(grid: &mut LabelGrid, spec: &GridSpec, object: &Object) -> Result<(), VoxelizationError> {
    let params = VoxelizationParameters::default();
    let _ = rasterize_surface(grid, spec, &object.triangles, object.material, &params)?;
    let _ = flood_fill(grid, spec, &object.seeds, object.material, &params)?;
    Ok(())
}

fn placed_box() -> Object {
    let object = Object::cuboid(
        Vector::new(1.0, 0.7, 0.5),
        vec![Point::origin()],
        MaterialId::new(2).unwrap(),
    );
    ObjectTransform::from_params([0.2, -0.1, 0.3, 10.0, 25.0, -40.0, 1.0, 1.0, 1.0])
        .transform_object(&object)
}

#[test]
fn fresh_grids_get_identical_labels() {
    let spec = GridSpec::from_bounds([-2.0, 2.0, -2.0, 2.0, -2.0, 2.0], [37, 41, 29]).unwrap();
    let object = placed_box();

    let mut first = LabelGrid::for_spec(&spec);
    let mut second = LabelGrid::for_spec(&spec);
    embed(&mut first, &spec, &object).unwrap();
    embed(&mut second, &spec, &object).unwrap();

    assert!(first.count(object.material) > 0);
    assert_eq!(first, second);
}

#[test]
fn embedding_twice_changes_nothing() {
    let spec = GridSpec::from_bounds([-2.0, 2.0, -2.0, 2.0, -2.0, 2.0], [37, 41, 29]).unwrap();
    let object = placed_box();
    let mut grid = LabelGrid::for_spec(&spec);
    embed(&mut grid, &spec, &object).unwrap();
    let before = grid.clone();

    // The seed now lies in an occupied voxel.
    assert!(matches!(
        embed(&mut grid, &spec, &object),
        Err(VoxelizationError::SeedNotInterior { found: 2, .. })
    ));
    assert_eq!(grid, before);
}
