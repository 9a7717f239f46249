//! The voxel grid: its geometry, its labels, and per-material lookup tables.

pub use self::grid_spec::{GridSpec, GridSpecError};
pub use self::label_grid::LabelGrid;
pub use self::material_lookup::MaterialLookup;

mod grid_spec;
mod label_grid;
mod material_lookup;
