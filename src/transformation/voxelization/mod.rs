//! Voxelization of closed triangle meshes into a labelled grid.
//!
//! An object is embedded in two steps. First, [`rasterize_surface`] tags the voxels crossed by
//! its surface triangles, the "shell". Then [`flood_fill`] tags the voxels enclosed by the
//! shell, starting from seeds known to be inside of the object. If the shell has gaps the fill
//! escapes, which [`detect_leak`] reports.
//!
//! Voxels are never overwritten: the first object to claim a voxel owns it.

pub use self::flood_fill::{flood_fill, revert_fill, FillStats};
pub use self::leak_detection::{detect_leak, LeakReport};
pub use self::parameters::{
    LeakPolicy, OutOfDomainPolicy, SurfaceTest, VoxelizationParameters, SURFACE_TEST_MARGIN,
};
pub use self::surface::{rasterize_surface, surface_probe_half_extents, SurfaceStats};
pub use self::voxelization_error::VoxelizationError;

mod flood_fill;
mod leak_detection;
mod parameters;
mod surface;
mod voxelization_error;
