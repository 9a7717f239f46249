use core::fmt;

use crate::bounding_volume::{AxisMask, BoundingVolume, VoxelAabb};
use crate::grid::GridSpec;
use crate::shape::MaterialId;
use crate::transformation::voxelization::FillStats;

/// Description of a flood fill that escaped the surface shell of its object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeakReport {
    /// The material of the leaking object.
    pub material: MaterialId,
    /// Number of voxels tagged by the fill.
    pub filled: usize,
    /// The box of the filled voxels.
    pub region: VoxelAabb,
    /// The box of the surface shell of the object, if it crosses any voxel.
    pub shell: Option<VoxelAabb>,
    /// The faces of the grid domain reached by the fill.
    pub touched_faces: AxisMask,
    /// The faces of the grid domain reached by the fill but not by the shell.
    pub escaped_faces: AxisMask,
    /// Were the filled voxels reset to free space?
    pub reverted: bool,
}

impl fmt::Display for LeakReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "the interior of material {} leaked: {} voxels filled in {}",
            self.material, self.filled, self.region
        )?;

        match &self.shell {
            Some(shell) => write!(f, ", outside of the surface shell {}", shell)?,
            None => write!(f, " without any surface shell")?,
        }

        if !self.escaped_faces.is_empty() {
            write!(f, ", reaching the domain faces {:?}", self.escaped_faces)?;
        }

        if self.reverted {
            write!(f, " (reverted)")?;
        }

        Ok(())
    }
}

/// Checks if the flood fill described by `fill` escaped the surface `shell` of its object.
///
/// The interior of a closed surface is enclosed by the voxels the surface crosses. A fill is
/// thus reported as a leak if it reaches voxels outside of the box of the shell, or a face of
/// the domain that the shell does not reach. A fill with no shell at all always leaks.
///
/// Returns `None` if the fill is sound or filled nothing.
pub fn detect_leak(
    spec: &GridSpec,
    material: MaterialId,
    fill: &FillStats,
    shell: Option<&VoxelAabb>,
) -> Option<LeakReport> {
    let region = fill.region?;
    let shell_faces = shell
        .map(|shell| shell.touched_faces(spec.resolution()))
        .unwrap_or_else(AxisMask::empty);
    let escaped_faces = fill.touched_faces - shell_faces;
    let enclosed = shell.map(|shell| shell.contains(&region)).unwrap_or(false);

    if enclosed && escaped_faces.is_empty() {
        return None;
    }

    Some(LeakReport {
        material,
        filled: fill.filled,
        region,
        shell: shell.copied(),
        touched_faces: fill.touched_faces,
        escaped_faces,
        reverted: false,
    })
}
