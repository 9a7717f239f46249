use crate::math::Real;

/// Relative enlargement of the voxel boxes tested against the surface triangles.
///
/// Triangles lying exactly on a voxel face are then reliably detected despite rounding errors.
pub const SURFACE_TEST_MARGIN: Real = 1.0e-3;

/// The test deciding if a voxel belongs to the surface shell of an object.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceTest {
    /// Probes each voxel with a cube centered on the voxel center, with a side equal to the
    /// smallest voxel size of the grid.
    ///
    /// This is exact on grids with uniform spacing. With anisotropic voxels, the probe only
    /// covers part of each voxel along the coarse axes, so a steep surface may cross a layer of
    /// voxels without tagging any of them. A flood fill can then leak through the shell.
    IsotropicProbe,
    /// Tests each triangle against the whole (possibly anisotropic) box of each voxel.
    ///
    /// The resulting shell cannot be crossed by a 6-connected flood fill.
    Conservative,
}

impl Default for SurfaceTest {
    fn default() -> Self {
        SurfaceTest::IsotropicProbe
    }
}

/// What to do with triangles and seeds lying outside of the grid domain.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutOfDomainPolicy {
    /// Ignore them, with a warning.
    Skip,
    /// Fail with [`VoxelizationError::OutOfDomain`](super::VoxelizationError::OutOfDomain)
    /// before modifying the grid.
    Reject,
}

impl Default for OutOfDomainPolicy {
    fn default() -> Self {
        OutOfDomainPolicy::Skip
    }
}

/// What to do with the voxels filled by a flood fill that leaked out of its object.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LeakPolicy {
    /// Keep the filled voxels and report the leak.
    Flag,
    /// Reset the filled voxels to free space, keeping only the surface shell, and report the
    /// leak.
    Revert,
}

impl Default for LeakPolicy {
    fn default() -> Self {
        LeakPolicy::Flag
    }
}

/// Parameters of the voxelization of objects.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct VoxelizationParameters {
    /// The test selecting the voxels of the surface shell.
    pub surface_test: SurfaceTest,
    /// The handling of triangles and seeds outside of the grid domain.
    pub out_of_domain: OutOfDomainPolicy,
    /// The handling of flood fills escaping their object.
    pub leak_policy: LeakPolicy,
}

impl VoxelizationParameters {
    /// The default parameters with the exact surface test.
    pub fn conservative() -> Self {
        Self {
            surface_test: SurfaceTest::Conservative,
            ..Self::default()
        }
    }
}
