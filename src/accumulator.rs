//! Sequential embedding of several objects into a single grid.

use crate::bounding_volume::{bounding_box, bounding_box_in, BoundingVolume, VoxelAabb};
use crate::grid::{GridSpec, LabelGrid, MaterialLookup};
use crate::shape::{MaterialId, Object};
use crate::transformation::voxelization::{
    detect_leak, flood_fill, rasterize_surface, revert_fill, FillStats, LeakPolicy, LeakReport,
    SurfaceStats, VoxelizationError, VoxelizationParameters,
};
use crate::transformation::ObjectTransform;

/// The outcome of the embedding of one object.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectReport {
    /// The material of the object.
    pub material: MaterialId,
    /// The box of every voxel carrying this material after the object was embedded, or the
    /// error that stopped its embedding.
    pub outcome: Result<VoxelAabb, VoxelizationError>,
    /// Statistics of the surface rasterization, if it ran.
    pub surface: Option<SurfaceStats>,
    /// Statistics of the interior flood fill, if it ran.
    pub fill: Option<FillStats>,
    /// Problems that did not prevent the embedding, e.g., a leak of the flood fill.
    pub warnings: Vec<VoxelizationError>,
}

impl ObjectReport {
    fn failed(material: MaterialId, err: VoxelizationError) -> Self {
        Self {
            material,
            outcome: Err(err),
            surface: None,
            fill: None,
            warnings: Vec::new(),
        }
    }

    /// Was the object embedded without any error nor warning?
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok() && self.warnings.is_empty()
    }

    /// Was the object embedded, but with a result that should not be trusted?
    pub fn is_suspect(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, VoxelizationError::LeakDetected(_)))
    }

    /// The leak detected while filling the object interior, if any.
    pub fn leak(&self) -> Option<&LeakReport> {
        self.warnings.iter().find_map(|w| match w {
            VoxelizationError::LeakDetected(report) => Some(report),
            _ => None,
        })
    }
}

/// The final state of a voxelization run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// The labelled grid.
    pub grid: LabelGrid,
    /// The geometry of the grid.
    pub spec: GridSpec,
    /// The bounding box computed for the last successfully embedded object.
    pub bounding_box: Option<VoxelAabb>,
    /// The reports of every object, in processing order.
    pub reports: Vec<ObjectReport>,
}

impl RunReport {
    /// The errors of the objects that could not be embedded.
    pub fn errors(&self) -> impl Iterator<Item = (MaterialId, &VoxelizationError)> {
        self.reports
            .iter()
            .filter_map(|r| r.outcome.as_ref().err().map(|e| (r.material, e)))
    }

    /// The leaks of the objects that were embedded but should not be trusted.
    pub fn suspects(&self) -> impl Iterator<Item = (MaterialId, &LeakReport)> {
        self.reports
            .iter()
            .filter_map(|r| r.leak().map(|leak| (r.material, leak)))
    }

    /// Per-material voxel tables of the final grid.
    pub fn lookup(&self) -> MaterialLookup {
        MaterialLookup::from_grid(&self.grid)
    }

    /// A grid where only the voxels of the last bounding box are set, to `material`.
    pub fn bounding_box_grid(&self, material: MaterialId) -> Option<LabelGrid> {
        self.bounding_box
            .map(|aabb| aabb.to_mask_grid(&self.spec, material))
    }
}

/// Embeds objects one after the other into a grid it owns.
///
/// Objects are processed in order and voxels are never overwritten, so an object processed
/// earlier wins every voxel it shares with later ones.
pub struct GridAccumulator {
    spec: GridSpec,
    params: VoxelizationParameters,
    grid: LabelGrid,
    bounding_box: Option<VoxelAabb>,
    reports: Vec<ObjectReport>,
}

impl GridAccumulator {
    /// A new accumulator on an empty grid, with the default voxelization parameters.
    pub fn new(spec: GridSpec) -> Self {
        Self::with_parameters(spec, VoxelizationParameters::default())
    }

    /// A new accumulator on an empty grid.
    pub fn with_parameters(spec: GridSpec, params: VoxelizationParameters) -> Self {
        Self {
            grid: LabelGrid::for_spec(&spec),
            spec,
            params,
            bounding_box: None,
            reports: Vec::new(),
        }
    }

    /// The geometry of the grid.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// The voxelization parameters.
    pub fn parameters(&self) -> &VoxelizationParameters {
        &self.params
    }

    /// The grid in its current state.
    pub fn grid(&self) -> &LabelGrid {
        &self.grid
    }

    /// The bounding box of the last successfully embedded object.
    pub fn bounding_box(&self) -> Option<&VoxelAabb> {
        self.bounding_box.as_ref()
    }

    /// The reports of every object processed so far.
    pub fn reports(&self) -> &[ObjectReport] {
        &self.reports
    }

    /// Places `object` with `transform` and embeds it into the grid.
    ///
    /// This never fails: errors are recorded in the returned report, and the next objects can
    /// still be processed. Note that a failing flood fill leaves the surface shell of the
    /// object in the grid.
    pub fn process(&mut self, object: &Object, transform: &ObjectTransform) -> &ObjectReport {
        let report = self.embed(&transform.transform_object(object));

        match &report.outcome {
            Ok(aabb) => {
                self.bounding_box = Some(*aabb);
                log::debug!("material {}: bounding box {}", report.material, aabb);
            }
            Err(err) => log::error!("material {}: {}", report.material, err),
        }

        self.push_report(report)
    }

    /// Processes several objects, in order, and returns their reports.
    pub fn process_all<'a, I>(&mut self, objects: I) -> &[ObjectReport]
    where
        I: IntoIterator<Item = (&'a Object, &'a ObjectTransform)>,
    {
        let first = self.reports.len();

        for (object, transform) in objects {
            let _ = self.process(object, transform);
        }

        &self.reports[first..]
    }

    /// Records a report computed elsewhere. The grid is left unchanged.
    pub fn merge(&mut self, report: ObjectReport) {
        let _ = self.push_report(report);
    }

    /// Ends the run.
    pub fn finish(self) -> RunReport {
        RunReport {
            grid: self.grid,
            spec: self.spec,
            bounding_box: self.bounding_box,
            reports: self.reports,
        }
    }

    fn push_report(&mut self, report: ObjectReport) -> &ObjectReport {
        self.reports.push(report);
        // NOTE: the report was just pushed.
        &self.reports[self.reports.len() - 1]
    }

    fn embed(&mut self, object: &Object) -> ObjectReport {
        let material = object.material;
        let material_seen_before = self.grid.count(material) > 0;

        let surface = match rasterize_surface(
            &mut self.grid,
            &self.spec,
            &object.triangles,
            material,
            &self.params,
        ) {
            Ok(surface) => surface,
            Err(err) => return ObjectReport::failed(material, err),
        };

        log::debug!(
            "material {}: {} surface voxels tagged",
            material,
            surface.tagged
        );

        if object.seeds.is_empty() {
            log::debug!("material {}: no seed, only the surface is tagged", material);
        }

        let fill = match flood_fill(
            &mut self.grid,
            &self.spec,
            &object.seeds,
            material,
            &self.params,
        ) {
            Ok(fill) => fill,
            Err(err) => {
                let mut report = ObjectReport::failed(material, err);
                report.surface = Some(surface);
                return report;
            }
        };

        log::debug!(
            "material {}: {} interior voxels filled",
            material,
            fill.filled
        );

        let mut warnings = Vec::new();
        let leak = detect_leak(&self.spec, material, &fill, surface.shell.as_ref());

        if let Some(mut leak) = leak.clone() {
            if self.params.leak_policy == LeakPolicy::Revert {
                revert_fill(&mut self.grid, &fill);
                leak.reverted = true;
            }

            log::warn!("{}", leak);
            warnings.push(VoxelizationError::LeakDetected(leak));
        }

        // Without leak, every voxel of this object lies within its shell or its fill region.
        let scan_region = match (surface.shell, fill.region) {
            (Some(shell), Some(region)) => Some(shell.merged(&region)),
            (shell, region) => shell.or(region),
        };

        let outcome = match scan_region {
            Some(region) if leak.is_none() && !material_seen_before => {
                bounding_box_in(&self.grid, material, &region)
            }
            _ => bounding_box(&self.grid, material),
        };

        ObjectReport {
            material,
            outcome,
            surface: Some(surface),
            fill: Some(fill),
            warnings,
        }
    }
}
