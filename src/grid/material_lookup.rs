use std::collections::BTreeMap;

use crate::grid::LabelGrid;
use crate::math::VoxelCoords;
use crate::shape::MaterialId;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The offsets of the cells sharing the lower corner of a node: the cell of the node itself and
/// its neighbors toward `-i`, `-j` and `-k`.
const LOWER_CORNER_CELLS: [[u32; 3]; 8] = [
    [0, 0, 0],
    [0, 0, 1],
    [1, 0, 0],
    [1, 0, 1],
    [0, 1, 0],
    [0, 1, 1],
    [1, 1, 0],
    [1, 1, 1],
];

/// Per-material tables of the nodes of a labelled grid.
///
/// Nodes share the indexing of the voxels: node `(i, j, k)` is the lower corner of voxel
/// `(i, j, k)`, and its linear index is the one of that voxel. For each material present in the
/// grid, two lists of linear node indices are stored in ascending order:
/// - the interior: every node whose voxel carries the material.
/// - the surface: every node where the material meets another label. Such a node has between
///   one and seven of its eight lower-corner cells (the voxels `(i - di, j - dj, k - dk)` with
///   `di, dj, dk` in `{0, 1}`) carrying the material. Cells outside of the grid count as free
///   space, so a surface node may lie in a free voxel, or on the lower faces of the grid.
///
/// Only the materials actually present are stored, in ascending order, and the lists are packed
/// contiguously: the nodes of the `n`-th material of [`Self::materials`] are
/// `interior[interior_offsets[n]..interior_offsets[n + 1]]`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MaterialLookup {
    num_objects: u32,
    materials: Vec<MaterialId>,
    interior_offsets: Vec<usize>,
    interior: Vec<usize>,
    surface_offsets: Vec<usize>,
    surface: Vec<usize>,
}

impl MaterialLookup {
    /// Builds the lookup tables of every material of `grid`.
    pub fn from_grid(grid: &LabelGrid) -> Self {
        let counts = label_counts(grid);
        let materials: Vec<_> = counts.keys().filter_map(|l| MaterialId::new(*l)).collect();
        let num_objects = materials.last().map(|m| m.get()).unwrap_or(0);

        let interior_offsets = offsets_from_counts(counts.values().copied());
        let mut cursors = interior_offsets.clone();
        let mut interior = vec![0; *interior_offsets.last().unwrap_or(&0)];
        let mut surface_lists = vec![Vec::new(); materials.len()];

        let slot_of = |label: u32| materials.binary_search_by_key(&label, |m| m.get()).ok();

        for (id, label) in grid.data().iter().enumerate() {
            if let Some(slot) = slot_of(*label) {
                interior[cursors[slot]] = id;
                cursors[slot] += 1;
            }
        }

        let resolution = grid.resolution();
        let mut corner = Vec::with_capacity(LOWER_CORNER_CELLS.len());

        for k in 0..resolution.z {
            for j in 0..resolution.y {
                for i in 0..resolution.x {
                    let node = VoxelCoords::new(i, j, k);
                    lower_corner_labels(grid, node, &mut corner);

                    for (label, count) in distinct_counts(&mut corner) {
                        if count < LOWER_CORNER_CELLS.len() {
                            if let Some(slot) = slot_of(label) {
                                surface_lists[slot].push(grid.linear_index(node));
                            }
                        }
                    }
                }
            }
        }

        let surface_offsets = offsets_from_counts(surface_lists.iter().map(Vec::len));
        let surface = surface_lists.into_iter().flatten().collect();

        Self {
            num_objects,
            materials,
            interior_offsets,
            interior,
            surface_offsets,
            surface,
        }
    }

    /// The largest material id of the grid, `0` if the grid has no object.
    pub fn num_objects(&self) -> u32 {
        self.num_objects
    }

    /// The materials present in the grid, in ascending order.
    pub fn materials(&self) -> &[MaterialId] {
        &self.materials
    }

    /// The linear indices of every node of `material`.
    pub fn interior_of(&self, material: MaterialId) -> &[usize] {
        self.slice(&self.interior_offsets, &self.interior, material)
    }

    /// The linear indices of the surface nodes of `material`.
    pub fn surface_of(&self, material: MaterialId) -> &[usize] {
        self.slice(&self.surface_offsets, &self.surface, material)
    }

    /// The number of voxels of `material`.
    pub fn count_of(&self, material: MaterialId) -> usize {
        self.interior_of(material).len()
    }

    /// The offsets of the interior list of each material of [`Self::materials`], followed by
    /// its total length.
    pub fn interior_offsets(&self) -> &[usize] {
        &self.interior_offsets
    }

    /// The offsets of the surface list of each material of [`Self::materials`], followed by
    /// its total length.
    pub fn surface_offsets(&self) -> &[usize] {
        &self.surface_offsets
    }

    fn slice<'a>(&self, offsets: &[usize], data: &'a [usize], material: MaterialId) -> &'a [usize] {
        match self.materials.binary_search(&material) {
            Ok(slot) => &data[offsets[slot]..offsets[slot + 1]],
            Err(_) => &[],
        }
    }
}

/// Fills `out` with the labels of the lower-corner cells of `node` that are inside of the grid.
fn lower_corner_labels(grid: &LabelGrid, node: VoxelCoords, out: &mut Vec<u32>) {
    out.clear();

    for [di, dj, dk] in LOWER_CORNER_CELLS {
        if let (Some(i), Some(j), Some(k)) = (
            node.x.checked_sub(di),
            node.y.checked_sub(dj),
            node.z.checked_sub(dk),
        ) {
            out.push(grid.get(VoxelCoords::new(i, j, k)));
        }
    }
}

/// The non-zero labels of `labels` with their number of occurrences. Sorts `labels`.
fn distinct_counts(labels: &mut [u32]) -> impl Iterator<Item = (u32, usize)> + '_ {
    labels.sort_unstable();
    labels
        .chunk_by(|a, b| a == b)
        .filter(|run| run[0] != 0)
        .map(|run| (run[0], run.len()))
}

fn offsets_from_counts(counts: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut offsets = vec![0];
    let mut total = 0;

    for count in counts {
        total += count;
        offsets.push(total);
    }

    offsets
}

/// The number of voxels of each non-zero label present in `grid`.
fn label_counts(grid: &LabelGrid) -> BTreeMap<u32, usize> {
    let count_slab = |slab: &[u32]| {
        let mut counts = BTreeMap::new();
        for label in slab.iter().filter(|l| **l != 0) {
            *counts.entry(*label).or_insert(0) += 1;
        }
        counts
    };
    let add = |mut a: BTreeMap<u32, usize>, b: BTreeMap<u32, usize>| {
        for (label, count) in b {
            *a.entry(label).or_insert(0) += count;
        }
        a
    };

    let resolution = grid.resolution();
    let slab_len = (resolution.x as usize * resolution.y as usize).max(1);

    #[cfg(feature = "parallel")]
    let counts = grid
        .data()
        .par_chunks(slab_len)
        .map(count_slab)
        .reduce(BTreeMap::new, add);

    #[cfg(not(feature = "parallel"))]
    let counts = grid
        .data()
        .chunks(slab_len)
        .map(count_slab)
        .fold(BTreeMap::new(), add);

    counts
}
