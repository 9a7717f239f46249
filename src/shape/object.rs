use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, Vector};
use crate::shape::{MaterialId, Triangle};
use crate::transformation::to_trimesh;

/// Error raised when building an [`Object`] from an indexed triangle buffer.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObjectBuilderError {
    /// A triangle refers to a vertex that does not exist.
    #[error("triangle {triangle} refers to vertex {index}, but there are only {num_vertices} vertices")]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: usize,
        /// The invalid vertex index.
        index: u32,
        /// The number of vertices of the buffer.
        num_vertices: usize,
    },
}

/// A rigid solid to embed into the grid.
///
/// The solid is described by its closed boundary surface, a set of points known to lie
/// strictly inside of it (the seeds of the interior flood fill), and the material it is made
/// of. Triangles and seeds are expressed in the object's local frame until transformed by an
/// [`ObjectTransform`](crate::transformation::ObjectTransform).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    /// The triangles of the closed surface of the object.
    pub triangles: Vec<Triangle>,
    /// Points lying strictly inside of the object.
    pub seeds: Vec<Point<Real>>,
    /// The material id written in every voxel of this object.
    pub material: MaterialId,
}

impl Object {
    /// Creates an object from its surface triangles, interior seeds, and material.
    pub fn new(triangles: Vec<Triangle>, seeds: Vec<Point<Real>>, material: MaterialId) -> Self {
        Self {
            triangles,
            seeds,
            material,
        }
    }

    /// Creates an object from a vertex buffer and an index buffer.
    pub fn from_indexed(
        vertices: &[Point<Real>],
        indices: &[[u32; 3]],
        seeds: Vec<Point<Real>>,
        material: MaterialId,
    ) -> Result<Self, ObjectBuilderError> {
        let mut triangles = Vec::with_capacity(indices.len());

        for (triangle, idx) in indices.iter().enumerate() {
            let mut pts = [Point::origin(); 3];

            for (pt, index) in pts.iter_mut().zip(idx.iter()) {
                *pt = *vertices.get(*index as usize).ok_or(
                    ObjectBuilderError::IndexOutOfBounds {
                        triangle,
                        index: *index,
                        num_vertices: vertices.len(),
                    },
                )?;
            }

            triangles.push(Triangle::from(pts));
        }

        Ok(Self::new(triangles, seeds, material))
    }

    /// An axis-aligned box centered at the local origin.
    pub fn cuboid(
        half_extents: Vector<Real>,
        seeds: Vec<Point<Real>>,
        material: MaterialId,
    ) -> Self {
        let (vertices, indices) = to_trimesh::cuboid(&half_extents);
        Self::from_indexed(&vertices, &indices, seeds, material)
            .unwrap_or_else(|_| unreachable!("the cuboid index buffer is always valid"))
    }

    /// A triangulated sphere centered at the local origin.
    ///
    /// The sphere is tessellated with `ntheta_subdiv` subdivisions around the `y` axis and
    /// `nphi_subdiv` subdivisions from pole to pole.
    pub fn ball(
        radius: Real,
        ntheta_subdiv: u32,
        nphi_subdiv: u32,
        seeds: Vec<Point<Real>>,
        material: MaterialId,
    ) -> Self {
        let (vertices, indices) = to_trimesh::ball(radius, ntheta_subdiv, nphi_subdiv);
        Self::from_indexed(&vertices, &indices, seeds, material)
            .unwrap_or_else(|_| unreachable!("the ball index buffer is always valid"))
    }

    /// The Aabb of this object's surface, in the frame of its vertices.
    ///
    /// Returns an invalid Aabb if the object has no triangle.
    pub fn local_aabb(&self) -> Aabb {
        self.triangles
            .iter()
            .map(Triangle::local_aabb)
            .fold(Aabb::new_invalid(), |acc, aabb| acc.merged(&aabb))
    }
}
