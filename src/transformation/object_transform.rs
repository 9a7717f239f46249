use crate::math::{Point, Real, Rotation, Vector};
use crate::shape::{Object, Triangle};

/// The placement of an object into the grid domain.
///
/// Points are first scaled component-wise about the local origin, then rotated about the
/// fixed world axes `x`, then `y`, then `z`, and finally translated. The rotation is thus the
/// matrix `Rz * Ry * Rx`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObjectTransform {
    /// The translation applied last.
    pub translation: Vector<Real>,
    /// The rotation angles about the `x`, `y` and `z` world axes, in degrees.
    pub rotation_deg: Vector<Real>,
    /// The scale factors applied first along each local axis.
    pub scale: Vector<Real>,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ObjectTransform {
    /// Creates a new transform.
    pub fn new(translation: Vector<Real>, rotation_deg: Vector<Real>, scale: Vector<Real>) -> Self {
        Self {
            translation,
            rotation_deg,
            scale,
        }
    }

    /// The transform leaving every point unchanged.
    pub fn identity() -> Self {
        Self::new(Vector::zeros(), Vector::zeros(), Vector::repeat(1.0))
    }

    /// Creates a transform from the flat `[tx, ty, tz, rx, ry, rz, sx, sy, sz]` parameters,
    /// with angles in degrees.
    pub fn from_params(params: [Real; 9]) -> Self {
        Self::new(
            Vector::new(params[0], params[1], params[2]),
            Vector::new(params[3], params[4], params[5]),
            Vector::new(params[6], params[7], params[8]),
        )
    }

    /// The rotational part of this transform.
    pub fn rotation(&self) -> Rotation<Real> {
        Rotation::from_euler_angles(
            self.rotation_deg.x.to_radians(),
            self.rotation_deg.y.to_radians(),
            self.rotation_deg.z.to_radians(),
        )
    }

    /// Applies this transform to a single point.
    #[inline]
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.apply(&self.rotation(), pt)
    }

    /// Applies this transform to a set of points.
    pub fn transform_points(&self, pts: &[Point<Real>]) -> Vec<Point<Real>> {
        let rotation = self.rotation();
        pts.iter().map(|pt| self.apply(&rotation, pt)).collect()
    }

    /// Applies this transform to the vertices of a triangle.
    pub fn transform_triangle(&self, triangle: &Triangle) -> Triangle {
        let rotation = self.rotation();
        triangle.map_vertices(|pt| self.apply(&rotation, pt))
    }

    /// Applies this transform to the triangles and seeds of an object.
    pub fn transform_object(&self, object: &Object) -> Object {
        let rotation = self.rotation();
        let triangles = object
            .triangles
            .iter()
            .map(|tri| tri.map_vertices(|pt| self.apply(&rotation, pt)))
            .collect();
        let seeds = object
            .seeds
            .iter()
            .map(|pt| self.apply(&rotation, pt))
            .collect();

        Object::new(triangles, seeds, object.material)
    }

    #[inline]
    fn apply(&self, rotation: &Rotation<Real>, pt: &Point<Real>) -> Point<Real> {
        let scaled = Point::from(pt.coords.component_mul(&self.scale));
        rotation * scaled + self.translation
    }
}
