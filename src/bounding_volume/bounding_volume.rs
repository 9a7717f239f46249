/// Trait of bounding volumes.
///
/// Implemented both by world-space boxes ([`Aabb`](crate::bounding_volume::Aabb)) and by
/// index-space boxes ([`VoxelAabb`](crate::bounding_volume::VoxelAabb)). Two bounding volumes
/// must be mergeable into a bigger bounding volume.
pub trait BoundingVolume {
    /// Checks if this bounding volume intersect with another one.
    fn intersects(&self, _: &Self) -> bool;

    /// Checks if this bounding volume contains another one.
    fn contains(&self, _: &Self) -> bool;

    /// Merges this bounding volume with another one. The merge is done in-place.
    fn merge(&mut self, _: &Self);

    /// Merges this bounding volume with another one.
    fn merged(&self, _: &Self) -> Self;
}
