use core::fmt;
use core::num::NonZeroU32;

/// Identifier of the material an object is made of.
///
/// Material ids are strictly positive: the label `0` of a
/// [`LabelGrid`](crate::grid::LabelGrid) is reserved for free space.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(NonZeroU32);

impl MaterialId {
    /// The material with id `id`, or `None` if `id` is zero.
    #[inline]
    pub const fn new(id: u32) -> Option<Self> {
        match NonZeroU32::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// The numeric value of this id, as stored in label grids.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl From<MaterialId> for u32 {
    #[inline]
    fn from(id: MaterialId) -> u32 {
        id.get()
    }
}

impl TryFrom<u32> for MaterialId {
    type Error = u32;

    /// Fails with the given value if it is zero.
    #[inline]
    fn try_from(id: u32) -> Result<Self, u32> {
        Self::new(id).ok_or(id)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
