//! Tag: the opaque slot handle shared by every container in this crate.

/// Opaque handle for a slot in a [`TagMap`](crate::TagMap).
///
/// Tags are minted by the containers (`TagMap::insert`, `TagSet::create`,
/// `BiMap::insert`); callers hold, copy, and compare them but cannot
/// construct one or read the position it wraps. Equality is structural:
/// two tags are equal iff they name the same slot. No ordering is defined.
///
/// A slot's position is recycled after removal, so a tag obtained before a
/// `remove` compares equal to a tag minted by a later insert that reused
/// the slot. Tag equality means "same slot", not "same insertion event".
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Tag(usize);

impl Tag {
    /// Mint a tag for `position`. Crate-internal: only the containers may
    /// create tags, and positions are `usize` so an invalid (negative)
    /// position is unrepresentable rather than checked.
    #[inline]
    pub(crate) fn new(position: usize) -> Self {
        Tag(position)
    }

    /// Slot position this tag names. Crate-internal.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.0
    }
}
