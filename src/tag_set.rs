//! TagSet: presence-only view over the TagMap core.

use crate::tag::Tag;
use crate::tag_map::TagMap;

/// Records which tags exist, without storing a payload.
///
/// Every operation delegates to a [`TagMap<()>`]; there is no bookkeeping
/// here beyond the core's, so tag minting, recycling, and the
/// revive/pre-declare edge cases of [`TagMap::set`] all carry over.
#[derive(Clone, Debug, Default)]
pub struct TagSet {
    slots: TagMap<()>,
}

impl TagSet {
    pub fn new() -> Self {
        Self {
            slots: TagMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Mint a fresh member tag. O(1) amortized.
    pub fn create(&mut self) -> Tag {
        self.slots.insert(())
    }

    /// Make `tag` a member again (or pre-declare it); returns true if it
    /// was newly inserted. Inherits the [`TagMap::set`] revive and
    /// out-of-bounds growth paths.
    pub fn insert(&mut self, tag: Tag) -> bool {
        self.slots.set(tag, ()).is_none()
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.slots.contains(tag)
    }

    /// Remove `tag`; returns true if it was a member. Idempotent. O(1).
    pub fn remove(&mut self, tag: Tag) -> bool {
        self.slots.remove(tag).is_some()
    }

    /// Member tags in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.slots.tags()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: create → member; remove → not a member; reinserting the
    /// same tag → member again.
    #[test]
    fn create_remove_reinsert() {
        let mut s = TagSet::new();
        let t = s.create();
        assert!(s.contains(t));

        assert!(s.remove(t));
        assert!(!s.contains(t));
        assert!(!s.remove(t));

        assert!(s.insert(t));
        assert!(s.contains(t));
        assert!(!s.insert(t), "already a member");
        assert_eq!(s.len(), 1);
    }

    /// Invariant: membership reuses freed positions LIFO like the core.
    #[test]
    fn reuse_matches_core_policy() {
        let mut s = TagSet::new();
        let t0 = s.create();
        let t1 = s.create();
        s.remove(t0);
        assert_eq!(s.create(), t0);
        assert!(s.contains(t1));
        assert_eq!(s.len(), 2);
    }

    /// Invariant: reinserting a freed tag unlinks it from reuse, same as
    /// the core's revive path.
    #[test]
    fn reinsert_freed_tag_blocks_reuse() {
        let mut s = TagSet::new();
        let t0 = s.create();
        let _t1 = s.create();
        s.remove(t0);

        assert!(s.insert(t0));
        // t0 is live again, so the next create must mint a new position.
        let t2 = s.create();
        assert_ne!(t2, t0);
        assert_eq!(s.len(), 3);
    }

    /// Invariant: iteration yields each member exactly once.
    #[test]
    fn iter_yields_members_once() {
        let mut s = TagSet::new();
        let t0 = s.create();
        let t1 = s.create();
        let t2 = s.create();
        s.remove(t1);

        let members: Vec<Tag> = s.iter().collect();
        assert_eq!(members.len(), 2);
        assert!(members.contains(&t0));
        assert!(members.contains(&t2));
        assert!(!members.contains(&t1));
    }
}
