//! BiMap: tag ↔ value map composed from the TagMap core and a hash index.

use crate::reentrancy::ReentryCheck;
use crate::tag::Tag;
use crate::tag_map::TagMap;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::HashTable;
use std::collections::hash_map::RandomState;

/// Stored alongside each value so the index never re-runs `V: Hash` after
/// insertion; indexing always uses the precomputed hash.
#[derive(Clone)]
struct Entry<V> {
    value: V,
    hash: u64,
}

/// Bidirectional map between [`Tag`]s and hashable values.
///
/// Tag → value lookups go through a [`TagMap`], which owns all slot
/// bookkeeping; value → tag lookups go through a [`HashTable`] of tags
/// probed with the stored hashes. The two directions are mutual inverses
/// at every public-method boundary: every mutation tears down both stale
/// links before writing new ones, so no value is ever reachable from two
/// live tags.
///
/// Values must carry a total, stable `Eq`/`Hash` contract; mutating
/// hash-relevant state of a stored value (e.g. via interior mutability)
/// invalidates the index.
pub struct BiMap<V, S = RandomState> {
    hasher: S,
    index: HashTable<Tag>,
    slots: TagMap<Entry<V>>,
    reentrancy: ReentryCheck,
}

impl<V> BiMap<V>
where
    V: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<V> Default for BiMap<V>
where
    V: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S> BiMap<V, S>
where
    V: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            index: HashTable::new(),
            slots: TagMap::new(),
            reentrancy: ReentryCheck::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Associate `value` with a freshly minted tag and return it.
    ///
    /// If an equal value is already present its old association is torn
    /// down first, so the returned tag is the value's only live tag.
    /// O(1) amortized.
    pub fn insert(&mut self, value: V) -> Tag {
        let _pass = self.reentrancy.enter();
        let hash = self.hasher.hash_one(&value);
        if let Some(prev) = self.find_tag(hash, &value) {
            self.unlink_tag(prev);
        }
        let tag = self.slots.insert(Entry { value, hash });
        self.link(hash, tag);
        tag
    }

    /// Associate `value` with a specific `tag`, returning the value the
    /// tag previously held.
    ///
    /// Both stale links are torn down before either direction is written:
    /// `value` may currently live at another tag, and `tag` may hold
    /// another value. Writing first would leave a window where two tags
    /// claim one value, which teardown-then-write makes impossible.
    ///
    /// Storing at `tag` inherits [`TagMap::set`] semantics, including the
    /// non-O(1) revive of a freed position and out-of-bounds growth for a
    /// tag transplanted from a larger container.
    pub fn associate(&mut self, tag: Tag, value: V) -> Option<V> {
        let _pass = self.reentrancy.enter();
        let hash = self.hasher.hash_one(&value);
        let prev = self.find_tag(hash, &value);
        let displaced = if prev == Some(tag) {
            // Re-associating a value with the tag it already occupies.
            self.unlink_tag(tag)
        } else {
            if let Some(prev) = prev {
                self.unlink_tag(prev);
            }
            self.unlink_tag(tag)
        };
        let stale = self.slots.set(tag, Entry { value, hash });
        debug_assert!(stale.is_none(), "slot must be vacant after teardown");
        self.link(hash, tag);
        displaced
    }

    /// Remove the association at `tag` from both directions, returning the
    /// value. Idempotent: an absent tag is a no-op. O(1).
    pub fn dissociate_tag(&mut self, tag: Tag) -> Option<V> {
        let _pass = self.reentrancy.enter();
        self.unlink_tag(tag)
    }

    /// Remove the association of a value equal to `q` from both
    /// directions, returning its tag. Idempotent.
    pub fn dissociate_value<Q>(&mut self, q: &Q) -> Option<Tag>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _pass = self.reentrancy.enter();
        let hash = self.hasher.hash_one(q);
        let tag = self.find_tag(hash, q)?;
        self.unlink_tag(tag);
        Some(tag)
    }

    /// Value at `tag`, absent for never-seen or dissociated tags. O(1).
    pub fn get(&self, tag: Tag) -> Option<&V> {
        let _pass = self.reentrancy.enter();
        self.slots.get(tag).map(|e| &e.value)
    }

    pub fn contains_tag(&self, tag: Tag) -> bool {
        self.slots.contains(tag)
    }

    /// Tag of the value equal to `q`. O(1) average.
    pub fn tag_of<Q>(&self, q: &Q) -> Option<Tag>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _pass = self.reentrancy.enter();
        let hash = self.hasher.hash_one(q);
        self.find_tag(hash, q)
    }

    pub fn contains_value<Q>(&self, q: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.tag_of(q).is_some()
    }

    /// Live associations in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &V)> {
        self.slots.iter().map(|(t, e)| (t, &e.value))
    }

    fn find_tag<Q>(&self, hash: u64, q: &Q) -> Option<Tag>
    where
        V: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.index
            .find(hash, |&t| {
                self.slots
                    .get(t)
                    .map(|e| e.value.borrow() == q)
                    .unwrap_or(false)
            })
            .copied()
    }

    /// Remove `tag` from both structures. The slot is authoritative: a
    /// live slot whose index entry is missing means the two directions
    /// diverged, which is a logic bug and fatal.
    fn unlink_tag(&mut self, tag: Tag) -> Option<V> {
        let entry = self.slots.remove(tag)?;
        match self.index.find_entry(entry.hash, |&t| t == tag) {
            Ok(indexed) => {
                indexed.remove();
            }
            Err(_) => unreachable!("value index lost the entry for a live tag"),
        }
        Some(entry.value)
    }

    fn link(&mut self, hash: u64, tag: Tag) {
        let _ = self.index.insert_unique(hash, tag, |&t| {
            self.slots.get(t).map(|e| e.hash).unwrap_or(0)
        });
    }
}

impl<V, S> Clone for BiMap<V, S>
where
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            hasher: self.hasher.clone(),
            index: self.index.clone(),
            slots: self.slots.clone(),
            reentrancy: ReentryCheck::new(),
        }
    }
}

impl<V, S> fmt::Debug for BiMap<V, S>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|(t, e)| (t, &e.value)))
            .finish()
    }
}
