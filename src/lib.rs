//! tagmap: single-threaded sparse containers keyed by opaque, reusable
//! tags, built in small verifiable layers.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: give callers a lightweight, copyable identity (`Tag`) for a
//!   value whose physical slot may be recycled after deletion, without
//!   the caller ever depending on the slot index.
//! - Layers:
//!   - TagMap<V>: the core. A dense `Vec<Option<V>>` plus a LIFO
//!     free-list of reusable positions; owns every allocation and
//!     recycling decision in the crate.
//!   - TagSet: TagMap<()>; membership without payload.
//!   - BiMap<V, S>: TagMap (tag → value) paired with a hashbrown
//!     HashTable index (value → tag) for O(1) average lookup in both
//!     directions; includes a debug-only reentrancy check since it is the
//!     one layer that runs user `Eq`/`Hash` while mutating.
//!
//! Constraints
//! - Single-owner value semantics: no atomics, no locking, no I/O;
//!   cloning a container clones all of its state.
//! - O(1) steady-state operations. Two deliberate exceptions, both on
//!   `TagMap::set`: reviving a specific freed position (linear in the
//!   free-list) and pre-declaring a position beyond the current bound
//!   (linear in the gap).
//! - Tags carry no generation: a recycled position makes an old tag
//!   compare equal to the new one. Equality means "same slot".
//!
//! Why this split?
//! - Localize invariants: only TagMap touches the free-list, so the
//!   no-duplicate-free and free-implies-vacant invariants live in one
//!   file. TagSet and BiMap are consumers of that contract.
//! - Clear failure boundaries: expected absence is `Option`/no-op
//!   everywhere; internal-invariant violations panic.
//!
//! Hasher and rehashing invariants (BiMap)
//! - Each stored value keeps its precomputed `u64` hash and indexing
//!   always uses the stored hash; `V: Hash` is never invoked after
//!   insertion, `V: Eq` only while probing.
//!
//! Notes and non-goals
//! - Not an allocator: exactly one fixed-size slot per logical entry.
//! - Iteration order is unspecified.
//! - Concurrent use requires external synchronization.

mod bi_map;
mod reentrancy;
mod tag;
mod tag_map;
mod tag_map_proptest;
mod tag_set;

// Public surface
pub use bi_map::BiMap;
pub use tag::Tag;
pub use tag_map::TagMap;
pub use tag_set::TagSet;
