//! Debug-only reentrancy detection.
//!
//! `BiMap` runs user `Eq`/`Hash` code while probing its value index, and
//! during a mutation its two internal structures can transiently
//! disagree. Nested entry from that user code would observe (or corrupt)
//! the half-updated state, so in debug builds each public entry point
//! takes a pass from this check and panics if one is already out. Release
//! builds compile the whole thing to nothing.

use core::cell::Cell;
use core::marker::PhantomData;

/// Per-container reentrancy flag. Guard entry points with
/// `let _pass = self.reentrancy.enter();`.
#[derive(Debug, Default)]
pub struct ReentryCheck {
    #[cfg(debug_assertions)]
    inside: Cell<bool>,
    // Containers embedding this stay !Send + !Sync, matching the crate's
    // single-owner model.
    _nosend: PhantomData<*mut ()>,
}

impl ReentryCheck {
    pub const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            inside: Cell::new(false),
            _nosend: PhantomData,
        }
    }

    /// Claim the single pass. Panics in debug builds when the container is
    /// already being entered.
    ///
    /// The returned pass carries a raw pointer to this check rather than a
    /// borrow, so a caller can hold it across `&mut self` mutations of the
    /// surrounding container (the pass is always a stack local that drops
    /// before the container could move).
    #[inline]
    pub fn enter(&self) -> ReentryPass {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.inside.replace(true),
                "reentrant call into container during mutation"
            );
            return ReentryPass { check: self };
        }

        #[cfg(not(debug_assertions))]
        {
            return ReentryPass { _priv: () };
        }
    }
}

/// RAII pass returned by [`ReentryCheck::enter`]; returning it re-opens
/// the container.
pub struct ReentryPass {
    #[cfg(debug_assertions)]
    check: *const ReentryCheck,
    #[cfg(not(debug_assertions))]
    _priv: (),
}

impl Drop for ReentryPass {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        // SAFETY: `check` points at the `ReentryCheck` that minted this
        // pass. The pass is only ever a stack local living no longer than
        // the guarded method, so the check outlives it.
        unsafe {
            (*self.check).inside.set(false);
        }
    }
}
