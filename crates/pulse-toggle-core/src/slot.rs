//! Single-slot callbacks with re-entrancy protection.
//!
//! Unlike a multi-subscriber signal, a [`Slot`] holds at most one callback:
//! connecting a new callback replaces the previous one ("last registration
//! wins"). This matches listener-style APIs such as
//! `set_on_checked_change_listener`.
//!
//! # Invoking with mutable access to the owner
//!
//! Callbacks frequently need `&mut` access to the object that owns the slot
//! (a listener that calls back into `set_checked`, for example). The slot
//! supports this by lending the callback out for the duration of a call:
//!
//! ```
//! use pulse_toggle_core::Slot;
//!
//! struct Owner {
//!     value: i32,
//!     changed: Slot<dyn FnMut(&mut Owner, i32)>,
//! }
//!
//! impl Owner {
//!     fn set(&mut self, value: i32) {
//!         self.value = value;
//!         if let Some(mut lent) = self.changed.lend() {
//!             (lent.callback())(self, value);
//!             self.changed.restore(lent);
//!         }
//!     }
//! }
//!
//! let mut owner = Owner { value: 0, changed: Slot::new() };
//! owner
//!     .changed
//!     .connect(Box::new(|_: &mut Owner, v: i32| println!("changed to {v}")));
//! owner.set(3);
//! assert!(owner.changed.is_connected());
//! ```
//!
//! If the callback connects a replacement (or disconnects) while it is lent
//! out, [`Slot::restore`] keeps the newer registration and drops the lent one.
//!
//! # Re-entrancy
//!
//! [`ReentrancyGuard`] is a scoped flag for one dispatch. Code that notifies
//! listeners enters the guard first; nested notifications triggered from
//! inside the callback observe the guard and skip their own dispatch. The flag
//! is cleared when the returned [`DispatchScope`] drops, including while a
//! panicking callback unwinds.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::logging::targets;

/// Identifies one registration in a [`Slot`].
///
/// Each call to [`Slot::connect`] or [`Slot::disconnect`] advances the
/// registration id, so a stale id never matches a newer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u64);

/// A single-subscriber callback slot.
///
/// `F` is usually a trait object such as `dyn FnMut(&mut Owner, bool)`.
pub struct Slot<F: ?Sized> {
    callback: Option<Box<F>>,
    registration: u64,
}

/// A callback temporarily taken out of its [`Slot`].
///
/// Obtained from [`Slot::lend`] and handed back with [`Slot::restore`].
pub struct Lent<F: ?Sized> {
    callback: Box<F>,
    registration: u64,
}

impl<F: ?Sized> Lent<F> {
    /// Access the lent callback for invocation.
    pub fn callback(&mut self) -> &mut F {
        &mut self.callback
    }
}

impl<F: ?Sized> Slot<F> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            callback: None,
            registration: 0,
        }
    }

    /// Connect a callback, replacing any existing one.
    pub fn connect(&mut self, callback: Box<F>) -> SlotId {
        self.registration += 1;
        self.callback = Some(callback);
        tracing::trace!(
            target: targets::SLOT,
            registration = self.registration,
            "slot connected"
        );
        SlotId(self.registration)
    }

    /// Remove the current callback.
    ///
    /// Returns `true` if a callback was connected. A callback that is lent
    /// out at the time is dropped when it is restored.
    pub fn disconnect(&mut self) -> bool {
        self.registration += 1;
        let had_callback = self.callback.take().is_some();
        tracing::trace!(
            target: targets::SLOT,
            registration = self.registration,
            had_callback,
            "slot disconnected"
        );
        had_callback
    }

    /// Check whether a callback is connected and not currently lent out.
    pub fn is_connected(&self) -> bool {
        self.callback.is_some()
    }

    /// Take the callback out for invocation.
    ///
    /// Returns `None` when nothing is connected or the callback is already
    /// lent out.
    pub fn lend(&mut self) -> Option<Lent<F>> {
        self.callback.take().map(|callback| Lent {
            callback,
            registration: self.registration,
        })
    }

    /// Return a lent callback.
    ///
    /// The callback is put back only if no newer registration happened while
    /// it was out. Returns `true` if it was restored.
    pub fn restore(&mut self, lent: Lent<F>) -> bool {
        if lent.registration == self.registration && self.callback.is_none() {
            self.callback = Some(lent.callback);
            true
        } else {
            tracing::trace!(
                target: targets::SLOT,
                lent = lent.registration,
                current = self.registration,
                "dropping superseded callback"
            );
            false
        }
    }
}

impl<F: ?Sized> Default for Slot<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ?Sized> fmt::Debug for Slot<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("connected", &self.callback.is_some())
            .field("registration", &self.registration)
            .finish()
    }
}

/// Scoped flag guarding one notification dispatch.
///
/// [`enter`](Self::enter) succeeds only when no dispatch is in progress and
/// hands out a [`DispatchScope`]. The flag stays set until that scope drops, so
/// it never outlives the call chain that set it, even when a callback panics.
///
/// The scope does not borrow the guard, which leaves the owner free to pass
/// `&mut self` into the callback it protects.
#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    active: Rc<Cell<bool>>,
}

impl ReentrancyGuard {
    /// Create an inactive guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to start a dispatch.
    ///
    /// Returns `None` if a dispatch is already in progress.
    pub fn enter(&self) -> Option<DispatchScope> {
        if self.active.replace(true) {
            return None;
        }
        Some(DispatchScope {
            active: Rc::clone(&self.active),
        })
    }

    /// Check whether a dispatch is in progress.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

/// An entered [`ReentrancyGuard`]. Dropping it ends the dispatch.
#[derive(Debug)]
#[must_use = "the dispatch ends as soon as the scope is dropped"]
pub struct DispatchScope {
    active: Rc<Cell<bool>>,
}

impl Drop for DispatchScope {
    fn drop(&mut self) {
        self.active.set(false);
    }
}
