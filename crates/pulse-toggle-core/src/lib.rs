//! Core systems for pulse-toggle.
//!
//! This crate provides the foundational pieces shared by the pulse-toggle crates:
//!
//! - **Errors**: The configuration error taxonomy
//! - **Logging**: `tracing` targets, macros and performance spans
//! - **Slots**: Single-subscriber callbacks and the re-entrancy guard used for
//!   change notifications
//!
//! # Slot Example
//!
//! ```
//! use pulse_toggle_core::{ReentrancyGuard, Slot};
//!
//! let mut slot: Slot<dyn FnMut(bool)> = Slot::new();
//! slot.connect(Box::new(|checked: bool| println!("checked: {checked}")));
//!
//! let guard = ReentrancyGuard::new();
//! if let Some(_scope) = guard.enter() {
//!     if let Some(mut lent) = slot.lend() {
//!         (lent.callback())(true);
//!         slot.restore(lent);
//!     }
//! }
//! assert!(!guard.is_active());
//! ```

mod error;
pub mod logging;
pub mod slot;

pub use error::{ConfigError, ConfigResult};
pub use logging::PerfSpan;
pub use slot::{DispatchScope, Lent, ReentrancyGuard, Slot, SlotId};
