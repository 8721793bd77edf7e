//! Pointer events delivered to a toggle.
//!
//! The host translates its own mouse or touch input into [`PointerEvent`]s.
//! Positions are resolved by the host: a toggle only needs to know whether the
//! pointer is still over it.

/// A pointer interaction with the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// The pointer went down on the control.
    Down,
    /// The pointer moved while down.
    Move {
        /// Whether the pointer is still over the control.
        inside: bool,
    },
    /// The pointer was released.
    Up,
    /// The interaction was taken away, for example by a scrolling parent.
    Cancel,
}
