//! Capability traits.

/// Something with a two-state checked value.
///
/// Implemented by controls independently of any view hierarchy, so code that
/// only flips state does not need to know what kind of control it holds.
pub trait Checkable {
    /// Current checked state.
    fn is_checked(&self) -> bool;

    /// Set the checked state without animation.
    fn set_checked(&mut self, checked: bool);

    /// Flip the checked state.
    fn toggle(&mut self);
}
