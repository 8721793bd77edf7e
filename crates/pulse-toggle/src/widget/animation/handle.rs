//! Animation run identities.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Identifies one run of an animation.
///
/// Every start of an animator produces a fresh handle, so a listener or test
/// can tell a superseded run apart from the one that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    pub(crate) fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw handle value.
    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// The run reached its end values.
    Completed,
    /// The run was stopped early, either explicitly or by a newer run.
    Canceled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let a = AnimationHandle::next();
        let b = AnimationHandle::next();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
