//! Hydration lifecycle shared by the cart and wishlist machines.
//!
//! ```text
//! Uninitialized --begin_loading--> Loading --finish_loading--> Ready
//! ```
//!
//! `Ready` is terminal for the life of the process.

/// Where a state machine is in its one-time load from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifecycle {
    /// Created, store not read yet.
    #[default]
    Uninitialized,
    /// Store read in progress.
    Loading,
    /// Persisted state recovered (or found absent); writes flow normally.
    Ready,
}

impl Lifecycle {
    /// Move to `Loading`. Returns `false` if loading already started.
    pub fn begin_loading(&mut self) -> bool {
        if *self == Self::Uninitialized {
            *self = Self::Loading;
            true
        } else {
            false
        }
    }

    /// Move to `Ready`. Returns `false` unless the machine was `Loading`.
    pub fn finish_loading(&mut self) -> bool {
        if *self == Self::Loading {
            *self = Self::Ready;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut lifecycle = Lifecycle::default();
        assert_eq!(lifecycle, Lifecycle::Uninitialized);
        assert!(lifecycle.begin_loading());
        assert_eq!(lifecycle, Lifecycle::Loading);
        assert!(!lifecycle.is_ready());
        assert!(lifecycle.finish_loading());
        assert!(lifecycle.is_ready());
    }

    #[test]
    fn test_ready_is_terminal() {
        let mut lifecycle = Lifecycle::Ready;
        assert!(!lifecycle.begin_loading());
        assert!(!lifecycle.finish_loading());
        assert_eq!(lifecycle, Lifecycle::Ready);
    }

    #[test]
    fn test_cannot_finish_without_loading() {
        let mut lifecycle = Lifecycle::Uninitialized;
        assert!(!lifecycle.finish_loading());
        assert_eq!(lifecycle, Lifecycle::Uninitialized);
    }
}
