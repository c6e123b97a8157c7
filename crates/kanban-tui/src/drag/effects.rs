//! Process-wide side effects of an active drag.
//!
//! Both flags are only ever raised through [`DragEffects::acquire`] and
//! lowered when the returned [`DragGuard`] is dropped, so every way out of a
//! drag (drop, cancel, release over nothing, dropping the coordinator)
//! restores them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct DragEffects {
    scroll_locked: Arc<AtomicBool>,
    drag_marker: Arc<AtomicBool>,
}

impl DragEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board scrolling is suspended while this is set.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked.load(Ordering::Acquire)
    }

    /// "Drag in progress" marker shown by the UI.
    pub fn drag_active(&self) -> bool {
        self.drag_marker.load(Ordering::Acquire)
    }

    pub(crate) fn acquire(&self) -> DragGuard {
        self.scroll_locked.store(true, Ordering::Release);
        self.drag_marker.store(true, Ordering::Release);
        tracing::trace!("Drag effects acquired");
        DragGuard {
            effects: self.clone(),
        }
    }
}

#[derive(Debug)]
pub struct DragGuard {
    effects: DragEffects,
}

impl Drop for DragGuard {
    fn drop(&mut self) {
        self.effects.scroll_locked.store(false, Ordering::Release);
        self.effects.drag_marker.store(false, Ordering::Release);
        tracing::trace!("Drag effects released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_scopes_both_flags() {
        let effects = DragEffects::new();
        assert!(!effects.scroll_locked());
        assert!(!effects.drag_active());

        let guard = effects.acquire();
        assert!(effects.scroll_locked());
        assert!(effects.drag_active());

        drop(guard);
        assert!(!effects.scroll_locked());
        assert!(!effects.drag_active());
    }

    #[test]
    fn test_clones_share_flags() {
        let effects = DragEffects::new();
        let observer = effects.clone();
        let _guard = effects.acquire();
        assert!(observer.drag_active());
    }
}
