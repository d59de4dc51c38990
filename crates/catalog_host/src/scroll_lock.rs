//! Page-level background scroll suspension.
//!
//! Full-screen surfaces acquire a [`ScrollLockGuard`] when they mount. The guard releases the
//! lock exactly once, either explicitly or when dropped, so teardown for any reason (normal
//! navigation, owner disposal, or unwinding) restores background scrolling.

use std::{cell::Cell, rc::Rc};

/// Host service that suspends and restores scrolling of the page behind an overlay.
pub trait ScrollLockService {
    /// Suspends background scrolling. Calls nest; each must be paired with [`Self::release`].
    fn acquire(&self);

    /// Undoes one [`Self::acquire`].
    fn release(&self);
}

#[derive(Debug, Clone, Copy, Default)]
/// Scroll lock for targets without a page to lock.
pub struct NoopScrollLock;

impl ScrollLockService for NoopScrollLock {
    fn acquire(&self) {}

    fn release(&self) {}
}

#[derive(Debug, Clone, Default)]
/// Counting scroll lock used by tests and headless previews.
pub struct MemoryScrollLock {
    depth: Rc<Cell<u32>>,
    acquisitions: Rc<Cell<u32>>,
    releases: Rc<Cell<u32>>,
}

impl MemoryScrollLock {
    /// Whether at least one holder is active.
    pub fn is_locked(&self) -> bool {
        self.depth.get() > 0
    }

    /// Total acquisitions so far.
    pub fn acquisitions(&self) -> u32 {
        self.acquisitions.get()
    }

    /// Total releases so far.
    pub fn releases(&self) -> u32 {
        self.releases.get()
    }
}

impl ScrollLockService for MemoryScrollLock {
    fn acquire(&self) {
        self.depth.set(self.depth.get() + 1);
        self.acquisitions.set(self.acquisitions.get() + 1);
    }

    fn release(&self) {
        self.depth.set(self.depth.get().saturating_sub(1));
        self.releases.set(self.releases.get() + 1);
    }
}

#[must_use = "dropping the guard releases the scroll lock immediately"]
/// Scoped hold on a [`ScrollLockService`].
pub struct ScrollLockGuard {
    service: Option<Rc<dyn ScrollLockService>>,
}

impl ScrollLockGuard {
    /// Acquires the lock and returns the guard that will release it.
    pub fn acquire(service: Rc<dyn ScrollLockService>) -> Self {
        service.acquire();
        Self {
            service: Some(service),
        }
    }

    /// Whether the guard still holds the lock.
    pub fn is_held(&self) -> bool {
        self.service.is_some()
    }

    /// Releases the lock now. Later calls and the eventual drop are no-ops.
    pub fn release(&mut self) {
        if let Some(service) = self.service.take() {
            service.release();
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("held", &self.is_held())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_releases_exactly_once_on_drop() {
        let lock = MemoryScrollLock::default();
        {
            let _guard = ScrollLockGuard::acquire(Rc::new(lock.clone()));
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
        assert_eq!(lock.acquisitions(), 1);
        assert_eq!(lock.releases(), 1);
    }

    #[test]
    fn explicit_release_is_not_repeated_by_drop() {
        let lock = MemoryScrollLock::default();
        let mut guard = ScrollLockGuard::acquire(Rc::new(lock.clone()));
        guard.release();
        guard.release();
        assert!(!guard.is_held());
        drop(guard);

        assert_eq!(lock.releases(), 1);
    }

    #[test]
    fn guard_releases_during_unwind() {
        let lock = MemoryScrollLock::default();
        let observer = lock.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = ScrollLockGuard::acquire(Rc::new(lock));
            panic!("teardown failure");
        }));

        assert!(result.is_err());
        assert!(!observer.is_locked());
        assert_eq!(observer.releases(), 1);
    }

    #[test]
    fn nested_holders_keep_lock_until_last_release() {
        let lock = MemoryScrollLock::default();
        let first = ScrollLockGuard::acquire(Rc::new(lock.clone()));
        let second = ScrollLockGuard::acquire(Rc::new(lock.clone()));
        drop(first);
        assert!(lock.is_locked());
        drop(second);
        assert!(!lock.is_locked());
    }
}
