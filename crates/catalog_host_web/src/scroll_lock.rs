//! `document.body` overflow lock.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use catalog_host::ScrollLockService;

#[derive(Debug, Clone, Default)]
/// Suspends page scrolling by setting `overflow: hidden` on the body element.
///
/// Nested acquisitions share one lock; the body's previous inline overflow value is restored when
/// the last holder releases.
pub struct BodyScrollLock {
    depth: Rc<Cell<u32>>,
    saved_overflow: Rc<RefCell<Option<String>>>,
}

impl BodyScrollLock {
    /// Current number of active holders.
    pub fn depth(&self) -> u32 {
        self.depth.get()
    }

    #[cfg(target_arch = "wasm32")]
    fn body_style() -> Option<web_sys::CssStyleDeclaration> {
        let body = web_sys::window()?.document()?.body()?;
        Some(body.style())
    }

    fn lock_body(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(style) = Self::body_style() {
                let previous = style.get_property_value("overflow").unwrap_or_default();
                *self.saved_overflow.borrow_mut() = Some(previous);
                let _ = style.set_property("overflow", "hidden");
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            *self.saved_overflow.borrow_mut() = Some(String::new());
        }
    }

    fn unlock_body(&self) {
        let previous = self.saved_overflow.borrow_mut().take();

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(style) = Self::body_style() {
                match previous.as_deref() {
                    Some(value) if !value.is_empty() => {
                        let _ = style.set_property("overflow", value);
                    }
                    _ => {
                        let _ = style.remove_property("overflow");
                    }
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = previous;
        }
    }
}

impl ScrollLockService for BodyScrollLock {
    fn acquire(&self) {
        let depth = self.depth.get();
        if depth == 0 {
            self.lock_body();
        }
        self.depth.set(depth + 1);
    }

    fn release(&self) {
        match self.depth.get() {
            0 => {}
            1 => {
                self.depth.set(0);
                self.unlock_body();
            }
            depth => self.depth.set(depth - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog_host::ScrollLockGuard;

    use super::*;

    #[test]
    fn depth_tracks_nested_guards_and_ignores_extra_release() {
        let lock = BodyScrollLock::default();
        let outer = ScrollLockGuard::acquire(Rc::new(lock.clone()));
        let inner = ScrollLockGuard::acquire(Rc::new(lock.clone()));
        assert_eq!(lock.depth(), 2);

        drop(inner);
        assert_eq!(lock.depth(), 1);
        drop(outer);
        assert_eq!(lock.depth(), 0);
        assert!(lock.saved_overflow.borrow().is_none());

        lock.release();
        assert_eq!(lock.depth(), 0);
    }
}
