//! Host service bundle injected into the storefront runtime.

use std::rc::Rc;

use crate::{
    catalog::{CatalogError, CatalogProvider, StaticCatalog},
    intents::{IntentSink, MemoryIntentSink, NoopIntentSink},
    scroll_lock::{MemoryScrollLock, NoopScrollLock, ScrollLockService},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Stable identifier for the selected host strategy.
pub enum HostStrategy {
    /// Browser target with real page scroll locking.
    Browser,
    /// Headless previews and tests.
    Memory,
}

impl HostStrategy {
    /// Stable token for diagnostics.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
        }
    }
}

/// Runtime-selected service bundle.
///
/// Adapter selection happens before the bundle reaches `storefront_runtime`, so components only
/// see trait objects.
#[derive(Clone)]
pub struct StorefrontServices {
    /// Source for every dataset the pages show.
    pub catalog: Rc<dyn CatalogProvider>,
    /// Receiver for purchase, sample, and account intents.
    pub intents: Rc<dyn IntentSink>,
    /// Background scroll suspension used by full-screen surfaces.
    pub scroll_lock: Rc<dyn ScrollLockService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl StorefrontServices {
    /// Builds a bundle from explicit adapters.
    pub fn new(
        catalog: Rc<dyn CatalogProvider>,
        intents: Rc<dyn IntentSink>,
        scroll_lock: Rc<dyn ScrollLockService>,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            catalog,
            intents,
            scroll_lock,
            host_strategy,
        }
    }

    /// Bundle over the built-in catalog with no-op intent and scroll adapters.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError`] from opening the built-in catalog.
    pub fn builtin_noop() -> Result<Self, CatalogError> {
        Ok(Self::new(
            Rc::new(StaticCatalog::builtin()?),
            Rc::new(NoopIntentSink),
            Rc::new(NoopScrollLock),
            HostStrategy::Memory,
        ))
    }

    /// Bundle over the built-in catalog with recording adapters the caller can inspect.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError`] from opening the built-in catalog.
    pub fn builtin_memory(
        intents: MemoryIntentSink,
        scroll_lock: MemoryScrollLock,
    ) -> Result<Self, CatalogError> {
        Ok(Self::new(
            Rc::new(StaticCatalog::builtin()?),
            Rc::new(intents),
            Rc::new(scroll_lock),
            HostStrategy::Memory,
        ))
    }
}

impl std::fmt::Debug for StorefrontServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::{intents::StorefrontIntent, scroll_lock::ScrollLockGuard};

    #[test]
    fn memory_bundle_routes_through_supplied_adapters() {
        let intents = MemoryIntentSink::default();
        let scroll = MemoryScrollLock::default();
        let services =
            StorefrontServices::builtin_memory(intents.clone(), scroll.clone()).expect("services");

        services.intents.report(StorefrontIntent::LogoutRequested);
        let guard = ScrollLockGuard::acquire(services.scroll_lock.clone());
        assert!(scroll.is_locked());
        drop(guard);

        assert_eq!(intents.reported(), vec![StorefrontIntent::LogoutRequested]);
        assert!(!scroll.is_locked());
        assert!(block_on(services.catalog.fetch_catalog()).is_ok());
        assert_eq!(services.host_strategy.token(), "memory");
    }
}
