//! Runtime provider and context wiring for the storefront pages.
//!
//! The provider owns the injected [`StorefrontServices`] bundle, the resolved configuration and
//! the diagnostics handle. Pages and components read them through [`use_storefront`].

use std::rc::Rc;

use catalog_host::{CatalogProvider, ScrollLockGuard, StorefrontIntent, StorefrontServices};
use leptos::*;

use crate::{config::StorefrontConfig, diagnostics::Diagnostics};

#[derive(Clone, Copy)]
/// Leptos context shared by every storefront page.
pub struct StorefrontContext {
    /// Host service bundle assembled by the entry layer.
    pub services: StoredValue<StorefrontServices>,
    /// Resolved runtime configuration.
    pub config: &'static StorefrontConfig,
    /// Leveled console diagnostics.
    pub diagnostics: Diagnostics,
}

impl StorefrontContext {
    /// Catalog provider handle for loading page data.
    pub fn catalog(&self) -> Rc<dyn CatalogProvider> {
        self.services.with_value(|services| services.catalog.clone())
    }

    /// Reports one intent to the host sink and logs it.
    pub fn report(&self, intent: StorefrontIntent) {
        self.diagnostics
            .debug("intent", "reported", &[("kind", intent.token())]);
        self.services
            .with_value(|services| services.intents.report(intent));
    }

    /// Suspends background page scrolling until the returned guard is dropped.
    pub fn lock_scroll(&self) -> ScrollLockGuard {
        let service = self
            .services
            .with_value(|services| services.scroll_lock.clone());
        ScrollLockGuard::acquire(service)
    }
}

#[component]
/// Provides [`StorefrontContext`] to descendant components.
pub fn StorefrontProvider(
    /// Injected browser or memory service bundle.
    services: StorefrontServices,
    /// Configuration override; defaults to [`StorefrontConfig::builtin`].
    #[prop(optional)]
    config: Option<&'static StorefrontConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_else(StorefrontConfig::builtin);
    let diagnostics = Diagnostics::from_config(config);
    diagnostics.debug(
        "runtime",
        "provider mounted",
        &[
            ("host", services.host_strategy.token()),
            ("level", config.diagnostics.level.token()),
        ],
    );

    let runtime = StorefrontContext {
        services: store_value(services),
        config,
        diagnostics,
    };
    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`StorefrontContext`].
///
/// # Panics
///
/// Panics if called outside [`StorefrontProvider`].
pub fn use_storefront() -> StorefrontContext {
    expect_context::<StorefrontContext>()
}

#[cfg(test)]
mod tests {
    use catalog_host::{MemoryIntentSink, MemoryScrollLock, WorkId};
    use pretty_assertions::assert_eq;

    use super::*;

    fn memory_context(
        intents: MemoryIntentSink,
        scroll_lock: MemoryScrollLock,
    ) -> StorefrontContext {
        let services =
            StorefrontServices::builtin_memory(intents, scroll_lock).expect("memory services");
        StorefrontContext {
            services: store_value(services),
            config: StorefrontConfig::builtin(),
            diagnostics: Diagnostics::default(),
        }
    }

    #[test]
    fn intents_reach_the_host_sink() {
        let runtime = create_runtime();
        let intents = MemoryIntentSink::default();
        let context = memory_context(intents.clone(), MemoryScrollLock::default());

        context.report(StorefrontIntent::SampleRequested {
            work_id: WorkId::from("1"),
        });

        assert_eq!(
            intents.reported(),
            vec![StorefrontIntent::SampleRequested {
                work_id: WorkId::from("1")
            }]
        );
        runtime.dispose();
    }

    #[test]
    fn scroll_lock_is_released_once_when_the_owner_is_disposed() {
        let runtime = create_runtime();
        let lock = MemoryScrollLock::default();
        let context = memory_context(MemoryIntentSink::default(), lock.clone());

        let mount = as_child_of_current_owner(move |_: ()| {
            let guard = context.lock_scroll();
            on_cleanup(move || drop(guard));
        });
        let ((), disposer) = mount(());
        assert!(lock.is_locked());

        drop(disposer);
        assert!(!lock.is_locked());
        assert_eq!(lock.acquisitions(), 1);
        assert_eq!(lock.releases(), 1);
        runtime.dispose();
    }
}
