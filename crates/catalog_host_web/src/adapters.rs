use std::rc::Rc;

use catalog_host::{CatalogError, HostStrategy, StaticCatalog, StorefrontServices};

use crate::{BodyScrollLock, ConsoleIntentSink};

/// Returns the host strategy this crate wires.
pub const fn selected_host_strategy() -> HostStrategy {
    HostStrategy::Browser
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().token()
}

/// Builds the browser service bundle over the built-in catalog.
///
/// # Errors
///
/// Propagates [`CatalogError`] when the built-in catalog tables do not decode.
pub fn build_storefront_services() -> Result<StorefrontServices, CatalogError> {
    Ok(StorefrontServices::new(
        Rc::new(StaticCatalog::builtin()?),
        Rc::new(ConsoleIntentSink),
        Rc::new(BodyScrollLock::default()),
        selected_host_strategy(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_bundle_reports_browser_strategy() {
        let services = build_storefront_services().expect("services");
        assert_eq!(services.host_strategy, HostStrategy::Browser);
        assert_eq!(host_strategy_name(), "browser");
    }
}
