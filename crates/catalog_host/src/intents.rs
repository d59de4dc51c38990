//! User intents reported upward to collaborators the storefront does not implement.

use std::{cell::RefCell, rc::Rc};

use crate::model::{ProfileDetails, WorkId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// An action the user asked for whose effect lives outside the storefront.
pub enum StorefrontIntent {
    /// Buy a work.
    PurchaseRequested {
        /// Work to buy.
        work_id: WorkId,
    },
    /// Play an audio sample of a work.
    SampleRequested {
        /// Work to sample.
        work_id: WorkId,
    },
    /// Persist validated profile fields.
    ProfileSaveRequested(ProfileDetails),
    /// Start the password change flow.
    ChangePasswordRequested,
    /// End the current session.
    LogoutRequested,
    /// Add a new payment card.
    AddPaymentMethodRequested,
    /// Remove a saved payment method.
    RemovePaymentMethodRequested {
        /// Saved method id.
        method_id: String,
    },
}

impl StorefrontIntent {
    /// Stable token used in diagnostics.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::PurchaseRequested { .. } => "purchase-requested",
            Self::SampleRequested { .. } => "sample-requested",
            Self::ProfileSaveRequested(_) => "profile-save-requested",
            Self::ChangePasswordRequested => "change-password-requested",
            Self::LogoutRequested => "logout-requested",
            Self::AddPaymentMethodRequested => "add-payment-method-requested",
            Self::RemovePaymentMethodRequested { .. } => "remove-payment-method-requested",
        }
    }
}

/// Receiver for [`StorefrontIntent`] values.
pub trait IntentSink {
    /// Accepts one intent. Sinks must not fail; there is nothing the UI could do about it.
    fn report(&self, intent: StorefrontIntent);
}

#[derive(Debug, Clone, Copy, Default)]
/// Sink that drops every intent.
pub struct NoopIntentSink;

impl IntentSink for NoopIntentSink {
    fn report(&self, _intent: StorefrontIntent) {}
}

#[derive(Debug, Clone, Default)]
/// Sink that records intents in order, for tests and previews.
pub struct MemoryIntentSink {
    inner: Rc<RefCell<Vec<StorefrontIntent>>>,
}

impl MemoryIntentSink {
    /// Intents reported so far, oldest first.
    pub fn reported(&self) -> Vec<StorefrontIntent> {
        self.inner.borrow().clone()
    }
}

impl IntentSink for MemoryIntentSink {
    fn report(&self, intent: StorefrontIntent) {
        self.inner.borrow_mut().push(intent);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_sink_records_in_order_across_clones() {
        let sink = MemoryIntentSink::default();
        let handle = sink.clone();

        sink.report(StorefrontIntent::LogoutRequested);
        handle.report(StorefrontIntent::PurchaseRequested {
            work_id: WorkId::from("2"),
        });

        assert_eq!(
            sink.reported(),
            vec![
                StorefrontIntent::LogoutRequested,
                StorefrontIntent::PurchaseRequested {
                    work_id: WorkId::from("2")
                },
            ]
        );
    }
}
