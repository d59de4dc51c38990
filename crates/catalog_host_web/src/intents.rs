//! Intent sink that surfaces storefront intents on the browser console.

use catalog_host::{IntentSink, StorefrontIntent};

#[derive(Debug, Clone, Copy, Default)]
/// Writes each intent to `console.info`; nothing downstream consumes them yet.
pub struct ConsoleIntentSink;

/// Console line for one intent.
pub fn render_intent(intent: &StorefrontIntent) -> String {
    let detail = match intent {
        StorefrontIntent::PurchaseRequested { work_id }
        | StorefrontIntent::SampleRequested { work_id } => format!(" work_id={work_id}"),
        StorefrontIntent::RemovePaymentMethodRequested { method_id } => {
            format!(" method_id={method_id}")
        }
        StorefrontIntent::ProfileSaveRequested(_)
        | StorefrontIntent::ChangePasswordRequested
        | StorefrontIntent::LogoutRequested
        | StorefrontIntent::AddPaymentMethodRequested => String::new(),
    };
    format!("[bibliotheca:intent] {}{detail}", intent.token())
}

impl IntentSink for ConsoleIntentSink {
    fn report(&self, intent: StorefrontIntent) {
        let line = render_intent(&intent);

        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::info_1(&wasm_bindgen::JsValue::from_str(&line));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = line;
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog_host::WorkId;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn intent_lines_carry_token_and_subject() {
        assert_eq!(
            render_intent(&StorefrontIntent::SampleRequested {
                work_id: WorkId::from("a-tale-of-two-cities"),
            }),
            "[bibliotheca:intent] sample-requested work_id=a-tale-of-two-cities"
        );
        assert_eq!(
            render_intent(&StorefrontIntent::LogoutRequested),
            "[bibliotheca:intent] logout-requested"
        );
    }
}
