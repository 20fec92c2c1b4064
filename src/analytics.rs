//! Analytics events pushed to the page's tag-manager queue.

use serde::Serialize;

pub const FORM_LEAD_SUCCESS: &str = "form_lead_success";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub event: &'static str,
}

impl AnalyticsEvent {
    pub fn lead_success() -> Self {
        Self {
            event: FORM_LEAD_SUCCESS,
        }
    }
}

/// Append-only destination for analytics events
pub trait AnalyticsSink {
    fn push(&self, event: AnalyticsEvent);
}

/// `window.dataLayer`, created on first push if the tag loader has not run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataLayer;

impl AnalyticsSink for DataLayer {
    #[cfg(feature = "hydrate")]
    fn push(&self, event: AnalyticsEvent) {
        if let Err(err) = browser::push(event) {
            leptos::logging::warn!("analytics push failed: {err:?}");
        }
    }

    #[cfg(not(feature = "hydrate"))]
    fn push(&self, event: AnalyticsEvent) {
        tracing::debug!(event = event.event, "analytics event outside the browser dropped");
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::web_sys::{
        self,
        js_sys::{Array, Function, Object, Reflect},
    };
    use wasm_bindgen::{JsCast, JsValue};

    use super::AnalyticsEvent;

    const QUEUE: &str = "dataLayer";

    pub(super) fn push(event: AnalyticsEvent) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let key = JsValue::from_str(QUEUE);

        let mut queue = Reflect::get(&window, &key)?;
        if queue.is_undefined() || queue.is_null() {
            queue = Array::new().into();
            Reflect::set(&window, &key, &queue)?;
        }

        let record = Object::new();
        Reflect::set(&record, &JsValue::from_str("event"), &JsValue::from_str(event.event))?;

        // Tag managers replace `push` on the queue; call whatever is installed.
        let push = Reflect::get(&queue, &JsValue::from_str("push"))?.dyn_into::<Function>()?;
        push.call1(&queue, &record)?;
        Ok(())
    }
}
