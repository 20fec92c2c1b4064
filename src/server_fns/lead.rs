use leptos::prelude::*;

use crate::models::ContactSubmission;

/// Forward a lead to the automation webhook.
///
/// Every failure reaches the browser as the same message; the cause is only
/// logged here.
#[server]
pub async fn submit_lead(submission: ContactSubmission) -> Result<(), ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;

    use crate::state::AppState;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    forward_lead(&state.webhook, submission).await
}

/// Re-validate, stamp and deliver a lead.
#[cfg(feature = "ssr")]
pub async fn forward_lead(
    webhook: &crate::services::webhook::Webhook,
    submission: ContactSubmission,
) -> Result<(), ServerFnError> {
    use chrono::Utc;

    use crate::{
        models::OutboundPayload, services::webhook::DeliveryError, validation,
        workflow::SEND_FAILED_MESSAGE,
    };

    if let Err(errors) = validation::validate(&submission) {
        tracing::warn!(%errors, "rejected lead that failed validation");
        return Err(ServerFnError::new(SEND_FAILED_MESSAGE));
    }

    let payload = OutboundPayload::new(&submission, Utc::now());
    match webhook.deliver(&payload).await {
        Ok(body) => {
            tracing::info!(project_type = %payload.project_type, "lead delivered");
            tracing::debug!(?body, "webhook response");
            Ok(())
        }
        Err(DeliveryError::NotConfigured) => {
            tracing::error!("LEAD_WEBHOOK_URL is not set; lead dropped");
            Err(ServerFnError::new(SEND_FAILED_MESSAGE))
        }
        Err(err) => {
            tracing::warn!(error = %err, "lead delivery failed");
            Err(ServerFnError::new(SEND_FAILED_MESSAGE))
        }
    }
}
