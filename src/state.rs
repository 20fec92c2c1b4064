use std::sync::Arc;

use crate::services::webhook::Webhook;

#[derive(Clone)]
pub struct AppState {
    pub webhook: Arc<Webhook>,
}
