use std::sync::Arc;

use crate::store::PlayerStore;

pub mod league;
pub mod players;

/// Raw query pairs in request order. Repeated keys are kept, nothing is rejected.
pub type QueryPairs = Vec<(String, String)>;

/// State shared by every handler: one store for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PlayerStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PlayerStore>) -> Self {
        Self { store }
    }
}

// First value for `key`, empty when absent
pub fn first_param(params: &[(String, String)], key: &str) -> String {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

// Any method/path pair nobody handles: left at 200 with an empty body on purpose
pub async fn ignore_request() {}
