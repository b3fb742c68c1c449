use std::sync::Arc;

use crate::services::SearchController;

/// Shared application state
///
/// One controller backs one search screen; every rendering client of this
/// bridge drives the same screen.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<SearchController>,
}

impl AppState {
    pub fn new(controller: SearchController) -> Self {
        Self {
            controller: Arc::new(controller),
        }
    }
}
