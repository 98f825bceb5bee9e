//! Shared application state for all routes.

use crate::store::WikiStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WikiStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn WikiStore>) -> Self {
        AppState { store }
    }
}
