//! Shared state and response types of the browser UI.

use std::sync::Arc;

use serde::Serialize;

use crate::controller::Controller;
use crate::render::{Page, ViewState};

/// State shared by all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller>,
}

impl AppState {
    pub fn new(controller: Arc<Controller>) -> Self {
        Self { controller }
    }
}

/// Body of `GET /state`.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub state: ViewState,
    pub page: Page,
}
