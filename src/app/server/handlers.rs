//! Route handlers for the browser UI.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;

use super::types::{AppState, StateResponse};
use crate::config::MARKER_ICON_SVG;
use crate::render::{render_document, HtmlOptions};

/// Query string of `/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// The page: search form, details panel and map.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let page = state.controller.page().await;
    Html(render_document(
        &page,
        HtmlOptions {
            search_text: &page.search_text,
            interactive: true,
        },
    ))
}

/// Submits the search box text, then sends the browser back to the page.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Redirect {
    state.controller.submit(&params.q).await;
    Redirect::to("/")
}

/// Current view state and page model as JSON.
pub async fn state_handler(State(state): State<AppState>) -> Json<StateResponse> {
    let page = state.controller.page().await;
    Json(StateResponse {
        state: page.view_state(),
        page,
    })
}

/// Map marker icon.
pub async fn icon_handler() -> Response {
    ([(header::CONTENT_TYPE, "image/svg+xml")], MARKER_ICON_SVG).into_response()
}
