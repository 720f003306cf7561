//! Style listing handler.

use axum::{extract::State, Json};
use cytewise::CitationStyle;
use serde::Serialize;

use crate::server::state::AppState;

/// One selectable citation style.
#[derive(Serialize)]
pub struct StyleInfo {
    pub name: &'static str,
    /// False for styles that currently return the placeholder.
    pub implemented: bool,
}

/// GET /api/styles
pub async fn list_styles(State(state): State<AppState>) -> Json<Vec<StyleInfo>> {
    let styles = CitationStyle::ALL
        .into_iter()
        .map(|style| StyleInfo {
            name: style.name(),
            implemented: state.formatter.supports(style),
        })
        .collect();
    Json(styles)
}
