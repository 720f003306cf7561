//! Citation generation handler.

use axum::{body::Bytes, extract::State, Json};
use cytewise::{BibliographicRecord, CitationStyle, PLACEHOLDER};
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for generating a citation.
#[derive(Deserialize)]
pub struct CitationRequest {
    /// Exact style name, e.g. "APA" or "Chicago/Turabian". Missing is "".
    #[serde(default)]
    pub style: String,
    /// Record fields; missing keys are absent.
    #[serde(default)]
    pub data: BibliographicRecord,
}

/// Response with the formatted citation.
#[derive(Serialize)]
pub struct CitationResponse {
    pub citation: String,
    /// The style exactly as it was requested.
    pub style: String,
}

/// POST /api/generate-citation
///
/// The body is read as JSON whatever its content type. Style names must
/// match a display name exactly; anything else gets the placeholder, the
/// same as recognized styles without rules.
pub async fn generate_citation(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CitationResponse>, ApiError> {
    let req: CitationRequest = serde_json::from_slice(&body)?;

    let citation = match CitationStyle::from_name(&req.style) {
        Some(style) => {
            tracing::debug!(
                %style,
                fields = req.data.present_fields().len(),
                "generating citation"
            );
            state.formatter.generate(&req.data, style)
        }
        None => {
            tracing::warn!(style = %req.style, "unrecognized style, returning placeholder");
            PLACEHOLDER.to_string()
        }
    };

    Ok(Json(CitationResponse {
        citation,
        style: req.style,
    }))
}
