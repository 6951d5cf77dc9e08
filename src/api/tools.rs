use axum::{
    extract::{Query, State},
    response::Json,
    Json as JsonExtractor,
};
use serde::{Deserialize, Serialize};
use swatch_core::{blend, hex, Color};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::ColorEntry;
use crate::services::{presenter, SharedLibrary};

/// Query parameters for /api/match
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MatchQuery {
    /// Hex color to match, e.g. "#3A7" or "3A77CC"
    pub color: String,
}

/// Closest library color to a requested color
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchResponse {
    /// Requested color in `#RRGGBB` form
    pub color: String,
    /// Complement of the requested color
    pub complement: String,
    /// Index of the closest color in the current ordering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Closest library color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<ColorEntry>,
    /// Similarity between the requested and the closest color (0..=1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

/// Request body for /api/blend
#[derive(Debug, Deserialize, ToSchema)]
pub struct BlendRequest {
    /// Hex colors to blend
    pub colors: Vec<String>,
    /// Weights, one per color, summing to 1.0. Equal shares when omitted.
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
    /// Blend factor for exactly two colors; 0.0 is the first color
    #[serde(default)]
    pub t: Option<f64>,
}

/// Blended color
#[derive(Debug, Serialize, ToSchema)]
pub struct BlendResponse {
    pub color: String,
}

/// Query parameters for /api/validate
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ValidateQuery {
    /// Text as typed so far
    #[serde(default)]
    pub value: String,
}

/// Hex validation report for text input
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidateResponse {
    /// Whether the value is a complete hex color
    pub complete: bool,
    /// Whether the value can still become one
    pub partial: bool,
    /// `#RRGGBB` form when complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
}

fn parse_color(value: &str) -> Result<Color, ApiError> {
    hex::parse(value).map_err(|e| ApiError::invalid_color(value, e))
}

/// Find the library color closest to a color
#[utoipa::path(
    get,
    path = "/api/match",
    params(MatchQuery),
    responses(
        (status = 200, description = "Closest library color", body = MatchResponse),
        (status = 400, description = "Invalid color"),
    ),
    tag = "Tools"
)]
pub async fn handle_match(
    State(library): State<SharedLibrary>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<MatchResponse>, ApiError> {
    let color = parse_color(&query.color)?;

    let mut library = library.write().await;
    let index = presenter::closest_match(&mut library, color);
    let entry = index.and_then(|idx| presenter::entry_at(&mut library, idx, Some(idx)));
    let similarity = entry
        .as_ref()
        .map(|e| color.similarity(Color::from_bytes(e.rgb)));

    tracing::debug!(color = %color, index = ?index, "Matched color");

    Ok(Json(MatchResponse {
        color: color.to_hex(),
        complement: color.complement().to_hex(),
        index,
        entry,
        similarity,
    }))
}

/// Blend colors
///
/// With `t`, exactly two colors are mixed linearly. Otherwise all colors are
/// averaged with `weights`, or equal shares when no weights are given.
#[utoipa::path(
    post,
    path = "/api/blend",
    request_body = BlendRequest,
    responses(
        (status = 200, description = "Blended color", body = BlendResponse),
        (status = 400, description = "Invalid color or distribution"),
    ),
    tag = "Tools"
)]
pub async fn handle_blend(
    JsonExtractor(request): JsonExtractor<BlendRequest>,
) -> Result<Json<BlendResponse>, ApiError> {
    let colors = request
        .colors
        .iter()
        .map(|s| parse_color(s))
        .collect::<Result<Vec<_>, _>>()?;

    let blended = match request.t {
        Some(t) => match colors.as_slice() {
            [a, b] => blend::blend(*a, *b, t),
            _ => {
                return Err(ApiError::BadRequest(format!(
                    "t blends exactly two colors, got {}",
                    colors.len()
                )))
            }
        },
        None => blend::blend_many(&colors, request.weights.as_deref().unwrap_or(&[]))?,
    };

    Ok(Json(BlendResponse {
        color: blended.to_hex(),
    }))
}

/// Validate hex input
#[utoipa::path(
    get,
    path = "/api/validate",
    params(ValidateQuery),
    responses(
        (status = 200, description = "Validation report", body = ValidateResponse),
    ),
    tag = "Tools"
)]
pub async fn handle_validate(Query(query): Query<ValidateQuery>) -> Json<ValidateResponse> {
    Json(ValidateResponse {
        complete: hex::is_complete_hex(&query.value),
        partial: hex::is_partial_hex(&query.value),
        normalized: hex::normalize(&query.value).ok(),
    })
}
