use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::{ColorEntry, SortBy};
use crate::services::{presenter, SharedLibrary};

/// Query parameters for /api/colors
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ColorsQuery {
    /// Ordering to switch to: "segment", "hue" or "brightness"
    pub sort: Option<String>,
    /// Direction to switch to
    pub ascending: Option<bool>,
    /// Index of the entry to mark as selected
    pub selected: Option<usize>,
}

/// Library colors in their current ordering
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorsResponse {
    pub sort_by: SortBy,
    pub ascending: bool,
    pub colors: Vec<ColorEntry>,
}

/// Library colors grouped by nearest segment
#[derive(Debug, Serialize, ToSchema)]
pub struct GroupsResponse {
    /// Segments the groups belong to, in order
    pub segments: Vec<String>,
    /// One list of hex strings per segment
    pub groups: Vec<Vec<String>>,
}

/// Gradient stops behind the color list
#[derive(Debug, Serialize, ToSchema)]
pub struct GradientResponse {
    pub stops: Vec<String>,
}

/// List library colors
///
/// Optional `sort` and `ascending` parameters change the library ordering
/// before listing; the change sticks for later requests.
#[utoipa::path(
    get,
    path = "/api/colors",
    params(ColorsQuery),
    responses(
        (status = 200, description = "Colors in the current ordering", body = ColorsResponse),
        (status = 400, description = "Unknown sort"),
    ),
    tag = "Library"
)]
pub async fn handle_colors(
    State(library): State<SharedLibrary>,
    Query(query): Query<ColorsQuery>,
) -> Result<Json<ColorsResponse>, ApiError> {
    let sort_by = query
        .sort
        .as_deref()
        .map(str::parse::<SortBy>)
        .transpose()
        .map_err(ApiError::BadRequest)?;

    let mut library = library.write().await;
    if let Some(sort_by) = sort_by {
        library.set_sort_by(sort_by);
    }
    if let Some(ascending) = query.ascending {
        library.set_ascending(ascending);
    }

    let colors = presenter::entries(&mut library, query.selected);

    tracing::debug!(
        sort_by = %library.sort_by(),
        ascending = library.ascending(),
        count = colors.len(),
        "Listing colors"
    );

    Ok(Json(ColorsResponse {
        sort_by: library.sort_by(),
        ascending: library.ascending(),
        colors,
    }))
}

/// List library colors grouped by segment
///
/// With fewer than two segments everything lands in a single group.
#[utoipa::path(
    get,
    path = "/api/colors/groups",
    responses(
        (status = 200, description = "Colors grouped by segment", body = GroupsResponse),
    ),
    tag = "Library"
)]
pub async fn handle_groups(State(library): State<SharedLibrary>) -> Json<GroupsResponse> {
    let mut library = library.write().await;
    let groups = library.groups();
    Json(GroupsResponse {
        segments: library.raw_segments().to_vec(),
        groups,
    })
}

/// Gradient stops for the current ordering
#[utoipa::path(
    get,
    path = "/api/gradient",
    responses(
        (status = 200, description = "Gradient stops", body = GradientResponse),
    ),
    tag = "Library"
)]
pub async fn handle_gradient(State(library): State<SharedLibrary>) -> Json<GradientResponse> {
    let mut library = library.write().await;
    Json(GradientResponse {
        stops: presenter::gradient(&mut library),
    })
}
