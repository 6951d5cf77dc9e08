pub mod colors;
pub mod reload;
pub mod tools;

use utoipa::OpenApi;

pub use colors::{__path_handle_colors, __path_handle_gradient, __path_handle_groups};
pub use colors::{
    handle_colors, handle_gradient, handle_groups, ColorsQuery, ColorsResponse, GradientResponse,
    GroupsResponse,
};
pub use reload::{__path_handle_reload, handle_reload};
pub use tools::{__path_handle_blend, __path_handle_match, __path_handle_validate};
pub use tools::{
    handle_blend, handle_match, handle_validate, BlendRequest, BlendResponse, MatchResponse,
    ValidateResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swatchbook API",
        description = "Color library with hex parsing, blending and segment-aware sorting",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        handle_colors,
        handle_groups,
        handle_gradient,
        handle_match,
        handle_blend,
        handle_validate,
        handle_reload,
    ),
    components(schemas(
        ColorsResponse,
        GroupsResponse,
        GradientResponse,
        MatchResponse,
        BlendRequest,
        BlendResponse,
        ValidateResponse,
        crate::models::ColorEntry,
        crate::models::TextColor,
        crate::models::SortBy,
        crate::services::LoadReport,
        crate::services::FetchOutcome,
    )),
    tags(
        (name = "Library", description = "Library colors, groups and reloads"),
        (name = "Tools", description = "Matching, blending and validation")
    )
)]
pub struct ApiDoc;
