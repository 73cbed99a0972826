//! Handlers for the terrain image resource.
//!
//! Each handler hands its extracted inputs to the matching controller action
//! and answers with an empty `200 OK`, the response for an action that
//! produces nothing.

#![allow(clippy::missing_errors_doc)]

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use terrain_app::ports::TerrainImageRepository;
use terrain_domain::request::{FormRequest, StoreTerrainImageRequest, UpdateTerrainImageRequest};

use crate::binding::BoundTerrainImage;
use crate::error::ApiError;
use crate::payload::RequestPayload;
use crate::state::AppState;

/// Response of every terrain image action.
pub enum ActionResponse {
    Empty,
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Empty => StatusCode::OK.into_response(),
        }
    }
}

/// Build the `/terrain-images` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: TerrainImageRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::<R>).post(store::<R>))
        .route("/create", get(create::<R>))
        .route(
            "/{terrain_image}",
            get(show::<R>)
                .put(update::<R>)
                .patch(update::<R>)
                .delete(destroy::<R>),
        )
        .route("/{terrain_image}/edit", get(edit::<R>))
}

/// `GET /terrain-images`
pub async fn index<R>(State(state): State<AppState<R>>) -> ActionResponse
where
    R: TerrainImageRepository + Send + Sync + 'static,
{
    state.terrain_images.index();
    ActionResponse::Empty
}

/// `GET /terrain-images/create`
pub async fn create<R>(State(state): State<AppState<R>>) -> ActionResponse
where
    R: TerrainImageRepository + Send + Sync + 'static,
{
    state.terrain_images.create();
    ActionResponse::Empty
}

/// `POST /terrain-images`
pub async fn store<R>(
    State(state): State<AppState<R>>,
    RequestPayload(payload): RequestPayload,
) -> Result<ActionResponse, ApiError>
where
    R: TerrainImageRepository + Send + Sync + 'static,
{
    let request = StoreTerrainImageRequest::validate(payload)?;
    state.terrain_images.store(request);
    Ok(ActionResponse::Empty)
}

/// `GET /terrain-images/{terrain_image}`
pub async fn show<R>(
    State(state): State<AppState<R>>,
    BoundTerrainImage(terrain_image): BoundTerrainImage,
) -> ActionResponse
where
    R: TerrainImageRepository + Send + Sync + 'static,
{
    state.terrain_images.show(&terrain_image);
    ActionResponse::Empty
}

/// `GET /terrain-images/{terrain_image}/edit`
pub async fn edit<R>(
    State(state): State<AppState<R>>,
    BoundTerrainImage(terrain_image): BoundTerrainImage,
) -> ActionResponse
where
    R: TerrainImageRepository + Send + Sync + 'static,
{
    state.terrain_images.edit(&terrain_image);
    ActionResponse::Empty
}

/// `PUT|PATCH /terrain-images/{terrain_image}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    BoundTerrainImage(terrain_image): BoundTerrainImage,
    RequestPayload(payload): RequestPayload,
) -> Result<ActionResponse, ApiError>
where
    R: TerrainImageRepository + Send + Sync + 'static,
{
    let request = UpdateTerrainImageRequest::validate(payload)?;
    state.terrain_images.update(request, &terrain_image);
    Ok(ActionResponse::Empty)
}

/// `DELETE /terrain-images/{terrain_image}`
pub async fn destroy<R>(
    State(state): State<AppState<R>>,
    BoundTerrainImage(terrain_image): BoundTerrainImage,
) -> ActionResponse
where
    R: TerrainImageRepository + Send + Sync + 'static,
{
    state.terrain_images.destroy(&terrain_image);
    ActionResponse::Empty
}
