//! Route binding — resolve the `{terrain_image}` path segment into an entity.
//!
//! An id that does not parse and an id with no stored row are both answered
//! with `404`: either way there is nothing to bind.

use std::str::FromStr;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use terrain_app::ports::TerrainImageRepository;
use terrain_domain::error::{NotFoundError, TerrainError};
use terrain_domain::id::TerrainImageId;
use terrain_domain::terrain_image::TerrainImage;

use crate::error::ApiError;
use crate::state::AppState;

/// A terrain image resolved from the request path.
#[derive(Debug, Clone)]
pub struct BoundTerrainImage(pub TerrainImage);

fn not_found(raw: String) -> ApiError {
    TerrainError::from(NotFoundError {
        entity: TerrainImage::RESOURCE,
        id: raw,
    })
    .into()
}

impl<R> FromRequestParts<AppState<R>> for BoundTerrainImage
where
    R: TerrainImageRepository + Send + Sync + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<R>,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| not_found(rejection.body_text()))?;

        let Ok(id) = TerrainImageId::from_str(&raw) else {
            tracing::debug!(id = %raw, "unparseable terrain image id");
            return Err(not_found(raw));
        };

        let image = state.terrain_images.resolve(id).await?;
        Ok(Self(image))
    }
}
