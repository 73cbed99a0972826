//! Resource controller for terrain images.
//!
//! The seven actions follow the usual resource convention. None of them has
//! behaviour yet: each accepts its already-resolved inputs and returns without
//! reading or writing storage. The only IO this service performs is
//! [`TerrainImageController::resolve`], which binds a route parameter to an
//! entity before `show`, `edit`, `update` or `destroy` run.

use terrain_domain::error::{NotFoundError, TerrainError};
use terrain_domain::id::TerrainImageId;
use terrain_domain::request::{StoreTerrainImageRequest, UpdateTerrainImageRequest};
use terrain_domain::terrain_image::TerrainImage;

use crate::ports::TerrainImageRepository;

/// Application service exposing the terrain image resource actions.
pub struct TerrainImageController<R> {
    repo: R,
}

impl<R: TerrainImageRepository> TerrainImageController<R> {
    /// Create a new controller backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Resolve a route-bound terrain image.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::NotFound`] when no terrain image with `id`
    /// exists, or a storage error from the repository.
    pub async fn resolve(&self, id: TerrainImageId) -> Result<TerrainImage, TerrainError> {
        match self.repo.get_by_id(id).await? {
            Some(image) => Ok(image),
            None => {
                tracing::debug!(%id, "terrain image not bound");
                Err(NotFoundError {
                    entity: TerrainImage::RESOURCE,
                    id: id.to_string(),
                }
                .into())
            }
        }
    }
}

#[allow(clippy::unused_self, clippy::needless_pass_by_value)]
impl<R> TerrainImageController<R> {
    /// Display a listing of the resource.
    pub fn index(&self) {}

    /// Show the form for creating a new resource.
    pub fn create(&self) {}

    /// Store a newly created resource in storage.
    pub fn store(&self, _request: StoreTerrainImageRequest) {}

    /// Display the specified resource.
    pub fn show(&self, _terrain_image: &TerrainImage) {}

    /// Show the form for editing the specified resource.
    pub fn edit(&self, _terrain_image: &TerrainImage) {}

    /// Update the specified resource in storage.
    pub fn update(&self, _request: UpdateTerrainImageRequest, _terrain_image: &TerrainImage) {}

    /// Remove the specified resource from storage.
    pub fn destroy(&self, _terrain_image: &TerrainImage) {}
}
