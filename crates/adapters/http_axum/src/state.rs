//! Shared application state for axum handlers.

use std::sync::Arc;

use terrain_app::ports::TerrainImageRepository;
use terrain_app::services::terrain_image_controller::TerrainImageController;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so `R` itself does not need to be `Clone`.
pub struct AppState<R> {
    /// Terrain image resource controller.
    pub terrain_images: Arc<TerrainImageController<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            terrain_images: Arc::clone(&self.terrain_images),
        }
    }
}

impl<R> AppState<R>
where
    R: TerrainImageRepository + Send + Sync + 'static,
{
    /// Create a new application state from the controller.
    pub fn new(terrain_images: TerrainImageController<R>) -> Self {
        Self {
            terrain_images: Arc::new(terrain_images),
        }
    }
}
