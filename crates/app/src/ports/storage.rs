//! Storage port — repository traits for persistence.

use std::future::Future;

use terrain_domain::error::TerrainError;
use terrain_domain::id::TerrainImageId;
use terrain_domain::terrain_image::TerrainImage;

/// Read access to stored terrain images.
///
/// The controller actions never write, so the port only exposes the lookup
/// needed to bind a route parameter to an entity.
pub trait TerrainImageRepository {
    /// Fetch a terrain image by id, `None` when no row matches.
    fn get_by_id(
        &self,
        id: TerrainImageId,
    ) -> impl Future<Output = Result<Option<TerrainImage>, TerrainError>> + Send;
}
