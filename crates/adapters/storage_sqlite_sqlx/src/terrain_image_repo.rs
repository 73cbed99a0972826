//! `SQLite` implementation of [`TerrainImageRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use terrain_app::ports::TerrainImageRepository;
use terrain_domain::error::TerrainError;
use terrain_domain::id::TerrainImageId;
use terrain_domain::terrain_image::{TerrainImage, Timestamp};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`TerrainImage`].
struct Wrapper(TerrainImage);

fn decode_timestamp(raw: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = TerrainImageId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        TerrainImage::builder()
            .id(id)
            .created_at(decode_timestamp(&created_at)?)
            .updated_at(decode_timestamp(&updated_at)?)
            .build()
            .map(Self)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))
    }
}

const SELECT_BY_ID: &str = "SELECT id, created_at, updated_at FROM terrain_images WHERE id = ?";

/// `SQLite`-backed terrain image repository.
#[derive(Clone)]
pub struct SqliteTerrainImageRepository {
    pool: SqlitePool,
}

impl SqliteTerrainImageRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TerrainImageRepository for SqliteTerrainImageRepository {
    fn get_by_id(
        &self,
        id: TerrainImageId,
    ) -> impl Future<Output = Result<Option<TerrainImage>, TerrainError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }
}
