//! `TerrainImage` — the single resource served by the controller.
//!
//! Nothing beyond identity and row bookkeeping is known about what a terrain
//! image holds, so the entity carries exactly that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TerrainError, ValidationError};
use crate::id::TerrainImageId;

/// UTC timestamp used for `created_at` / `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// A terrain image record, resolvable from its id in a request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainImage {
    pub id: TerrainImageId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TerrainImage {
    /// Name used in not-found errors and logs.
    pub const RESOURCE: &'static str = "TerrainImage";

    /// Create a builder for constructing a [`TerrainImage`].
    #[must_use]
    pub fn builder() -> TerrainImageBuilder {
        TerrainImageBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::Validation`] when `updated_at` precedes
    /// `created_at`.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.updated_at < self.created_at {
            return Err(ValidationError::TimestampOrder.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`TerrainImage`].
#[derive(Debug, Default)]
pub struct TerrainImageBuilder {
    id: Option<TerrainImageId>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl TerrainImageBuilder {
    #[must_use]
    pub fn id(mut self, id: TerrainImageId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn created_at(mut self, at: Timestamp) -> Self {
        self.created_at = Some(at);
        self
    }

    #[must_use]
    pub fn updated_at(mut self, at: Timestamp) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Consume the builder, validate, and return a [`TerrainImage`].
    ///
    /// Missing timestamps default to now; a missing `updated_at` defaults to
    /// `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::Validation`] if the timestamps are out of order.
    pub fn build(self) -> Result<TerrainImage, TerrainError> {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        let image = TerrainImage {
            id: self.id.unwrap_or_default(),
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        };
        image.validate()?;
        Ok(image)
    }
}
