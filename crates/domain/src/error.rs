//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`TerrainError`]
//! via `#[from]` or an explicit `From` impl.

use std::collections::BTreeMap;

/// Top-level error shared by the domain, application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Forbidden(#[from] AuthorizationError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failing validation rules, grouped by field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields failed their rules. Every message is kept, in
    /// rule order.
    #[error("the given data was invalid")]
    Fields(BTreeMap<String, Vec<String>>),

    /// Stored timestamps are out of order.
    #[error("updated_at must not be earlier than created_at")]
    TimestampOrder,
}

impl ValidationError {
    /// Per-field messages, empty for errors that are not tied to a field.
    #[must_use]
    pub fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        match self {
            Self::Fields(errors) => errors.clone(),
            Self::TimestampOrder => BTreeMap::new(),
        }
    }
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A form request refused the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("This action is unauthorized.")]
pub struct AuthorizationError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "TerrainImage",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "TerrainImage abc not found");
    }

    #[test]
    fn should_convert_sub_errors_into_terrain_error() {
        let err: TerrainError = AuthorizationError.into();
        assert!(matches!(err, TerrainError::Forbidden(_)));

        let err: TerrainError = ValidationError::TimestampOrder.into();
        assert!(matches!(err, TerrainError::Validation(_)));
    }

    #[test]
    fn should_expose_no_field_errors_for_timestamp_order() {
        assert!(ValidationError::TimestampOrder.field_errors().is_empty());
    }
}
