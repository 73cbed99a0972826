//! Form requests — the authorization check and rule set guarding an action's
//! payload.
//!
//! A form request is built from the raw [`Payload`] only after it has passed
//! [`FormRequest::validate`], so holding one proves the caller was authorized
//! and every rule held.

pub mod rule;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{AuthorizationError, TerrainError, ValidationError};

pub use rule::Rule;

/// Raw request input: a JSON object, or form fields mapped to string values.
pub type Payload = Map<String, Value>;

/// Per-field rule lists, evaluated in declaration order.
pub type Rules = Vec<(&'static str, Vec<Rule>)>;

/// Validation collaborator for a single controller action.
pub trait FormRequest: Sized {
    /// Wrap a payload that has already been authorized and validated.
    fn from_validated(payload: Payload) -> Self;

    /// Whether the caller may perform this request at all.
    fn authorize(&self) -> bool {
        true
    }

    /// Rules applied to the payload.
    fn rules() -> Rules {
        Vec::new()
    }

    /// Authorize, then validate `payload` against [`Self::rules`].
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::Forbidden`] if [`Self::authorize`] refuses, or
    /// [`TerrainError::Validation`] carrying every failing message per field.
    fn validate(payload: Payload) -> Result<Self, TerrainError> {
        let request = Self::from_validated(payload);
        if !request.authorize() {
            return Err(AuthorizationError.into());
        }

        let errors = evaluate(request.payload_ref(), &Self::rules());
        if errors.is_empty() {
            Ok(request)
        } else {
            Err(ValidationError::Fields(errors).into())
        }
    }

    /// Borrow the payload the request was built from.
    fn payload_ref(&self) -> &Payload;
}

fn evaluate(payload: &Payload, rules: &Rules) -> BTreeMap<String, Vec<String>> {
    let mut errors = BTreeMap::new();

    for (field, field_rules) in rules {
        let value = payload.get(*field);
        let required = field_rules.contains(&Rule::Required);

        if value.is_none() && !required {
            continue;
        }
        if value.is_some_and(Value::is_null) && field_rules.contains(&Rule::Nullable) {
            continue;
        }

        let messages: Vec<String> = if let Some(message) =
            required.then(|| Rule::Required.check(field, value)).flatten()
        {
            vec![message]
        } else {
            field_rules
                .iter()
                .filter(|rule| !matches!(rule, Rule::Required | Rule::Nullable))
                .filter_map(|rule| rule.check(field, value))
                .collect()
        };

        if !messages.is_empty() {
            errors.insert((*field).to_string(), messages);
        }
    }

    errors
}

/// Payload guard for the `store` action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreTerrainImageRequest {
    payload: Payload,
}

impl StoreTerrainImageRequest {
    /// The validated payload.
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

impl FormRequest for StoreTerrainImageRequest {
    fn from_validated(payload: Payload) -> Self {
        Self { payload }
    }

    fn payload_ref(&self) -> &Payload {
        &self.payload
    }
}

/// Payload guard for the `update` action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTerrainImageRequest {
    payload: Payload,
}

impl UpdateTerrainImageRequest {
    /// The validated payload.
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

impl FormRequest for UpdateTerrainImageRequest {
    fn from_validated(payload: Payload) -> Self {
        Self { payload }
    }

    fn payload_ref(&self) -> &Payload {
        &self.payload
    }
}
