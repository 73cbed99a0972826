//! Request body extraction for the `store` and `update` actions.

use axum::Form;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde_json::Value;

use terrain_domain::request::Payload;

use crate::error::ApiError;

/// Raw request input, before any form request has looked at it.
///
/// - `application/json`: the body must be a JSON object.
/// - `application/x-www-form-urlencoded`: every field becomes a string value;
///   a repeated key keeps its last value.
/// - anything else: accepted only when the body is empty.
#[derive(Debug, Clone, Default)]
pub struct RequestPayload(pub Payload);

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let mime = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase());

    match mime.as_deref() {
        Some("application/json") => BodyKind::Json,
        Some(mime) if mime.starts_with("application/") && mime.ends_with("+json") => {
            BodyKind::Json
        }
        Some("application/x-www-form-urlencoded") => BodyKind::Form,
        _ => BodyKind::Other,
    }
}

impl<S> FromRequest<S> for RequestPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::MalformedPayload(rejection.body_text()))?;

                Ok(Self(
                    pairs
                        .into_iter()
                        .map(|(key, value)| (key, Value::String(value)))
                        .collect(),
                ))
            }
            BodyKind::Json => {
                let bytes = read_body(req, state).await?;
                if bytes.is_empty() {
                    return Ok(Self::default());
                }
                match serde_json::from_slice::<Value>(&bytes) {
                    Ok(Value::Object(map)) => Ok(Self(map)),
                    Ok(_) => Err(ApiError::MalformedPayload(
                        "request body must be a JSON object".to_string(),
                    )),
                    Err(err) => Err(ApiError::MalformedPayload(err.to_string())),
                }
            }
            BodyKind::Other => {
                let bytes = read_body(req, state).await?;
                if bytes.is_empty() {
                    Ok(Self::default())
                } else {
                    Err(ApiError::UnsupportedMediaType)
                }
            }
        }
    }
}

async fn read_body<S>(req: Request, state: &S) -> Result<Bytes, ApiError>
where
    S: Send + Sync,
{
    Bytes::from_request(req, state)
        .await
        .map_err(|rejection| ApiError::MalformedPayload(rejection.body_text()))
}
