//! Turning backend responses into values or readable errors.
//!
//! Error bodies come in two flavours: `{detail}` / `{error}` / `{message}`
//! objects, and DRF field-validation maps such as
//! `{"email": ["already taken"], "password": ["too short"]}`.

use crate::{ClientError, ClientResult};

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a 2xx body, or turn anything else into an `Api` error
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(response, fallback).await);
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub(crate) async fn read_body(response: Response) -> Option<Value> {
    let bytes = response.bytes().await.ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub(crate) async fn api_error(response: Response, fallback: &str) -> ClientError {
    let status = response.status();
    let body = read_body(response).await;
    ClientError::api(status.as_u16(), error_message(body.as_ref(), status, fallback))
}

/// Rejections carrying field errors become a `Validation` error with the
/// aggregated message; everything else is an `Api` error
pub(crate) async fn validation_error(response: Response, fallback: &str) -> ClientError {
    let status = response.status();
    let body = read_body(response).await;

    match body.as_ref().and_then(aggregate_field_errors) {
        Some(message) => ClientError::validation(message),
        None => ClientError::api(status.as_u16(), error_message(body.as_ref(), status, fallback)),
    }
}

/// `detail`, then `error`, then `message`, then the caller's fallback
pub(crate) fn error_message(body: Option<&Value>, status: StatusCode, fallback: &str) -> String {
    let Some(body) = body else {
        return format!("{fallback} (server error {})", status.as_u16());
    };

    ["detail", "error", "message"]
        .iter()
        .find_map(|field| body.get(field).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

/// `field: m1, m2 | field2: m3`, fields sorted by name
pub(crate) fn aggregate_field_errors(body: &Value) -> Option<String> {
    let fields = body.as_object()?;
    if fields.is_empty() {
        return None;
    }

    let parts: Vec<String> = fields
        .iter()
        .map(|(field, messages)| match messages {
            Value::Array(items) => {
                let joined: Vec<String> = items.iter().map(plain_text).collect();
                format!("{}: {}", field, joined.join(", "))
            }
            other => format!("{}: {}", field, plain_text(other)),
        })
        .collect();

    Some(parts.join(" | "))
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
