// src/extract.rs
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that never rejects on content.
///
/// An empty body, non-JSON bytes, or JSON that is not an object produce
/// `T::default()`. Per-field defaults are left to `T`'s deserializer. Only a
/// body that cannot be read is rejected.
#[derive(Debug)]
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(LenientJson(parse_or_default(&bytes)))
    }
}

fn parse_or_default<T: DeserializeOwned + Default>(bytes: &[u8]) -> T {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "unparseable request body, using defaults");
            T::default()
        }
    }
}
