use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::{Error as JsonError, Value};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::logging::pii::Redacted;

/// Largest request body read before answering 413.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// JSON body extractor that only rejects oversized bodies.
///
/// A missing, unreadable or malformed body, or one that is not a JSON
/// object, yields `T::default()`, so write handlers see "no fields supplied"
/// and report their usual validation error
/// instead of a separate parse error.
#[derive(Debug)]
pub struct LenientJson<T>(pub T);

impl<T> LenientJson<T> {
    /// Extract the inner value from the LenientJson wrapper
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for LenientJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for LenientJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for LenientJson<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Extract content type before creating the async future to avoid borrow-across-await
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                match chunk {
                    Ok(chunk) => {
                        if body.len() + chunk.len() > MAX_BODY_BYTES {
                            warn!(limit = MAX_BODY_BYTES, "Request body too large");
                            return Err(AppError::payload_too_large(MAX_BODY_BYTES));
                        }
                        body.extend_from_slice(&chunk);
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to read request body chunk");
                        return Ok(LenientJson(T::default()));
                    }
                }
            }

            Ok(LenientJson(parse_or_default(&body, &content_type)))
        })
    }
}

/// Anything but a JSON object yields `T::default()`. Per-field leniency is
/// up to `T` (see the request DTOs in `routes`).
fn parse_or_default<T>(body: &[u8], content_type: &str) -> T
where
    T: DeserializeOwned + Default,
{
    if body.is_empty() {
        return T::default();
    }

    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) => {
            debug!(content_type = %content_type, body_size = body.len(), "JSON body is not an object");
            return T::default();
        }
        Err(e) => {
            debug!(
                error = %Redacted(&e.to_string()),
                category = classify_json_error(&e),
                content_type = %content_type,
                body_size = body.len(),
                "JSON body ignored"
            );
            return T::default();
        }
    };

    serde_json::from_value::<T>(value).unwrap_or_else(|e| {
        debug!(
            error = %Redacted(&e.to_string()),
            category = classify_json_error(&e),
            "JSON object did not fit the request type"
        );
        T::default()
    })
}

fn classify_json_error(error: &JsonError) -> &'static str {
    match error.classify() {
        serde_json::error::Category::Syntax => "syntax",
        serde_json::error::Category::Eof => "eof",
        serde_json::error::Category::Data => "data",
        serde_json::error::Category::Io => "io",
    }
}
