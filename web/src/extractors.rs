//! Custom Axum extractors.
//!
//! - [`CorrelationId`]: the request's correlation ID
//! - [`HtmxRequest`]: whether htmx issued the request, and what it targets
//!
//! Both are infallible.

use crate::html::{HX_REQUEST, HX_TARGET};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Correlation ID for request tracing.
///
/// Uses the ID the correlation middleware stored in request extensions, then
/// the `X-Correlation-ID` header, and generates a UUID v4 as a last resort.
#[derive(Debug, Clone, Copy)]
pub struct CorrelationId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let correlation_id = parts
            .extensions
            .get::<Uuid>()
            .copied()
            .or_else(|| {
                parts
                    .headers
                    .get(crate::middleware::CORRELATION_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| Uuid::parse_str(s).ok())
            })
            .unwrap_or_else(Uuid::new_v4);

        Ok(Self(correlation_id))
    }
}

/// htmx request metadata.
///
/// `is_htmx` is true when the `HX-Request` header is `true`. Handlers serving
/// both full pages and fragments use it to pick what to render.
///
/// # Example
///
/// ```ignore
/// async fn show(htmx: HtmxRequest) -> Html<String> {
///     if htmx.is_htmx { Html(panel()) } else { Html(full_page()) }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmxRequest {
    /// `HX-Request: true` was present
    pub is_htmx: bool,
    /// Value of `HX-Target`, when sent
    pub target: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for HtmxRequest
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get(HX_REQUEST)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));
        let target = parts
            .headers
            .get(HX_TARGET)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(Self { is_htmx, target })
    }
}
