//! Axum integration for Listmark.
//!
//! The HTTP layer is the imperative shell around the todo reducer: handlers
//! parse forms, send one action through the store, and render HTML. This
//! crate holds the pieces that do not depend on the todo domain.
//!
//! - [`html`]: escaping, out-of-band elements, and [`FragmentResponse`] for
//!   htmx responses that update several page regions at once
//! - [`error`]: [`AppError`], rendered as an HTML error fragment
//! - [`extractors`]: [`HtmxRequest`] and [`CorrelationId`]
//! - [`middleware`]: correlation IDs and request tracing
//! - [`handlers`]: the health endpoint
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract** form fields, path ids and htmx headers
//! 3. **Build Action** and send it through the `Store`
//! 4. **Read** derived values (such as a list's open-todo count) from the
//!    post-action state
//! 5. **Render** the primary fragment plus out-of-band fragments

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod html;
pub mod middleware;

pub use error::AppError;
pub use extractors::{CorrelationId, HtmxRequest};
pub use html::{escape, FragmentResponse, OobElement};
pub use middleware::{correlation_id_layer, trace_layer, CORRELATION_ID_HEADER};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
