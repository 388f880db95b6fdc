//! HTML fragments and htmx out-of-band swaps.
//!
//! A handler answering an htmx request returns one body that may update
//! several unrelated regions of the page:
//!
//! - the **primary** fragment, swapped into whatever element the request
//!   targeted (`hx-target` / `hx-swap` on the client)
//! - any number of **out-of-band** fragments, each an element carrying its own
//!   `id` and `hx-swap-oob="true"`; htmx replaces the element with that id
//!   wherever it sits in the DOM
//!
//! Server side this is only concatenation. [`FragmentResponse`] keeps the
//! pieces apart until the response is written so handlers can add OOB
//! fragments without caring about order.
//!
//! # Example
//!
//! ```
//! use listmark_web::html::{FragmentResponse, OobElement};
//!
//! let body = FragmentResponse::new(r#"<li id="todo-1">Milk</li>"#)
//!     .with_oob(
//!         OobElement::new("span", "page-title-count")
//!             .attr("data-count", "2")
//!             .text("2"),
//!     )
//!     .into_body();
//!
//! assert!(body.starts_with(r#"<li id="todo-1">"#));
//! assert!(body.contains(r#"<span id="page-title-count" hx-swap-oob="true" data-count="2">2</span>"#));
//! ```

use axum::http::{HeaderName, HeaderValue};
use axum::response::{Html, IntoResponse, Response};

/// Request header htmx sets on every request it issues
pub const HX_REQUEST: HeaderName = HeaderName::from_static("hx-request");

/// Request header carrying the id of the element htmx will swap into
pub const HX_TARGET: HeaderName = HeaderName::from_static("hx-target");

/// Response header asking htmx to perform a full client-side redirect
pub const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");

/// Escape text for use in HTML element content or a quoted attribute value.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// An element that htmx swaps out-of-band.
///
/// Renders as `<tag id="…" hx-swap-oob="true" …attrs>content</tag>`. The id
/// is what htmx uses to find the element to replace, so it must be stable
/// across renders. Attribute values and text are escaped; use
/// [`OobElement::html`] for content that is already markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OobElement {
    tag: &'static str,
    id: String,
    attrs: Vec<(String, String)>,
    content: String,
}

impl OobElement {
    /// Starts an out-of-band element with the given tag and target id
    #[must_use]
    pub fn new(tag: &'static str, id: impl Into<String>) -> Self {
        Self {
            tag,
            id: id.into(),
            attrs: Vec::new(),
            content: String::new(),
        }
    }

    /// Adds an attribute; the value is escaped
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.attrs.push((name.into(), escape(value.as_ref())));
        self
    }

    /// Sets text content; the text is escaped
    #[must_use]
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        self.content = escape(text.as_ref());
        self
    }

    /// Sets markup content as-is
    #[must_use]
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.content = html.into();
        self
    }

    /// Render the element
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!(
            r#"<{tag} id="{id}" hx-swap-oob="true""#,
            tag = self.tag,
            id = escape(&self.id)
        );
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');
        out.push_str(&self.content);
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
        out
    }
}

impl From<OobElement> for String {
    fn from(element: OobElement) -> Self {
        element.render()
    }
}

/// One HTML response made of a primary fragment plus out-of-band fragments.
#[derive(Debug, Clone, Default)]
pub struct FragmentResponse {
    primary: String,
    oob: Vec<String>,
    redirect: Option<String>,
}

impl FragmentResponse {
    /// Response whose primary fragment is `html`
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            primary: html.into(),
            oob: Vec::new(),
            redirect: None,
        }
    }

    /// Response with an empty primary fragment.
    ///
    /// With `hx-swap="outerHTML"` on the client this removes the target
    /// element, which is how deletions are rendered.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append an out-of-band fragment
    #[must_use]
    pub fn with_oob(mut self, fragment: impl Into<String>) -> Self {
        self.oob.push(fragment.into());
        self
    }

    /// Ask htmx to navigate to `location` after the swap
    #[must_use]
    pub fn with_redirect(mut self, location: impl Into<String>) -> Self {
        self.redirect = Some(location.into());
        self
    }

    /// Concatenate the fragments, primary first
    #[must_use]
    pub fn into_body(self) -> String {
        let mut body = self.primary;
        for fragment in self.oob {
            body.push('\n');
            body.push_str(&fragment);
        }
        body
    }
}

impl IntoResponse for FragmentResponse {
    fn into_response(mut self) -> Response {
        let redirect = self.redirect.take();
        let mut response = Html(self.into_body()).into_response();
        if let Some(location) = redirect {
            match HeaderValue::from_str(&location) {
                Ok(value) => {
                    response.headers_mut().insert(HX_REDIRECT, value);
                }
                Err(error) => {
                    tracing::warn!(%location, %error, "Dropping unencodable HX-Redirect");
                }
            }
        }
        response
    }
}
