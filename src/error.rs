use thiserror::Error;

/// Errors surfacing at the HTTP boundary.
///
/// The codec itself never fails: decode failures fall back to the raw
/// substring, malformed segments still parse, and absent collaborators are
/// empty sources. Only rendering queued cookies into header values can
/// reject input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CookieError {
    /// A rendered `Set-Cookie` entry contains bytes not allowed in a header value.
    #[error("invalid Set-Cookie header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}
