//! ### isocookie — one cookie accessor for both sides of the render
//!
//! The same component reads and writes HTTP cookies whether it runs against a
//! browser-like live cookie string or inside a server-side rendering process,
//! where cookies arrive on the inbound `Cookie` header and leave as
//! `Set-Cookie` entries on the outbound response.
//!
//! Just `use` the prelude module, and you're ready to go!
//!
//! ## Client-side
//! ```
//! use isocookie::prelude::*;
//!
//! let doc = MemoryDocument::from_raw("id=abc; theme=dark");
//! let mut cookies = CookieAccessor::client(doc);
//!
//! assert_eq!(cookies.get("theme"), "dark");
//! cookies.set("lang", "fr", CookieAttributes::new().expires(Expiry::Days(7)).path("/"));
//! assert!(cookies.check("lang"));
//! ```
//!
//! ## Server-side
//! ```
//! use isocookie::prelude::*;
//!
//! let collector = CookieCollector::new();
//! let mut cookies = CookieAccessor::server_parts(Some("a=1; b=2".to_owned()), collector.clone());
//!
//! cookies.set("b", "99", CookieAttributes::new());
//! // The just-set cookie wins over what the request carried.
//! assert_eq!(cookies.get("b"), "99");
//!
//! // Hand the queued cookies to your HTTP layer when building the response.
//! let headers = collector.to_header_values().unwrap();
//! assert_eq!(headers.len(), 1);
//! ```

#[macro_use]
extern crate log;

/// The accessor and its execution context
pub mod accessor;
/// Cookie attributes and their normalization rules
pub mod attributes;
/// Outbound response cookie seam
pub mod collector;
/// Client-side document cookie store seam
pub mod document;
/// Error definitions
pub mod error;
/// Cookie string parsing
pub mod parse;

mod encoding;
mod sink;

///
pub use cookie;
///
pub use http;

/// Contains everything you need to read and write cookies in either context
pub mod prelude {
    ///
    pub use crate::accessor::CookieAccessor;
    ///
    pub use crate::accessor::ExecutionContext;
    ///
    pub use crate::attributes::CookieAttributes;
    ///
    pub use crate::attributes::Expiry;
    ///
    pub use crate::attributes::SameSite;
    ///
    pub use crate::collector::CookieCollector;
    ///
    pub use crate::collector::ResponseCookies;
    ///
    pub use crate::document::DocumentStore;
    ///
    pub use crate::document::MemoryDocument;
    ///
    pub use crate::error::CookieError;
    ///
    pub use crate::parse::parse_cookie_string;
    ///
    pub use crate::parse::CookieMap;
    ///
    pub use cookie::Cookie;
    ///
    pub use http::header;
    ///
    pub use http::HeaderMap;
}
