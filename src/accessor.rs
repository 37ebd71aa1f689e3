//! The public accessor surface.

use crate::{
    attributes::{CookieAttributes, Expiry, SameSite, REMOVAL_EXPIRY},
    collector::ResponseCookies,
    document::DocumentStore,
    parse::CookieMap,
    sink::{ClientSink, ServerSink, Sink},
};
use http::{header::COOKIE, HeaderMap};

/// Where an accessor runs, resolved once at construction and fixed for the
/// accessor's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// A live, mutable cookie string is available.
    ClientSide,
    /// Cookies arrive on an inbound header and leave through an outbound
    /// response collector.
    ServerSide,
}

enum SinkVariant {
    Client(ClientSink),
    Server(ServerSink),
}

/// Reads and writes cookies identically in browser-like and server-side
/// rendering contexts.
///
/// Every read rebuilds its view from the current raw sources, so a `set`
/// followed by a `get` within the same logical turn observes the write in
/// both contexts. The accessor holds no cookie state of its own; the
/// canonical store is the external sink.
///
/// ```
/// use isocookie::prelude::*;
///
/// let doc = MemoryDocument::from_raw("id=abc; theme=dark");
/// let mut cookies = CookieAccessor::client(doc);
/// assert_eq!(cookies.get("theme"), "dark");
///
/// cookies.set("lang", "fr", CookieAttributes::new());
/// assert!(cookies.check("lang"));
/// ```
pub struct CookieAccessor {
    sink: SinkVariant,
}

impl CookieAccessor {
    /// Client-side accessor over a live document cookie store.
    pub fn client(document: impl DocumentStore + 'static) -> Self {
        CookieAccessor {
            sink: SinkVariant::Client(ClientSink::new(Box::new(document))),
        }
    }

    /// Server-side accessor over the inbound request headers and an outbound
    /// response collector.
    ///
    /// A request without a `Cookie` header (or one whose value is not valid
    /// text) is an empty source, not an error.
    pub fn server(request_headers: &HeaderMap, response: impl ResponseCookies + 'static) -> Self {
        let header = request_headers
            .get(COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        Self::server_parts(header, response)
    }

    /// Server-side accessor from an already-extracted `Cookie` header value,
    /// for hosts that do not hand out an `http::HeaderMap`.
    pub fn server_parts(cookie_header: Option<String>, response: impl ResponseCookies + 'static) -> Self {
        CookieAccessor {
            sink: SinkVariant::Server(ServerSink::new(cookie_header, Box::new(response))),
        }
    }

    /// The context this accessor was built for.
    pub fn context(&self) -> ExecutionContext {
        match &self.sink {
            SinkVariant::Client(_) => ExecutionContext::ClientSide,
            SinkVariant::Server(_) => ExecutionContext::ServerSide,
        }
    }

    /// Whether a cookie with the given name exists.
    pub fn check(&self, name: &str) -> bool {
        self.sink().check(name)
    }

    /// The decoded value of the named cookie, or the empty string when it is
    /// absent.
    ///
    /// A cookie present with an empty value and an absent cookie are
    /// observably identical here; callers relying on the distinction should
    /// pair this with [`check`](Self::check).
    pub fn get(&self, name: &str) -> String {
        self.sink().read().remove(name).unwrap_or_default()
    }

    /// Full reconciled snapshot of all cookies.
    pub fn get_all(&self) -> CookieMap {
        self.sink().read()
    }

    /// Set a cookie with structured attributes.
    pub fn set(&mut self, name: &str, value: &str, attributes: CookieAttributes) {
        self.sink_mut().write(name, value, attributes);
    }

    /// Set a cookie from the legacy positional parameter list.
    ///
    /// Repacks the slots into [`CookieAttributes`] exactly once and delegates
    /// to [`set`](Self::set); behavior is identical to building the
    /// attributes by hand.
    #[allow(clippy::too_many_arguments)]
    pub fn set_legacy(
        &mut self,
        name: &str,
        value: &str,
        expires: Option<Expiry>,
        path: Option<&str>,
        domain: Option<&str>,
        secure: Option<bool>,
        same_site: Option<SameSite>,
        partitioned: Option<bool>,
    ) {
        let attributes = CookieAttributes {
            expires,
            path: path.map(str::to_owned),
            domain: domain.map(str::to_owned),
            secure: secure.unwrap_or(false),
            same_site,
            partitioned: partitioned.unwrap_or(false),
        };
        self.set(name, value, attributes);
    }

    /// Delete the named cookie.
    ///
    /// Deletion is expiry-based: the cookie is re-set with an empty value and
    /// an expiry one second past the epoch.
    pub fn delete(&mut self, name: &str) {
        self.delete_with(name, None, None, None, SameSite::Lax);
    }

    /// Delete the named cookie, matching the path/domain/flags it was set
    /// with.
    pub fn delete_with(&mut self, name: &str, path: Option<&str>, domain: Option<&str>, secure: Option<bool>, same_site: SameSite) {
        let attributes = CookieAttributes {
            expires: Some(Expiry::At(REMOVAL_EXPIRY)),
            path: path.map(str::to_owned),
            domain: domain.map(str::to_owned),
            secure: secure.unwrap_or(false),
            same_site: Some(same_site),
            partitioned: false,
        };
        self.set(name, "", attributes);
    }

    /// Delete every cookie in the current snapshot.
    ///
    /// The set of names is fixed up front; deletions performed while
    /// iterating are not re-observed.
    pub fn delete_all(&mut self) {
        self.delete_all_with(None, None, None, SameSite::Lax);
    }

    /// Delete every cookie in the current snapshot, matching the given
    /// path/domain/flags.
    pub fn delete_all_with(&mut self, path: Option<&str>, domain: Option<&str>, secure: Option<bool>, same_site: SameSite) {
        let names: Vec<String> = self.get_all().into_keys().collect();
        for name in names {
            self.delete_with(&name, path, domain, secure, same_site);
        }
    }

    fn sink(&self) -> &dyn Sink {
        match &self.sink {
            SinkVariant::Client(sink) => sink,
            SinkVariant::Server(sink) => sink,
        }
    }

    fn sink_mut(&mut self) -> &mut dyn Sink {
        match &mut self.sink {
            SinkVariant::Client(sink) => sink,
            SinkVariant::Server(sink) => sink,
        }
    }
}
