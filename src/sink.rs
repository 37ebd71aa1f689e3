//! The two cookie sinks behind the accessor.
//!
//! Both variants answer the same `read`/`write`/`check` contract; which one
//! an accessor holds is decided once at construction. The client variant
//! talks to a live document cookie string, the server variant reconciles the
//! inbound `Cookie` header with the cookies already queued on the outbound
//! response.

use crate::{
    attributes::{CookieAttributes, NormalizedAttributes},
    collector::ResponseCookies,
    document::DocumentStore,
    encoding::{decode, encode},
    parse::{parse_cookie_string, split_pair, CookieMap},
};
use cookie::Cookie;
use regex::Regex;
use time::{
    format_description::FormatItem,
    macros::format_description,
    UtcOffset,
};

/// `expires` clause format of the client wire form, the classic UTC HTTP
/// date: `Thu, 01 Jan 1970 00:00:01 GMT`.
const EXPIRES_FORMAT: &[FormatItem<'static>] =
    format_description!("[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT");

pub(crate) trait Sink {
    /// Authoritative view of the cookies currently held.
    fn read(&self) -> CookieMap;

    /// Serialize one cookie into this sink.
    fn write(&mut self, name: &str, value: &str, attributes: CookieAttributes);

    fn check(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }
}

pub(crate) struct ClientSink {
    document: Box<dyn DocumentStore>,
}

impl ClientSink {
    pub(crate) fn new(document: Box<dyn DocumentStore>) -> Self {
        ClientSink { document }
    }
}

impl Sink for ClientSink {
    fn read(&self) -> CookieMap {
        parse_cookie_string(&self.document.read())
    }

    fn write(&mut self, name: &str, value: &str, attributes: CookieAttributes) {
        let formatted = format_client_cookie(name, value, &attributes.normalize());
        self.document.write(&formatted);
    }

    fn check(&self, name: &str) -> bool {
        let raw = self.document.read();
        // Fast path: a positive regex match over the raw string saves the
        // full parse. A miss still has to parse, a cookie can sit in the
        // string as a bare name without `=`.
        if let Ok(re) = Regex::new(&format!(r"(?:^|;\s*){}=", regex::escape(&encode(name)))) {
            if re.is_match(&raw) {
                return true;
            }
        }
        parse_cookie_string(&raw).contains_key(name)
    }
}

/// Build the single cookie-set string committed to the document store.
///
/// Attribute clauses are conditional; boolean attributes contribute only
/// their bare token. The platform parses this string and merges the one
/// named cookie into its store.
fn format_client_cookie(name: &str, value: &str, attributes: &NormalizedAttributes) -> String {
    let mut out = format!("{}={};", encode(name), encode(value));
    if let Some(expires) = attributes.expires {
        if let Ok(date) = expires.to_offset(UtcOffset::UTC).format(&EXPIRES_FORMAT) {
            out.push_str(&format!("expires={date};"));
        }
    }
    if let Some(path) = &attributes.path {
        out.push_str(&format!("path={path};"));
    }
    if let Some(domain) = &attributes.domain {
        out.push_str(&format!("domain={domain};"));
    }
    if attributes.secure {
        out.push_str("secure;");
    }
    out.push_str(&format!("sameSite={};", attributes.same_site.as_str()));
    if attributes.partitioned {
        out.push_str("Partitioned;");
    }
    out
}

pub(crate) struct ServerSink {
    cookie_header: Option<String>,
    response: Box<dyn ResponseCookies>,
}

impl ServerSink {
    pub(crate) fn new(cookie_header: Option<String>, response: Box<dyn ResponseCookies>) -> Self {
        ServerSink { cookie_header, response }
    }
}

impl Sink for ServerSink {
    /// Request cookies overlaid with the response's queued `Set-Cookie`
    /// entries; a cookie set during the current response wins over whatever
    /// the request carried under the same name.
    fn read(&self) -> CookieMap {
        let mut map = self
            .cookie_header
            .as_deref()
            .map(parse_cookie_string)
            .unwrap_or_default();

        for entry in self.response.queued() {
            // Only the name=value head matters here, attributes play no part
            // in reconciliation.
            let head = entry.split(';').next().unwrap_or_default();
            let (name, value) = split_pair(head);
            let name = decode(name);
            if !name.is_empty() {
                map.insert(name, decode(value));
            }
        }

        map
    }

    fn write(&mut self, name: &str, value: &str, attributes: CookieAttributes) {
        let attributes = attributes.normalize();
        let mut cookie = Cookie::new(encode(name).into_owned(), encode(value).into_owned());
        if let Some(expires) = attributes.expires {
            cookie.set_expires(expires);
        }
        if let Some(path) = attributes.path {
            cookie.set_path(path);
        }
        if let Some(domain) = attributes.domain {
            cookie.set_domain(domain);
        }
        if attributes.secure {
            cookie.set_secure(true);
        }
        cookie.set_same_site(cookie::SameSite::from(attributes.same_site));
        if attributes.partitioned {
            cookie.set_partitioned(true);
        }
        self.response.queue(cookie);
    }
}
