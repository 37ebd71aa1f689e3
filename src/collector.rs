//! The server-side outbound cookie seam.

use crate::error::CookieError;
use cookie::{Cookie, CookieJar};
use http::{header::SET_COOKIE, HeaderMap, HeaderValue};
use std::{cell::RefCell, rc::Rc};

/// Outbound response cookie facility.
///
/// The implementor owns correct `Set-Cookie` header formatting; callers hand
/// it a structured [`Cookie`] and never a hand-rolled header string.
pub trait ResponseCookies {
    /// Raw `Set-Cookie` entries already queued on the response.
    fn queued(&self) -> Vec<String>;

    /// Queue one cookie for the response.
    fn queue(&mut self, cookie: Cookie<'static>);
}

/// Jar-backed [`ResponseCookies`] implementation.
///
/// Cheap-clone shared handle, so the HTTP layer can keep one handle while the
/// accessor writes through another, then drain the headers once the response
/// is built.
#[derive(Debug, Clone, Default)]
pub struct CookieCollector {
    jar: Rc<RefCell<CookieJar>>,
}

impl CookieCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every queued cookie into a `Set-Cookie` header value.
    pub fn to_header_values(&self) -> Result<Vec<HeaderValue>, CookieError> {
        self.jar
            .borrow()
            .iter()
            .map(|cookie| HeaderValue::from_str(&cookie.to_string()).map_err(CookieError::from))
            .collect()
    }
}

impl ResponseCookies for CookieCollector {
    fn queued(&self) -> Vec<String> {
        self.jar.borrow().iter().map(|cookie| cookie.to_string()).collect()
    }

    fn queue(&mut self, cookie: Cookie<'static>) {
        self.jar.borrow_mut().add(cookie);
    }
}

/// A plain header map works as a collector too: queued entries are its
/// `Set-Cookie` values, and queuing appends one. An entry rendering to an
/// invalid header value is logged and dropped rather than surfaced, in line
/// with the rest of the crate's degradation policy.
impl ResponseCookies for HeaderMap {
    fn queued(&self) -> Vec<String> {
        self.get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_owned)
            .collect()
    }

    fn queue(&mut self, cookie: Cookie<'static>) {
        match HeaderValue::from_str(&cookie.to_string()) {
            Ok(value) => {
                self.append(SET_COOKIE, value);
            }
            Err(e) => warn!("dropping Set-Cookie entry for {}: {}", cookie.name(), e),
        }
    }
}
