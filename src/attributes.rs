//! Cookie serialization attributes and their normalization.

use std::fmt::{self, Display, Formatter};
use time::{macros::datetime, Duration, OffsetDateTime};

/// Expiry used for cookie deletion: one second past the epoch, far enough in
/// the past for every client to drop the cookie immediately.
pub(crate) const REMOVAL_EXPIRY: OffsetDateTime = datetime!(1970-01-01 00:00:01 UTC);

/// The `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    /// The attribute token as written on the client wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

impl Display for SameSite {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SameSite> for cookie::SameSite {
    fn from(s: SameSite) -> Self {
        match s {
            SameSite::Strict => cookie::SameSite::Strict,
            SameSite::Lax => cookie::SameSite::Lax,
            SameSite::None => cookie::SameSite::None,
        }
    }
}

/// Cookie lifetime, either relative in whole days or an absolute point in
/// time. Relative lifetimes are resolved against "now" when the cookie is
/// serialized, not when the attributes are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    Days(i64),
    At(OffsetDateTime),
}

impl Expiry {
    pub(crate) fn resolve(self) -> OffsetDateTime {
        match self {
            Expiry::Days(days) => OffsetDateTime::now_utc() + Duration::days(days),
            Expiry::At(when) => when,
        }
    }
}

impl From<i64> for Expiry {
    fn from(days: i64) -> Self {
        Expiry::Days(days)
    }
}

impl From<OffsetDateTime> for Expiry {
    fn from(when: OffsetDateTime) -> Self {
        Expiry::At(when)
    }
}

/// Serialization metadata for a single set operation.
///
/// All fields are optional; an absent `expires` means a session cookie and an
/// absent `same_site` defaults to [`SameSite::Lax`] at serialization time.
///
/// ```
/// use isocookie::attributes::{CookieAttributes, Expiry, SameSite};
///
/// let attrs = CookieAttributes::new()
///     .expires(Expiry::Days(7))
///     .path("/app")
///     .secure(true)
///     .same_site(SameSite::Strict);
/// # let _ = attrs;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieAttributes {
    pub expires: Option<Expiry>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub same_site: Option<SameSite>,
    pub partitioned: bool,
}

impl CookieAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expires(mut self, expires: impl Into<Expiry>) -> Self {
        self.expires = Some(expires.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    pub fn partitioned(mut self, partitioned: bool) -> Self {
        self.partitioned = partitioned;
        self
    }

    /// Resolve defaults and the `Secure`/`SameSite=None` interaction.
    ///
    /// Browsers reject `SameSite=None` cookies lacking `Secure`, so honoring
    /// a caller's `secure: false` there would produce a cookie that never
    /// takes effect. The flag is forced on instead, with a logged warning.
    /// Runs once, before either sink encodes the cookie.
    pub(crate) fn normalize(self) -> NormalizedAttributes {
        let same_site = self.same_site.unwrap_or_default();
        let mut secure = self.secure;
        if !secure && same_site == SameSite::None {
            warn!("cookie uses SameSite=None without the Secure flag; forcing Secure so the cookie is not rejected by the client");
            secure = true;
        }

        NormalizedAttributes {
            expires: self.expires.map(Expiry::resolve),
            path: self.path,
            domain: self.domain,
            secure,
            same_site,
            partitioned: self.partitioned,
        }
    }
}

/// Attributes after normalization, shared by both sinks.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NormalizedAttributes {
    pub expires: Option<OffsetDateTime>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub same_site: SameSite,
    pub partitioned: bool,
}
