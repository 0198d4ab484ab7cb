//! Connection strings: scheme normalization, redaction and the parsed
//! [`Dsn`] descriptor.
//!
//! Layout:
//! - `normalize.rs`: lexical scheme rewriting to `postgresql://`
//! - `redact.rs`: password masking for logs and error messages

pub mod normalize;
pub mod redact;

pub use normalize::{CANONICAL_SCHEME, normalize};
pub use redact::{PASSWORD_PLACEHOLDER, redact};

use crate::error::ProvisionError;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::fmt;
use url::Url;

/// A normalized, parsed PostgreSQL connection string.
///
/// Immutable: deriving a DSN for another database goes through
/// [`Dsn::with_database`], which returns a new value. `Display` and `Debug`
/// both render the redacted form; use [`Dsn::as_str`] to hand the real
/// string to a driver.
#[derive(Clone, PartialEq, Eq)]
pub struct Dsn {
    url: Url,
}

impl Dsn {
    /// Normalize and parse `raw`. Fails on unparsable input or a scheme that
    /// is not a PostgreSQL spelling.
    pub fn parse(raw: &str) -> Result<Self, ProvisionError> {
        let url = Url::parse(&normalize(raw))?;
        if url.scheme() != CANONICAL_SCHEME {
            return Err(ProvisionError::Configuration(format!(
                "unsupported connection scheme `{}`",
                url.scheme()
            )));
        }
        Ok(Self { url })
    }

    /// Database name taken from the path, without the leading `/` and
    /// percent-decoded the way the driver decodes it. Empty when the DSN does
    /// not name one.
    pub fn database(&self) -> Cow<'_, str> {
        percent_decode_str(self.url.path().trim_start_matches('/')).decode_utf8_lossy()
    }

    /// Copy of this DSN pointing at `database`; every other component is
    /// inherited.
    pub fn with_database(&self, database: &str) -> Self {
        let mut url = self.url.clone();
        url.set_path(&format!("/{database}"));
        Self { url }
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    /// The unredacted connection string. Only for drivers.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn redacted(&self) -> String {
        redact(self.url.as_str())
    }
}

impl fmt::Display for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dsn").field(&self.redacted()).finish()
    }
}
