//! URI parser for portal:// scheme
//!
//! Supports URIs of the form:
//! ```text
//! portal://<view-id>[/][?query]
//! ```
//!
//! The view id is handed to the router unchanged; whether it names a known
//! view is decided there.

use std::fmt;

use crate::constants::URI_SCHEME;

/// Parsed portal:// URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalUri {
    /// Requested view identifier, e.g. `report-constructor`
    pub view: String,
}

impl fmt::Display for PortalUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{URI_SCHEME}://{}", self.view)
    }
}

/// Error type for URI parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// URI doesn't start with portal://
    InvalidScheme,
    /// Nothing after the scheme
    MissingView,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidScheme => write!(f, "URI must start with {URI_SCHEME}://"),
            ParseError::MissingView => write!(f, "Missing view in URI"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Split off a case-insensitive `portal://` prefix
fn strip_scheme(s: &str) -> Option<&str> {
    let (scheme, rest) = s.split_once("://")?;
    scheme.eq_ignore_ascii_case(URI_SCHEME).then_some(rest)
}

/// Parse a portal:// URI string
pub fn parse(uri: &str) -> Result<PortalUri, ParseError> {
    let rest = strip_scheme(uri.trim()).ok_or(ParseError::InvalidScheme)?;

    let path = match rest.find(['?', '#']) {
        Some(idx) => &rest[..idx],
        None => rest,
    };

    let view = path
        .split('/')
        .find(|segment| !segment.is_empty())
        .ok_or(ParseError::MissingView)?;

    Ok(PortalUri {
        view: view.to_string(),
    })
}

/// Check if a string looks like a portal:// URI
pub fn is_portal_uri(s: &str) -> bool {
    strip_scheme(s).is_some()
}
