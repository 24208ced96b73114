//! Relay address model.
//!
//! Each public CORS relay expects the backend address in a different shape.
//! The shape is carried as a tag so composition is an exhaustive match
//! rather than a comparison against known relay URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Bytes left intact by URI-component encoding.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// How a relay expects the target address to be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayKind {
    /// Template ends in a query parameter; the target is percent-encoded.
    QueryEncode,
    /// Target is appended to the template verbatim.
    PrefixConcat,
    /// Target is appended after a single path separator.
    PrefixSlash,
}

/// One entry of the ordered relay list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayAddress {
    pub kind: RelayKind,
    pub template: String,
}

impl RelayAddress {
    pub fn new(kind: RelayKind, template: impl Into<String>) -> Self {
        Self {
            kind,
            template: template.into(),
        }
    }

    /// Compose the base address that routes `target` through this relay.
    pub fn compose(&self, target: &str) -> String {
        match self.kind {
            RelayKind::QueryEncode => {
                format!("{}{}", self.template, utf8_percent_encode(target, COMPONENT))
            }
            RelayKind::PrefixConcat => format!("{}{}", self.template, target),
            RelayKind::PrefixSlash => {
                format!("{}/{}", self.template.trim_end_matches('/'), target)
            }
        }
    }
}

impl std::fmt::Display for RelayAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}
