//! User identity as an opaque platform token.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque numeric user id issued by the hosting chat platform.
///
/// The core never resolves ids to display names. Wherever a person must be
/// named in output, the mention token `<@id>` is emitted instead and
/// resolution is left to the presentation layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(UserId)
            .map_err(|_| format!("Invalid user id: {s}"))
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
