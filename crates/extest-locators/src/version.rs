use crate::error::LocatorError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A VS Code release number.
///
/// Ordering is numeric per component, so `1.9.0 < 1.10.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `M.m.p` or `M.m`.
    ///
    /// A channel suffix such as `-insider` is dropped: an insider build uses
    /// the same workbench markup as the release it precedes.
    pub fn parse(input: &str) -> Result<Self, LocatorError> {
        let invalid = || LocatorError::InvalidVersionFormat(input.to_string());

        let trimmed = input.trim();
        let core = match trimmed.split_once('-') {
            Some((core, _channel)) => core,
            None => trimmed,
        };
        if core.is_empty() {
            return Err(invalid());
        }

        let mut parts = [0u64; 3];
        let mut count = 0;
        for part in core.split('.') {
            if count == parts.len() || part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(invalid());
            }
            parts[count] = part.parse().map_err(|_| invalid())?;
            count += 1;
        }
        if count < 2 {
            return Err(invalid());
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl FromStr for Version {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
