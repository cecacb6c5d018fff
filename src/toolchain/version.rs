//! Swift toolchain version parsing and comparison.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use super::TEST_DISCOVERY_DEFAULT_SINCE;
use crate::errors::SpmError;

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Swift version (\d+(?:\.\d+){0,2})").expect("version regex is valid")
});

/// Version of the Swift toolchain in use.
///
/// Swift reports versions like `5.3` or `5.10.1`; missing components are
/// treated as zero so that versions compare numerically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SwiftVersion(Version);

impl SwiftVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        SwiftVersion(Version::new(major, minor, patch))
    }

    /// Extract the version from `swift --version` output.
    ///
    /// Accepts both `Swift version 5.5.2 (swift-5.5.2-RELEASE)` and
    /// `Apple Swift version 5.3 (swiftlang-1200.0.29.2 clang-1200.0.30.1)`.
    pub fn parse_output(output: &str) -> Result<Self, SpmError> {
        VERSION_LINE
            .captures(output)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(|| SpmError::Version {
                output: output.trim().to_string(),
            })
    }

    /// Whether this version is strictly older than `other`.
    ///
    /// An unparsable `other` never compares greater.
    pub fn is_less_than(&self, other: &str) -> bool {
        other.parse::<SwiftVersion>().is_ok_and(|other| *self < other)
    }

    /// Whether builds with this version need [`ENABLE_TEST_DISCOVERY_FLAG`].
    ///
    /// [`ENABLE_TEST_DISCOVERY_FLAG`]: super::ENABLE_TEST_DISCOVERY_FLAG
    pub fn needs_test_discovery_flag(&self) -> bool {
        *self < TEST_DISCOVERY_DEFAULT_SINCE
    }
}

impl FromStr for SwiftVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut parts = [0u64; 3];
        let mut count = 0;

        for component in s.split('.') {
            if count == parts.len() {
                return Err(format!("invalid Swift version '{}'", s));
            }
            parts[count] = component
                .parse()
                .map_err(|_| format!("invalid Swift version '{}'", s))?;
            count += 1;
        }

        Ok(SwiftVersion::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for SwiftVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.patch == 0 {
            write!(f, "{}.{}", self.0.major, self.0.minor)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
