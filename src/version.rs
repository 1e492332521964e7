//! Version normalization.
//!
//! Installation records report versions such as `16.11.34407.143`. Only the
//! major and minor components matter for selection; the major component maps
//! onto a product release year through a fixed compatibility table.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::diagnostics::DiagnosticLog;

/// `<major>.<minor>.<anything>`, ASCII digits only.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.").expect("VERSION_REGEX must compile")
});

/// Product generation of a toolchain installation.
///
/// This is a closed set. Supporting a new generation means adding a variant
/// here and extending [`ReleaseYear::from_major`] and [`ReleaseYear::toolset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum ReleaseYear {
    Vs2017,
    Vs2019,
    Vs2022,
}

impl ReleaseYear {
    /// Every supported release year, oldest first.
    pub const ALL: [ReleaseYear; 3] = [Self::Vs2017, Self::Vs2019, Self::Vs2022];

    /// Map a major product version onto its release year.
    pub fn from_major(major: u64) -> Option<Self> {
        match major {
            15 => Some(Self::Vs2017),
            16 => Some(Self::Vs2019),
            17 => Some(Self::Vs2022),
            _ => None,
        }
    }

    /// The calendar year, e.g. `2019`.
    pub fn year(self) -> u16 {
        match self {
            Self::Vs2017 => 2017,
            Self::Vs2019 => 2019,
            Self::Vs2022 => 2022,
        }
    }

    /// Platform toolset label shipped with this generation.
    pub fn toolset(self) -> &'static str {
        match self {
            Self::Vs2017 => "v141",
            Self::Vs2019 => "v142",
            Self::Vs2022 => "v143",
        }
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

impl From<ReleaseYear> for u16 {
    fn from(year: ReleaseYear) -> Self {
        year.year()
    }
}

impl TryFrom<u16> for ReleaseYear {
    type Error = String;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|y| y.year() == year)
            .ok_or_else(|| format!("unsupported release year: {}", year))
    }
}

/// Structured form of a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalizedVersion {
    pub major: u64,
    pub minor: u64,
    /// Absent when `major` is not in the compatibility table.
    pub release_year: Option<ReleaseYear>,
}

/// Parse `version` into a [`NormalizedVersion`].
///
/// Returns `None` when the string does not start with `<int>.<int>.`. An
/// unsupported major version still yields major/minor, just no release year.
/// Components too large for `u64` saturate.
pub fn normalize(version: &str, log: &mut DiagnosticLog) -> Option<NormalizedVersion> {
    let parsed = VERSION_REGEX
        .captures(version)
        .map(|caps| (saturating_parse(&caps[1]), saturating_parse(&caps[2])));

    let Some((major, minor)) = parsed else {
        log.push(format!("failed to parse version: {}", version));
        return None;
    };
    tracing::debug!(major, minor, "version match");

    let release_year = ReleaseYear::from_major(major);
    if release_year.is_none() {
        log.push(format!("unsupported version: {}", major));
    }

    Some(NormalizedVersion {
        major,
        minor,
        release_year,
    })
}

/// Parse a run of ASCII digits, clamping at `u64::MAX`.
fn saturating_parse(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}
