//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sizhu_time::SolarTimeError;

/// Failure of an external calendar authority. Recoverable: the engine
/// falls back to its own sexagenary arithmetic and flags the chart as
/// computed via the approximate path.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AuthorityError {
    /// The authority is unavailable (not installed, timed out upstream).
    Unavailable(String),
}

impl Display for AuthorityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "calendar authority unavailable: {msg}"),
        }
    }
}

impl Error for AuthorityError {}

/// Errors from chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Timestamp parsing or timezone resolution failed.
    SolarTime(SolarTimeError),
    /// An index fell outside the closed 10- or 12-symbol domain. Produced
    /// only by the untyped index boundary ([`crate::Pillar::from_indices`]);
    /// never masked or defaulted.
    UnknownStemOrBranch(u8),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SolarTime(e) => write!(f, "solar time error: {e}"),
            Self::UnknownStemOrBranch(idx) => {
                write!(f, "index {idx} outside the stem/branch domain")
            }
        }
    }
}

impl Error for ChartError {}

impl From<SolarTimeError> for ChartError {
    fn from(e: SolarTimeError) -> Self {
        Self::SolarTime(e)
    }
}
