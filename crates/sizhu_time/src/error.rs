//! Error types for solar-time correction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from timestamp parsing or timezone resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarTimeError {
    /// The civil timestamp string could not be parsed.
    InvalidDateFormat(String),
    /// Correction was requested without a resolvable IANA timezone.
    /// Callers should branch to the fallback path rather than abort.
    MissingTimezone,
}

impl Display for SolarTimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat(s) => write!(f, "invalid date format: {s}"),
            Self::MissingTimezone => write!(f, "no resolvable timezone for solar correction"),
        }
    }
}

impl Error for SolarTimeError {}
