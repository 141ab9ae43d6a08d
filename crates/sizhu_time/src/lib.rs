//! Civil-to-solar time conversion for four-pillars charts.
//!
//! This crate provides:
//! - True-solar-time correction of civil birth timestamps (longitude vs
//!   timezone central meridian, equation of time, DST normalization)
//! - The fixed solar-term (jie) date table with solar-year, solar-month
//!   and boundary searches
//!
//! Timezone and DST data come from `chrono-tz`; everything else is pure
//! arithmetic over fixed tables.

pub mod eot;
pub mod error;
pub mod solar;
pub mod terms;

pub use eot::equation_of_time_minutes;
pub use error::SolarTimeError;
pub use solar::{SolarTimeResult, correct_solar_time, parse_civil, unapplied};
pub use terms::{JIE_TABLE, Jie, lichun, nearest_term, solar_month_index, solar_year};
