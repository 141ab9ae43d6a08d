//! True-solar-time correction for civil birth timestamps.
//!
//! A wall clock reads zone time, not sun time. The correction re-anchors a
//! civil timestamp to the observer's meridian in three steps: normalize to
//! the zone's standard (non-DST) offset, shift by 4 minutes per degree of
//! longitude away from the zone's central meridian, and add the equation
//! of time. The result is re-expressed in the zone's civil form with DST
//! reapplied for display.
//!
//! Timezone resolution and DST offsets come from `chrono-tz`; true solar
//! time is anchored to the meridian, so the DST component of the civil
//! offset is removed before correcting and restored after.

use chrono::{Datelike, Duration, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::{OffsetComponents, Tz};
use serde::{Deserialize, Serialize};

use crate::eot::equation_of_time_minutes;
use crate::error::SolarTimeError;

/// Accepted civil timestamp layouts (no UTC offset, wall clock at birth).
const CIVIL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Minutes of solar drift per degree of longitude (360 deg / 1440 min).
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Outcome of a solar-time correction, applied or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarTimeResult {
    /// Corrected local wall-clock timestamp (the input timestamp when the
    /// correction was not applied). Serializes as a local-time string.
    pub corrected: NaiveDateTime,
    /// Longitude-vs-central-meridian component, minutes.
    pub longitude_correction_minutes: f64,
    /// Equation-of-time component, minutes.
    pub equation_of_time_minutes: f64,
    /// IANA id the correction was resolved against, if any.
    pub timezone_id: Option<String>,
    /// Whether the correction was applied.
    pub applied: bool,
    /// Human-readable note on fallback or DST-transition handling.
    pub warning: Option<String>,
}

/// Parse a civil timestamp in one of the accepted layouts.
pub fn parse_civil(timestamp: &str) -> Result<NaiveDateTime, SolarTimeError> {
    for fmt in CIVIL_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, fmt) {
            return Ok(dt);
        }
    }
    Err(SolarTimeError::InvalidDateFormat(timestamp.to_string()))
}

/// Resolve the zone offset in force at a local wall-clock reading.
///
/// Ambiguous readings (the repeated fall-back hour) take the earlier,
/// pre-transition offset; nonexistent readings (the spring-forward gap)
/// resolve through the post-gap offset. Both attach a warning.
fn resolve_local_offset(tz: Tz, naive: NaiveDateTime) -> (chrono_tz::TzOffset, Option<String>) {
    match tz.offset_from_local_datetime(&naive) {
        LocalResult::Single(offset) => (offset, None),
        LocalResult::Ambiguous(earlier, _later) => (
            earlier,
            Some("ambiguous local time at a DST transition; using the earlier offset".to_string()),
        ),
        LocalResult::None => (
            post_gap_offset(tz, naive),
            Some("nonexistent local time in a DST gap; using the post-gap offset".to_string()),
        ),
    }
}

/// Offset in force just after the spring-forward gap containing `naive`.
///
/// A reading inside the gap has no offset of its own. Mapping it to UTC
/// through the pre-gap offset lands at or after the transition instant,
/// whose offset is the post-gap one. The pre-gap offset comes from
/// stepping back to the nearest resolvable wall reading; gaps never span
/// more than a few hours.
fn post_gap_offset(tz: Tz, naive: NaiveDateTime) -> chrono_tz::TzOffset {
    for hours in 1..=4 {
        let probe = naive - Duration::hours(hours);
        if let LocalResult::Single(before) | LocalResult::Ambiguous(before, _) =
            tz.offset_from_local_datetime(&probe)
        {
            let utc = naive - before.base_utc_offset() - before.dst_offset();
            return tz.offset_from_utc_datetime(&utc);
        }
    }
    tz.offset_from_utc_datetime(&naive)
}

/// Correct a civil timestamp to true solar time.
///
/// Fails with [`SolarTimeError::InvalidDateFormat`] on an unparseable
/// timestamp and [`SolarTimeError::MissingTimezone`] when `timezone_id` is
/// absent or not a known IANA id. Callers without a timezone must use
/// [`unapplied`] instead; this function never silently guesses.
pub fn correct_solar_time(
    timestamp: &str,
    timezone_id: Option<&str>,
    longitude_deg: f64,
) -> Result<SolarTimeResult, SolarTimeError> {
    let naive = parse_civil(timestamp)?;
    let tz: Tz = timezone_id
        .ok_or(SolarTimeError::MissingTimezone)?
        .parse()
        .map_err(|_| SolarTimeError::MissingTimezone)?;

    let (offset, warning) = resolve_local_offset(tz, naive);
    let base = offset.base_utc_offset();
    let dst = offset.dst_offset();

    // Standard-clock reading: strip any DST shift from the wall clock.
    let standard = naive - dst;

    let central_meridian_deg = base.num_seconds() as f64 / 3600.0 * 15.0;
    let longitude_correction = (longitude_deg - central_meridian_deg) * MINUTES_PER_DEGREE;
    let eot = equation_of_time_minutes(standard.ordinal());
    let total_seconds = ((longitude_correction + eot) * 60.0).round() as i64;
    let corrected_standard = standard + Duration::seconds(total_seconds);

    // Re-express in civil form: restore whatever DST shift the zone applies
    // at the corrected instant.
    let corrected_utc = corrected_standard - base;
    let display_offset = tz.offset_from_utc_datetime(&corrected_utc);
    let corrected = corrected_standard + display_offset.dst_offset();

    Ok(SolarTimeResult {
        corrected,
        longitude_correction_minutes: longitude_correction,
        equation_of_time_minutes: eot,
        timezone_id: Some(tz.name().to_string()),
        applied: true,
        warning,
    })
}

/// Fallback path: return the parsed timestamp unmodified.
///
/// Used when coordinates or timezone are unavailable. Fails only on an
/// unparseable timestamp.
pub fn unapplied(timestamp: &str) -> Result<SolarTimeResult, SolarTimeError> {
    let naive = parse_civil(timestamp)?;
    Ok(SolarTimeResult {
        corrected: naive,
        longitude_correction_minutes: 0.0,
        equation_of_time_minutes: 0.0,
        timezone_id: None,
        applied: false,
        warning: Some(
            "solar time correction not applied: timezone or coordinates unavailable".to_string(),
        ),
    })
}
