//! Chart assembly: one immutable snapshot from validated birth input.

use sizhu_time::{SolarTimeResult, correct_solar_time, unapplied};

use crate::analyze::{analyze_interactions, annotate_markers};
use crate::error::ChartError;
use crate::luck::compute_luck_pillars;
use crate::pillars::{CalendarAuthority, derive_four_pillars_with};
use crate::types::{BirthInput, Chart};

/// Compute a chart with the built-in sexagenary arithmetic.
pub fn compute_chart(input: &BirthInput) -> Result<Chart, ChartError> {
    compute_chart_with(input, None)
}

/// Compute a chart, preferring an external calendar authority for the day
/// pillar when one is supplied.
///
/// Solar correction runs when both a timezone and coordinates are present;
/// otherwise the fallback path is taken — a missing or failed geo layer
/// degrades the correction, it never aborts the chart.
pub fn compute_chart_with(
    input: &BirthInput,
    authority: Option<&dyn CalendarAuthority>,
) -> Result<Chart, ChartError> {
    let solar_time = resolve_solar_time(input)?;

    let (four_pillars, path) = derive_four_pillars_with(solar_time.corrected, authority);
    let (luck_direction, luck_pillars) = compute_luck_pillars(
        four_pillars.year.stem,
        four_pillars.month.stem,
        four_pillars.month.branch,
        input.gender,
        solar_time.corrected.date(),
    );
    let interactions = analyze_interactions(&four_pillars);
    let markers = annotate_markers(&four_pillars);

    Ok(Chart {
        four_pillars,
        luck_direction,
        luck_pillars,
        interactions,
        markers,
        solar_time,
        path,
    })
}

fn resolve_solar_time(input: &BirthInput) -> Result<SolarTimeResult, ChartError> {
    match (&input.timezone_id, input.coordinates) {
        (Some(tz), Some(coords)) => Ok(correct_solar_time(
            &input.local_civil_timestamp,
            Some(tz.as_str()),
            coords.longitude,
        )?),
        _ => Ok(unapplied(&input.local_civil_timestamp)?),
    }
}
