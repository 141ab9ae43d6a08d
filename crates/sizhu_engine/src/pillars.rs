//! Derivation of the four natal pillars from a (corrected) timestamp.
//!
//! Year and day pillars come from sexagenary-cycle arithmetic; the month
//! and hour stems come from the five-tiger and five-rat derivation rules.
//! The month counts in solar-term order (Yin month first), which is not
//! the civil-month order.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use sizhu_base::{ALL_BRANCHES, ALL_STEMS, Branch, Stem};
use sizhu_time::{solar_month_index, solar_year};

use crate::error::AuthorityError;
use crate::types::{ComputationPath, FourPillars, Pillar};

/// Reference year of the stem/branch cycles: 1984 opened a Jia-Zi year.
pub const YEAR_EPOCH: i32 = 1984;

/// Epoch of the 60-day cycle: 1949-10-01 was a Jia-Zi day.
///
/// Correctness-critical. Validated against independent almanac dates in
/// the golden tests (2000-01-01 = Wu-Wu, 1990-01-15 = Geng-Chen) rather
/// than back-solved from a single reference.
pub fn day_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1949, 10, 1)
        .unwrap_or_else(|| unreachable!("the day-cycle epoch is a valid date"))
}

/// Source of the 60-day cycle index for the day pillar.
///
/// The engine ships [`SexagenaryArithmetic`]; a more precise external
/// calendar authority can be plugged in and its unavailability degrades to
/// the internal arithmetic with the chart flagged
/// [`ComputationPath::Approximate`].
pub trait CalendarAuthority {
    /// 0-based position of `date` in the 60-day cycle (0 = Jia-Zi).
    fn day_cycle_index(&self, date: NaiveDate) -> Result<u8, AuthorityError>;
}

/// Built-in day-cycle computation from the fixed epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SexagenaryArithmetic;

impl CalendarAuthority for SexagenaryArithmetic {
    fn day_cycle_index(&self, date: NaiveDate) -> Result<u8, AuthorityError> {
        let days = (date - day_epoch()).num_days();
        Ok(days.rem_euclid(60) as u8)
    }
}

/// Five-tiger rule: stem of the Yin month for a year-stem group.
pub const fn five_tiger_first_stem(year_stem: Stem) -> Stem {
    match year_stem {
        Stem::Jia | Stem::Ji => Stem::Bing,
        Stem::Yi | Stem::Geng => Stem::Wu,
        Stem::Bing | Stem::Xin => Stem::Geng,
        Stem::Ding | Stem::Ren => Stem::Ren,
        Stem::Wu | Stem::Gui => Stem::Jia,
    }
}

/// Five-rat rule: stem of the Zi hour for a day-stem group.
pub const fn five_rat_first_stem(day_stem: Stem) -> Stem {
    match day_stem {
        Stem::Jia | Stem::Ji => Stem::Jia,
        Stem::Yi | Stem::Geng => Stem::Bing,
        Stem::Bing | Stem::Xin => Stem::Wu,
        Stem::Ding | Stem::Ren => Stem::Geng,
        Stem::Wu | Stem::Gui => Stem::Ren,
    }
}

/// Stem and branch of a solar year.
///
/// `rem_euclid` keeps both indices non-negative for years before the
/// reference.
pub fn year_stem_branch(solar_year: i32) -> (Stem, Branch) {
    let stem = ALL_STEMS[(solar_year - YEAR_EPOCH).rem_euclid(10) as usize];
    let branch = ALL_BRANCHES[(solar_year - YEAR_EPOCH).rem_euclid(12) as usize];
    (stem, branch)
}

/// Derive the four pillars using the built-in sexagenary arithmetic.
pub fn derive_four_pillars(timestamp: NaiveDateTime) -> FourPillars {
    let (pillars, _) = derive_four_pillars_with(timestamp, None);
    pillars
}

/// Derive the four pillars, preferring an external calendar authority for
/// the day cycle when one is supplied and available.
pub fn derive_four_pillars_with(
    timestamp: NaiveDateTime,
    authority: Option<&dyn CalendarAuthority>,
) -> (FourPillars, ComputationPath) {
    let date = timestamp.date();

    // Year pillar follows the solar year (LiChun boundary).
    let (year_stem, year_branch) = year_stem_branch(solar_year(date));

    // Month: branch from the solar-term month, stem from the five-tiger
    // rule offset by the month's position in solar-term order.
    let month_idx = solar_month_index(date);
    let month_branch = Branch::Yin.add(month_idx as i32);
    let month_stem = five_tiger_first_stem(year_stem).add(month_idx as i32);

    // Day: 60-cycle index, external authority first when present.
    let (cycle, path) = match authority {
        Some(auth) => match auth.day_cycle_index(date) {
            Ok(idx) => (idx, ComputationPath::Precise),
            // Recoverable: degrade to the internal arithmetic.
            Err(AuthorityError::Unavailable(_)) => {
                (internal_day_cycle(date), ComputationPath::Approximate)
            }
        },
        None => (internal_day_cycle(date), ComputationPath::Approximate),
    };
    let day_stem = ALL_STEMS[(cycle % 10) as usize];
    let day_branch = ALL_BRANCHES[(cycle % 12) as usize];

    // Hour: two-hour window branch, five-rat stem keyed on the day stem.
    let hour_branch = Branch::from_civil_hour(timestamp.hour());
    let hour_stem = five_rat_first_stem(day_stem).add(hour_branch.index() as i32);

    let dm = day_stem;
    let pillars = FourPillars {
        year: Pillar::new(year_stem, year_branch, dm),
        month: Pillar::new(month_stem, month_branch, dm),
        day: Pillar::new(day_stem, day_branch, dm),
        hour: Pillar::new(hour_stem, hour_branch, dm),
    };
    (pillars, path)
}

fn internal_day_cycle(date: NaiveDate) -> u8 {
    // Infallible by construction.
    match SexagenaryArithmetic.day_cycle_index(date) {
        Ok(idx) => idx,
        Err(_) => unreachable!("internal day-cycle arithmetic cannot fail"),
    }
}
