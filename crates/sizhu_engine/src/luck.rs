//! The luck cycle: eight decade-long pillars stepped from the month pillar.
//!
//! Direction comes from gender crossed with the year-stem polarity; the
//! first start age comes from the distance to the nearest solar-term
//! boundary at 3 days per year of age. Hidden stems of luck pillars are
//! classified against the month stem, not the day master — a deliberate
//! deviation from the natal pillars, kept from the source system.

use chrono::NaiveDate;

use sizhu_base::{Branch, Polarity, Stem};
use sizhu_time::nearest_term;

use crate::types::{Gender, LuckDirection, LuckPillar, Pillar};

/// Number of luck pillars produced for every chart.
pub const LUCK_PILLAR_COUNT: usize = 8;

/// Years of age per day of distance to the governing solar term.
const DAYS_PER_YEAR_OF_AGE: f64 = 3.0;

/// Stepping direction: forward for yang-year males and yin-year females,
/// reverse otherwise.
pub const fn luck_direction(gender: Gender, year_stem: Stem) -> LuckDirection {
    match (gender, year_stem.polarity()) {
        (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => LuckDirection::Forward,
        (Gender::Male, Polarity::Yin) | (Gender::Female, Polarity::Yang) => LuckDirection::Reverse,
    }
}

/// Age at which the first luck pillar begins.
///
/// Distance in days from birth to the governing term boundary — the next
/// one when stepping forward, the previous one when stepping in reverse —
/// converted at 3 days per year and rounded to the nearest year.
pub fn first_start_age(birth: NaiveDate, direction: LuckDirection) -> u8 {
    let term = nearest_term(birth, direction == LuckDirection::Forward);
    let days = (term - birth).num_days().unsigned_abs();
    (days as f64 / DAYS_PER_YEAR_OF_AGE).round() as u8
}

/// Compute the ordered luck pillars for a birth.
///
/// Exactly [`LUCK_PILLAR_COUNT`] entries, 1-indexed, each spanning ten
/// contiguous years of age. Step `n` moves the month pillar's stem and
/// branch `n` positions in the cycle direction, independently mod 10 and
/// mod 12.
pub fn compute_luck_pillars(
    year_stem: Stem,
    month_stem: Stem,
    month_branch: Branch,
    gender: Gender,
    birth: NaiveDate,
) -> (LuckDirection, Vec<LuckPillar>) {
    let direction = luck_direction(gender, year_stem);
    let base_age = first_start_age(birth, direction);

    let pillars = (1..=LUCK_PILLAR_COUNT as i32)
        .map(|n| {
            let step = direction.step() * n;
            let stem = month_stem.add(step);
            let branch = month_branch.add(step);
            let start_age = base_age + (n as u8 - 1) * 10;
            LuckPillar {
                index: n as u8,
                start_age,
                end_age: start_age + 9,
                pillar: Pillar::new(stem, branch, month_stem),
            }
        })
        .collect();
    (direction, pillars)
}
