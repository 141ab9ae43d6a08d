//! Fixed solar-term (jie) date table and boundary searches.
//!
//! The 12 section terms divide the solar year into the 12 chart months,
//! starting at LiChun (start of spring, ~Feb 4). The table pins each term
//! to a fixed civil date; real term instants drift about ±1 day around
//! these dates from year to year. The approximation only matters for
//! births within a day of a boundary; a caller needing astronomical
//! precision can route around it via the engine's calendar-authority seam.

use chrono::{Datelike, NaiveDate};

/// One section term: fixed (civil month, civil day) and the solar-month
/// index it opens (0 = the Yin month opened by LiChun).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jie {
    pub name: &'static str,
    pub month: u32,
    pub day: u32,
    pub solar_month: u8,
}

/// The 12 section terms in solar-year order.
pub const JIE_TABLE: [Jie; 12] = [
    Jie { name: "LiChun", month: 2, day: 4, solar_month: 0 },
    Jie { name: "JingZhe", month: 3, day: 6, solar_month: 1 },
    Jie { name: "QingMing", month: 4, day: 5, solar_month: 2 },
    Jie { name: "LiXia", month: 5, day: 6, solar_month: 3 },
    Jie { name: "MangZhong", month: 6, day: 6, solar_month: 4 },
    Jie { name: "XiaoShu", month: 7, day: 7, solar_month: 5 },
    Jie { name: "LiQiu", month: 8, day: 8, solar_month: 6 },
    Jie { name: "BaiLu", month: 9, day: 8, solar_month: 7 },
    Jie { name: "HanLu", month: 10, day: 8, solar_month: 8 },
    Jie { name: "LiDong", month: 11, day: 7, solar_month: 9 },
    Jie { name: "DaXue", month: 12, day: 7, solar_month: 10 },
    Jie { name: "XiaoHan", month: 1, day: 6, solar_month: 11 },
];

/// Civil date of a term within a given civil year.
///
/// The fixed (month, day) pairs are always valid dates, so the construction
/// cannot fail.
fn jie_date(civil_year: i32, jie: &Jie) -> NaiveDate {
    NaiveDate::from_ymd_opt(civil_year, jie.month, jie.day)
        .unwrap_or_else(|| unreachable!("fixed jie dates are valid for every year"))
}

/// LiChun date of a civil year.
pub fn lichun(civil_year: i32) -> NaiveDate {
    jie_date(civil_year, &JIE_TABLE[0])
}

/// Solar year containing a date: the civil year, minus one before LiChun.
///
/// The year pillar switches here, not at Jan 1 — a January birth belongs
/// to the previous year's pillar.
pub fn solar_year(date: NaiveDate) -> i32 {
    if date < lichun(date.year()) {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Solar-month index for a date: 0 for the Yin month opened by LiChun
/// through 11 for the Chou month opened by XiaoHan.
///
/// This is the ordering the five-tiger month-stem rule counts in; it is
/// deliberately not the civil-month ordering.
pub fn solar_month_index(date: NaiveDate) -> u8 {
    // The governing term is the latest jie date <= `date`. Checking the
    // surrounding civil years covers the Jan/Feb wrap.
    let mut best: Option<(NaiveDate, u8)> = None;
    for y in [date.year() - 1, date.year()] {
        for jie in &JIE_TABLE {
            let d = jie_date(y, jie);
            if d <= date && best.is_none_or(|(bd, _)| d > bd) {
                best = Some((d, jie.solar_month));
            }
        }
    }
    // A jie date <= `date` always exists in the scanned window.
    best.map(|(_, m)| m).unwrap_or(11)
}

/// The next term boundary strictly after `date` (forward) or the latest
/// boundary at or before `date` (backward).
pub fn nearest_term(date: NaiveDate, forward: bool) -> NaiveDate {
    let mut best: Option<NaiveDate> = None;
    for y in [date.year() - 1, date.year(), date.year() + 1] {
        for jie in &JIE_TABLE {
            let d = jie_date(y, jie);
            if forward {
                if d > date && best.is_none_or(|bd| d < bd) {
                    best = Some(d);
                }
            } else if d <= date && best.is_none_or(|bd| d > bd) {
                best = Some(d);
            }
        }
    }
    // The three-year window always contains a boundary on either side.
    best.unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn table_has_twelve_terms() {
        assert_eq!(JIE_TABLE.len(), 12);
        for (i, jie) in JIE_TABLE.iter().enumerate() {
            assert_eq!(jie.solar_month as usize, i);
        }
    }

    #[test]
    fn solar_year_switches_at_lichun() {
        assert_eq!(solar_year(d(1990, 2, 3)), 1989);
        assert_eq!(solar_year(d(1990, 2, 4)), 1990);
        assert_eq!(solar_year(d(1990, 1, 15)), 1989);
        assert_eq!(solar_year(d(1990, 12, 31)), 1990);
    }

    #[test]
    fn solar_month_around_lichun() {
        // Feb 3 still sits in the Chou month; Feb 4 opens the Yin month.
        assert_eq!(solar_month_index(d(1990, 2, 3)), 11);
        assert_eq!(solar_month_index(d(1990, 2, 4)), 0);
        assert_eq!(solar_month_index(d(1990, 2, 5)), 0);
    }

    #[test]
    fn solar_month_mid_january() {
        // Jan 15 is past XiaoHan (Jan 6): the Chou month.
        assert_eq!(solar_month_index(d(1990, 1, 15)), 11);
        // Jan 5 is still in the Zi month of the previous solar year.
        assert_eq!(solar_month_index(d(1990, 1, 5)), 10);
    }

    #[test]
    fn solar_month_summer() {
        assert_eq!(solar_month_index(d(2000, 7, 10)), 5);
        assert_eq!(solar_month_index(d(2000, 7, 6)), 4);
    }

    #[test]
    fn nearest_term_forward() {
        assert_eq!(nearest_term(d(1990, 1, 15), true), d(1990, 2, 4));
        // A date on a boundary looks strictly ahead.
        assert_eq!(nearest_term(d(1990, 2, 4), true), d(1990, 3, 6));
    }

    #[test]
    fn nearest_term_backward() {
        assert_eq!(nearest_term(d(1990, 1, 15), false), d(1990, 1, 6));
        // A date on a boundary is its own backward boundary.
        assert_eq!(nearest_term(d(1990, 2, 4), false), d(1990, 2, 4));
    }

    #[test]
    fn nearest_term_year_wrap() {
        assert_eq!(nearest_term(d(1989, 12, 20), true), d(1990, 1, 6));
        assert_eq!(nearest_term(d(1990, 1, 2), false), d(1989, 12, 7));
    }
}
