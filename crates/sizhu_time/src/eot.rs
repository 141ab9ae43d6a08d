//! Equation of time: the difference between apparent and mean solar time.
//!
//! Uses the Spencer (1971) Fourier fit over the day-of-year angle. The fit
//! is smooth with a one-year period and amplitude about ±16 minutes; its
//! error against apparent solar time stays under ~0.6 minutes, well inside
//! the ±1 day drift already accepted by the fixed solar-term table.

use std::f64::consts::PI;

/// Equation of time in minutes for a 1-based day of year.
///
/// Positive values mean apparent solar time runs ahead of mean time.
pub fn equation_of_time_minutes(day_of_year: u32) -> f64 {
    // Fractional year angle in radians. 365.0 keeps the fit's calibration;
    // the leap-day shift is far below the fit's own error.
    let b = 2.0 * PI * (day_of_year as f64 - 1.0) / 365.0;
    229.18
        * (0.000075 + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amplitude_bounded() {
        for doy in 1..=366 {
            let eot = equation_of_time_minutes(doy);
            assert!(eot.abs() < 17.0, "day {doy}: {eot}");
        }
    }

    #[test]
    fn early_february_minimum() {
        // Mid-February dip: roughly -14 minutes.
        let eot = equation_of_time_minutes(42);
        assert!(eot < -13.0 && eot > -15.5, "got {eot}");
    }

    #[test]
    fn early_november_maximum() {
        // Early-November peak: roughly +16 minutes.
        let eot = equation_of_time_minutes(307);
        assert!(eot > 15.0 && eot < 17.0, "got {eot}");
    }

    #[test]
    fn near_zero_crossings() {
        // The curve crosses zero around mid-April and early September.
        assert!(equation_of_time_minutes(105).abs() < 1.5);
        assert!(equation_of_time_minutes(244).abs() < 1.5);
    }

    #[test]
    fn mid_january_value() {
        // 1990-01-15 is day 15: about -9 minutes.
        let eot = equation_of_time_minutes(15);
        assert!(eot < -8.0 && eot > -10.5, "got {eot}");
    }
}
