use chrono::{DateTime, TimeZone, Utc};

// Deliberately a 365-day year; the figure is rounded to whole years anyway
// and leap days never move it by more than a few hundredths.
const MILLIS_PER_YEAR: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 365.0;

/// First day of professional software work, the origin for the experience
/// figure shown in the bio.
pub fn career_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2007, 7, 1, 0, 0, 0)
        .single()
        .expect("career start should be a valid timestamp")
}

/// Whole years of experience as of `now`, rounded to the nearest year.
///
/// Takes the current time as an explicit parameter so callers render from a
/// single clock read and tests don't need to fake the system clock. A `now`
/// before the start date clamps to zero.
pub fn years_of_experience(now: DateTime<Utc>) -> u32 {
    let elapsed_ms = now.signed_duration_since(career_start()).num_milliseconds() as f64;
    let years = (elapsed_ms / MILLIS_PER_YEAR).round();
    if years.is_sign_negative() {
        0
    } else {
        years as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_zero_years_on_start_date() {
        assert_eq!(years_of_experience(career_start()), 0);
    }

    #[test]
    fn test_seventeen_years_by_2024() {
        // 6210 elapsed days / 365 ≈ 17.01
        assert_eq!(years_of_experience(date(2024, 7, 1)), 17);
    }

    #[test]
    fn test_rounds_to_nearest_year() {
        // 184 days in is past the half-year mark, so it already reads 1
        assert_eq!(years_of_experience(date(2008, 1, 1)), 1);
        // 92 days in still reads 0
        assert_eq!(years_of_experience(date(2007, 10, 1)), 0);
    }

    #[test]
    fn test_clamps_before_start_date() {
        assert_eq!(years_of_experience(date(2000, 1, 1)), 0);
        assert_eq!(years_of_experience(date(2007, 6, 30)), 0);
    }

    #[test]
    fn test_formats_with_no_decimals() {
        assert_eq!(years_of_experience(date(2024, 7, 1)).to_string(), "17");
    }
}
