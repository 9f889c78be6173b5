//! Buddhist Era year conversion.
//!
//! The Buddhist Era used in Thailand runs 543 years ahead of the Gregorian
//! calendar. The conversion is a fixed shift of the year component; month and
//! day are unaffected, and no new-year transition is modeled.

use crate::date::CalendarDate;

/// Offset between Buddhist Era and Gregorian years.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Returns the Buddhist Era year for a date.
///
/// # Examples
///
/// ```
/// use tessera_buddhist_calendar::{date::CalendarDate, era::to_buddhist_year};
///
/// let date = CalendarDate::new(2025, 6, 12).expect("valid date");
/// assert_eq!(to_buddhist_year(date), 2568);
/// ```
pub fn to_buddhist_year(date: CalendarDate) -> i32 {
    date.year() + BUDDHIST_ERA_OFFSET
}

/// Returns the Gregorian year for a Buddhist Era year.
///
/// Accepts any year value; the caller is responsible for deciding whether the
/// input is meaningful.
pub fn to_gregorian_year(buddhist_year: i32) -> i32 {
    buddhist_year - BUDDHIST_ERA_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("valid test date")
    }

    #[test]
    fn buddhist_year_is_gregorian_plus_543() {
        assert_eq!(to_buddhist_year(date(2025, 1, 1)), 2568);
        assert_eq!(to_buddhist_year(date(2024, 1, 1)), 2567);
        assert_eq!(to_buddhist_year(date(2000, 1, 1)), 2543);
        assert_eq!(to_buddhist_year(date(1957, 1, 1)), 2500);
        assert_eq!(to_buddhist_year(date(1900, 1, 1)), 2443);
    }

    #[test]
    fn gregorian_year_is_buddhist_minus_543() {
        assert_eq!(to_gregorian_year(2568), 2025);
        assert_eq!(to_gregorian_year(2567), 2024);
        assert_eq!(to_gregorian_year(2543), 2000);
        assert_eq!(to_gregorian_year(2500), 1957);
        assert_eq!(to_gregorian_year(2443), 1900);
    }

    #[test]
    fn conversions_round_trip() {
        for (year, month, day) in [(2025, 1, 1), (2000, 7, 15), (1990, 12, 31)] {
            let input = date(year, month, day);
            assert_eq!(to_gregorian_year(to_buddhist_year(input)), input.year());
        }
    }

    #[test]
    fn offset_is_constant_across_years() {
        for year in [1900, 1950, 2000, 2025, 2050, 2100] {
            let converted = to_buddhist_year(date(year, 6, 15));
            assert_eq!(converted - year, BUDDHIST_ERA_OFFSET);
        }
    }

    #[test]
    fn month_and_day_do_not_affect_the_year() {
        assert_eq!(to_buddhist_year(date(2025, 1, 1)), 2568);
        assert_eq!(to_buddhist_year(date(2025, 12, 31)), 2568);
        assert_eq!(to_buddhist_year(date(2024, 2, 29)), 2567);
        assert_eq!(to_buddhist_year(date(2023, 12, 31)), 2566);
    }

    #[test]
    fn today_converts_like_any_other_date() {
        let today = CalendarDate::today();
        assert_eq!(to_buddhist_year(today), today.year() + 543);
    }

    #[test]
    fn negative_and_far_future_years_pass_through() {
        assert_eq!(to_gregorian_year(100), -443);
        assert_eq!(to_gregorian_year(5000), 4457);
    }
}
