//! Calendar date types and Gregorian day arithmetic.

use std::time::{SystemTime, UNIX_EPOCH};

/// Days of the week in Monday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    pub(crate) fn index_from_monday(self) -> i32 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    pub(crate) fn from_monday_index(index: i32) -> Self {
        match index.rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }
}

/// A calendar date expressed as year, month, and day.
///
/// Dates order chronologically, so range endpoints can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a calendar date if the values are valid.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the day of the week this date falls on.
    pub fn weekday(&self) -> Weekday {
        let days = days_from_civil(self.year, self.month, self.day);
        Weekday::from_monday_index(((days + 3).rem_euclid(7)) as i32)
    }

    /// Returns the current date in UTC.
    pub fn today() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let days = (duration.as_secs() / 86_400) as i64;
        let (year, month, day) = civil_from_days(days);
        CalendarDate::new(year, month, day)
            .unwrap_or_else(|| CalendarDate::new_unchecked(1970, 1, 1))
    }

    pub(crate) fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// A year and month pair used for month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair if the values are valid.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the month containing the given date.
    pub fn from_date(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the date for this month at the provided day.
    pub fn to_date(&self, day: u8) -> Option<CalendarDate> {
        CalendarDate::new(self.year, self.month, day)
    }

    /// Adds or subtracts months, adjusting the year as needed.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u8;
        Self { year, month }
    }

    pub(crate) fn new_unchecked(year: i32, month: u8) -> Self {
        Self { year, month }
    }
}

/// An inclusive date range, possibly still waiting for its end date.
///
/// A range with no end covers only its start date; this is the in-progress
/// shape produced while a user picks the second date of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: CalendarDate,
    end: Option<CalendarDate>,
}

impl DateRange {
    /// Creates a range from a start date and an optional inclusive end.
    ///
    /// Endpoints are swapped when the end precedes the start.
    pub fn new(start: CalendarDate, end: Option<CalendarDate>) -> Self {
        match end {
            Some(end) if end < start => Self {
                start: end,
                end: Some(start),
            },
            _ => Self { start, end },
        }
    }

    /// Creates a range with only its start date decided.
    pub fn starting_at(start: CalendarDate) -> Self {
        Self { start, end: None }
    }

    /// Returns the start date.
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the inclusive end date, if decided.
    pub fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    /// Returns true when both endpoints are decided.
    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    /// Returns true when the date lies inside the range, endpoints included.
    pub fn contains(&self, date: CalendarDate) -> bool {
        match self.end {
            Some(end) => self.start <= date && date <= end,
            None => self.start == date,
        }
    }
}

pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub(crate) fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let mut y = year;
    let m = month as i32;
    let d = day as i32;
    y -= if m <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = m + if m > 2 { -3 } else { 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    (era * 146_097 + doe - 719_468) as i64
}

pub(crate) fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("valid test date")
    }

    #[test]
    fn rejects_invalid_dates() {
        assert!(CalendarDate::new(2025, 0, 1).is_none());
        assert!(CalendarDate::new(2025, 13, 1).is_none());
        assert!(CalendarDate::new(2025, 1, 0).is_none());
        assert!(CalendarDate::new(2025, 4, 31).is_none());
        assert!(CalendarDate::new(2023, 2, 29).is_none());
        assert!(CalendarDate::new(2024, 2, 29).is_some());
    }

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn dates_order_chronologically() {
        assert!(date(2025, 1, 31) < date(2025, 2, 1));
        assert!(date(2025, 12, 31) < date(2026, 1, 1));
        assert!(date(2025, 6, 12) < date(2025, 6, 13));
    }

    #[test]
    fn weekday_of_known_dates() {
        assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
        assert_eq!(date(2025, 6, 12).weekday(), Weekday::Thursday);
    }

    #[test]
    fn add_months_carries_the_year() {
        let month = YearMonth::new(2025, 11).expect("valid month");
        assert_eq!(month.add_months(3), YearMonth::new_unchecked(2026, 2));
        assert_eq!(month.add_months(-11), YearMonth::new_unchecked(2024, 12));
        assert_eq!(month.add_months(24), YearMonth::new_unchecked(2027, 11));
    }

    #[test]
    fn to_date_validates_the_day() {
        let month = YearMonth::new(2025, 2).expect("valid month");
        assert!(month.to_date(28).is_some());
        assert!(month.to_date(29).is_none());
    }

    #[test]
    fn range_contains_inclusive_endpoints() {
        let range = DateRange::new(date(2025, 6, 12), Some(date(2025, 7, 15)));
        assert!(range.contains(date(2025, 6, 12)));
        assert!(range.contains(date(2025, 7, 1)));
        assert!(range.contains(date(2025, 7, 15)));
        assert!(!range.contains(date(2025, 6, 11)));
        assert!(!range.contains(date(2025, 7, 16)));
    }

    #[test]
    fn open_range_contains_only_its_start() {
        let range = DateRange::starting_at(date(2025, 6, 12));
        assert!(!range.is_complete());
        assert!(range.contains(date(2025, 6, 12)));
        assert!(!range.contains(date(2025, 6, 13)));
    }

    #[test]
    fn inverted_endpoints_are_swapped() {
        let range = DateRange::new(date(2025, 7, 15), Some(date(2025, 6, 12)));
        assert_eq!(range.start(), date(2025, 6, 12));
        assert_eq!(range.end(), Some(date(2025, 7, 15)));
    }

    #[test]
    fn civil_day_count_round_trips() {
        for (year, month, day) in [(1970, 1, 1), (2000, 3, 1), (2024, 2, 29)] {
            let days = days_from_civil(year, month, day);
            assert_eq!(civil_from_days(days), (year, month, day));
        }
    }
}
