//! Month and weekday label tables used when rendering a calendar.

use crate::date::Weekday;

/// Display labels for months and weekdays.
///
/// Labels are passed through to the grid as-is; no locale computation happens
/// here. The weekday table is stored Monday-first to match [`Weekday`]
/// ordering, independent of which day starts the displayed week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarLocale {
    /// Month names indexed January through December.
    pub month_names: [&'static str; 12],
    /// Short weekday labels stored Monday-first.
    pub weekday_labels: [&'static str; 7],
    /// First day of the week shown in the grid.
    pub first_day_of_week: Weekday,
}

impl CalendarLocale {
    /// English month names and three-letter weekday labels, Monday-first.
    pub fn english() -> Self {
        Self {
            month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            weekday_labels: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            first_day_of_week: Weekday::Monday,
        }
    }

    /// Thai month names and narrow weekday labels, Sunday-first.
    pub fn thai() -> Self {
        Self {
            month_names: [
                "มกราคม",
                "กุมภาพันธ์",
                "มีนาคม",
                "เมษายน",
                "พฤษภาคม",
                "มิถุนายน",
                "กรกฎาคม",
                "สิงหาคม",
                "กันยายน",
                "ตุลาคม",
                "พฤศจิกายน",
                "ธันวาคม",
            ],
            weekday_labels: ["จ", "อ", "พ", "พฤ", "ศ", "ส", "อา"],
            first_day_of_week: Weekday::Sunday,
        }
    }

    /// Returns the name for a month, clamping out-of-range values to 1-12.
    pub fn month_name(&self, month: u8) -> &'static str {
        let index = usize::from(month.clamp(1, 12)) - 1;
        self.month_names[index]
    }

    /// Returns the label for a weekday.
    pub fn weekday_label(&self, weekday: Weekday) -> &'static str {
        self.weekday_labels[weekday.index_from_monday() as usize]
    }
}

impl Default for CalendarLocale {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english_monday_first() {
        let locale = CalendarLocale::default();
        assert_eq!(locale.month_name(1), "January");
        assert_eq!(locale.weekday_label(Weekday::Monday), "Mon");
        assert_eq!(locale.first_day_of_week, Weekday::Monday);
    }

    #[test]
    fn thai_labels_follow_the_override_table() {
        let locale = CalendarLocale::thai();
        assert_eq!(locale.month_name(1), "มกราคม");
        assert_eq!(locale.month_name(6), "มิถุนายน");
        assert_eq!(locale.month_name(11), "พฤศจิกายน");
        assert_eq!(locale.weekday_label(Weekday::Sunday), "อา");
        assert_eq!(locale.weekday_label(Weekday::Thursday), "พฤ");
        assert_eq!(locale.first_day_of_week, Weekday::Sunday);
    }

    #[test]
    fn month_name_clamps_out_of_range_values() {
        let locale = CalendarLocale::english();
        assert_eq!(locale.month_name(0), "January");
        assert_eq!(locale.month_name(13), "December");
    }
}
