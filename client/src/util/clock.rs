//! Wall-clock reading and formatting for the `DateTime` widget.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const WEEKDAYS: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
const MONTHS: [&str; 12] = [
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
];

/// Placeholder shown before the browser clock is available.
pub const EMPTY_TIME: &str = "--:--:--";

/// Local date and time broken into display fields.
///
/// `month` is 0-based and `weekday` counts from Sunday = 0, matching the
/// browser `Date` API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockReading {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockReading {
    /// 24-hour `HH:MM:SS`.
    #[must_use]
    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Long form, e.g. `Sunday, October 18, 2026`.
    #[must_use]
    pub fn date_label(&self) -> String {
        let weekday = WEEKDAYS.get(self.weekday as usize).copied().unwrap_or("?");
        let month = MONTHS.get(self.month as usize).copied().unwrap_or("?");
        format!("{weekday}, {month} {}, {}", self.day, self.year)
    }

    /// Greeting for the hour of day.
    #[must_use]
    pub fn greeting(&self) -> &'static str {
        match self.hour {
            5..=11 => "Good morning",
            12..=17 => "Good afternoon",
            _ => "Good evening",
        }
    }
}

/// Read the browser's local clock.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn now() -> ClockReading {
    let date = js_sys::Date::new_0();
    ClockReading {
        year: date.get_full_year(),
        month: date.get_month(),
        day: date.get_date(),
        weekday: date.get_day(),
        hour: date.get_hours(),
        minute: date.get_minutes(),
        second: date.get_seconds(),
    }
}
