// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time and date text for a card.

use crate::config::{DisplayConfig, HourCycle};
use crate::zone::ResolvedFields;
use chrono::Weekday;

/// Full English weekday name.
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Time text, e.g. `"01:05 PM"` or `"13:05:09"`.
pub fn time_text(fields: &ResolvedFields, config: &DisplayConfig) -> String {
    let hour = match config.hour_cycle {
        HourCycle::H24 => fields.hour(),
        HourCycle::H12 => match fields.hour() % 12 {
            0 => 12,
            h => h,
        },
    };
    let mut out = format!("{hour:02}:{:02}", fields.minute());
    if config.show_seconds {
        out.push_str(&format!(":{:02}", fields.second()));
    }
    if config.hour_cycle == HourCycle::H12 {
        out.push_str(if fields.hour() < 12 { " AM" } else { " PM" });
    }
    out
}

/// Date text, e.g. `"Monday, January 15"`.
pub fn date_text(fields: &ResolvedFields) -> String {
    format!(
        "{}, {} {}",
        weekday_name(fields.weekday()),
        fields.month().name(),
        fields.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    fn at(hour: u32, minute: u32, second: u32) -> ResolvedFields {
        ResolvedFields::from_parts(2024, Month::January, 15, Weekday::Mon, hour, minute, second)
            .unwrap()
    }

    #[test]
    fn twelve_hour_clock() {
        let config = DisplayConfig::default();
        assert_eq!(time_text(&at(0, 5, 0), &config), "12:05 AM");
        assert_eq!(time_text(&at(9, 30, 0), &config), "09:30 AM");
        assert_eq!(time_text(&at(12, 0, 0), &config), "12:00 PM");
        assert_eq!(time_text(&at(13, 5, 0), &config), "01:05 PM");
        assert_eq!(time_text(&at(23, 59, 0), &config), "11:59 PM");
    }

    #[test]
    fn twenty_four_hour_clock_with_seconds() {
        let config = DisplayConfig::default()
            .with_hour_cycle(HourCycle::H24)
            .with_seconds(true);
        assert_eq!(time_text(&at(0, 0, 0), &config), "00:00:00");
        assert_eq!(time_text(&at(13, 5, 9), &config), "13:05:09");
    }

    #[test]
    fn twelve_hour_with_seconds() {
        let config = DisplayConfig::default().with_seconds(true);
        assert_eq!(time_text(&at(18, 0, 42), &config), "06:00:42 PM");
    }

    #[test]
    fn date() {
        assert_eq!(date_text(&at(8, 0, 0)), "Monday, January 15");
    }
}
