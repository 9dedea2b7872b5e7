// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Display configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the hour is written in a card's time text.
///
/// Only affects rendering; resolution and visual mapping always use the
/// 24-hour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HourCycle {
    /// `01:05 PM`
    #[default]
    H12,
    /// `13:05`
    H24,
}

/// Options the presentation layer passes to the [`ClockBoard`](crate::ClockBoard).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    pub hour_cycle: HourCycle,
    /// Append `:SS` to the time text.
    pub show_seconds: bool,
    /// Suggested period of the external tick timer, in milliseconds.
    pub tick_interval_ms: u64,
    /// Text shown in place of the time when a card's zone fails to resolve.
    pub placeholder: String,
}

impl DisplayConfig {
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;
    pub const DEFAULT_PLACEHOLDER: &'static str = "—";

    pub fn with_hour_cycle(mut self, hour_cycle: HourCycle) -> Self {
        self.hour_cycle = hour_cycle;
        self
    }

    pub fn with_seconds(mut self, show_seconds: bool) -> Self {
        self.show_seconds = show_seconds;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hour_cycle: HourCycle::default(),
            show_seconds: false,
            tick_interval_ms: Self::DEFAULT_TICK_INTERVAL_MS,
            placeholder: Self::DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.hour_cycle, HourCycle::H12);
        assert!(!config.show_seconds);
        assert_eq!(config.tick_interval_ms, 1_000);
        assert_eq!(config.placeholder, "—");
    }

    #[test]
    fn builders() {
        let config = DisplayConfig::default()
            .with_hour_cycle(HourCycle::H24)
            .with_seconds(true);
        assert_eq!(config.hour_cycle, HourCycle::H24);
        assert!(config.show_seconds);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: DisplayConfig = serde_json::from_str(r#"{"hour_cycle":"h24"}"#).unwrap();
        assert_eq!(config.hour_cycle, HourCycle::H24);
        assert_eq!(config.tick_interval_ms, 1_000);
        assert_eq!(config.placeholder, "—");
    }
}
