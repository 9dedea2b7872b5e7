// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Visual state of a clock card.
//!
//! [`map_visual_state`] derives everything a card needs to draw its sky from
//! the resolved hour and minute:
//!
//! | Output | Rule |
//! |--------|------|
//! | day progress | `minute_of_day / 1440 × 100`, in `[0, 100)` |
//! | night flag | `hour < 6 ∨ hour ≥ 18` |
//! | body position | day progress clamped to `[10, 90]` |
//! | gradient, bar color | first row of [`SKY_BANDS`] containing `hour + minute / 60` |
//!
//! The clamp only keeps the sun or moon glyph inside the card; neither the
//! night flag nor the progress value is derived from the clamped number.

use crate::error::{check_range, Result};
use crate::zone::{elapsed_days, ResolvedFields};
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Lowest vertical position of the celestial body, in percent of the card.
pub const BODY_POSITION_MIN: f64 = 10.0;

/// Highest vertical position of the celestial body, in percent of the card.
pub const BODY_POSITION_MAX: f64 = 90.0;

/// First hour of daytime; hours before it are night.
pub const DAY_START_HOUR: u32 = 6;

/// First hour of night-time.
pub const NIGHT_START_HOUR: u32 = 18;

// ═══════════════════════════════════════════════════════════════════════════
// Tags
// ═══════════════════════════════════════════════════════════════════════════

/// Part of the day a band belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayPeriod {
    Night,
    Dawn,
    Day,
    Dusk,
}

impl DayPeriod {
    pub const fn label(self) -> &'static str {
        match self {
            DayPeriod::Night => "night",
            DayPeriod::Dawn => "dawn",
            DayPeriod::Day => "day",
            DayPeriod::Dusk => "dusk",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sky background gradient. Concrete colors belong to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SkyGradient {
    Night,
    Dawn,
    Day,
    Dusk,
}

/// Fill color of the day-progress bar, always paired with a [`SkyGradient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ProgressBarColor {
    Night,
    Dawn,
    Day,
    Dusk,
}

/// Glyph drawn in the sky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CelestialBody {
    Sun,
    Moon,
}

// ═══════════════════════════════════════════════════════════════════════════
// Band table
// ═══════════════════════════════════════════════════════════════════════════

/// One row of the sky band table: the half-open fractional-hour range
/// `[start, end)` and the tags it selects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyBand {
    pub start: f64,
    pub end: f64,
    pub period: DayPeriod,
    pub gradient: SkyGradient,
    pub bar_color: ProgressBarColor,
}

impl SkyBand {
    const fn new(start: f64, end: f64, period: DayPeriod) -> Self {
        let (gradient, bar_color) = match period {
            DayPeriod::Night => (SkyGradient::Night, ProgressBarColor::Night),
            DayPeriod::Dawn => (SkyGradient::Dawn, ProgressBarColor::Dawn),
            DayPeriod::Day => (SkyGradient::Day, ProgressBarColor::Day),
            DayPeriod::Dusk => (SkyGradient::Dusk, ProgressBarColor::Dusk),
        };
        Self {
            start,
            end,
            period,
            gradient,
            bar_color,
        }
    }

    /// `true` if `t` falls inside `[start, end)`.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t < self.end
    }
}

/// Ordered band table. The first row containing the fractional hour wins;
/// together the rows cover `[0, 24)` without overlap.
pub static SKY_BANDS: [SkyBand; 5] = [
    SkyBand::new(0.0, 6.0, DayPeriod::Night),
    SkyBand::new(6.0, 8.0, DayPeriod::Dawn),
    SkyBand::new(8.0, 16.0, DayPeriod::Day),
    SkyBand::new(16.0, 18.0, DayPeriod::Dusk),
    SkyBand::new(18.0, 24.0, DayPeriod::Night),
];

/// Band for a fractional hour.
///
/// Values below zero fall in the first row and values of 24 or more in the
/// last one, matching the open-ended `t < 6` and `t ≥ 18` rows.
pub fn band_for(t: f64) -> &'static SkyBand {
    SKY_BANDS
        .iter()
        .find(|band| band.contains(t))
        .unwrap_or(if t < SKY_BANDS[0].start {
            &SKY_BANDS[0]
        } else {
            &SKY_BANDS[SKY_BANDS.len() - 1]
        })
}

// ═══════════════════════════════════════════════════════════════════════════
// VisualState
// ═══════════════════════════════════════════════════════════════════════════

/// Everything a card needs to draw its sky and progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VisualState {
    /// Share of the local day elapsed, in `[0, 100)`.
    pub day_progress_percent: f64,
    pub is_night: bool,
    /// Vertical glyph position, in `[10, 90]`.
    pub body_position_percent: f64,
    pub period: DayPeriod,
    pub sky_gradient: SkyGradient,
    pub progress_bar_color: ProgressBarColor,
}

impl VisualState {
    /// Sun by day, moon by night.
    #[inline]
    pub fn body(&self) -> CelestialBody {
        if self.is_night {
            CelestialBody::Moon
        } else {
            CelestialBody::Sun
        }
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.1}% of day, body at {:.1}%)",
            self.period, self.day_progress_percent, self.body_position_percent
        )
    }
}

/// Map resolved wall-clock fields to the card's visual state.
///
/// Total over every [`ResolvedFields`] value.
pub fn map_visual_state(fields: &ResolvedFields) -> VisualState {
    map_minutes(fields.hour(), fields.minute())
}

/// Map a raw 24-hour wall-clock time.
///
/// Fails with [`ClockError::PreconditionViolation`](crate::ClockError::PreconditionViolation)
/// if `hour > 23` or `minute > 59`.
///
/// ```
/// use skydial::{map_wall_clock, SkyGradient};
///
/// let noon = map_wall_clock(12, 0).unwrap();
/// assert_eq!(noon.day_progress_percent, 50.0);
/// assert_eq!(noon.sky_gradient, SkyGradient::Day);
/// assert!(map_wall_clock(24, 0).is_err());
/// ```
pub fn map_wall_clock(hour: u32, minute: u32) -> Result<VisualState> {
    let hour = check_range("hour", hour, 23)?;
    let minute = check_range("minute", minute, 59)?;
    Ok(map_minutes(hour, minute))
}

fn map_minutes(hour: u32, minute: u32) -> VisualState {
    let day_progress_percent = elapsed_days(hour * 60 + minute).value() * 100.0;
    let body_position_percent = day_progress_percent.clamp(BODY_POSITION_MIN, BODY_POSITION_MAX);
    let is_night = !(DAY_START_HOUR..NIGHT_START_HOUR).contains(&hour);
    let band = band_for(hour as f64 + minute as f64 / 60.0);

    VisualState {
        day_progress_percent,
        is_night,
        body_position_percent,
        period: band.period,
        sky_gradient: band.gradient,
        progress_bar_color: band.bar_color,
    }
}
