// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! World-clock primitives
//!
//! This crate turns an absolute instant and an IANA timezone into everything a
//! world-clock card displays: local wall-clock fields, formatted time and date,
//! the share of the local day elapsed, a day/night flag, the vertical position
//! of the sun or moon and the sky band the hour falls in.
//!
//! # Core types
//!
//! - [`TimeZoneId`] — IANA zone identifier, checked when resolved.
//! - [`ResolvedFields`] — wall-clock fields of an instant in one zone.
//! - [`VisualState`] — day progress, night flag, body position, sky tags.
//! - [`TimeInstant`] — anything that can be pinned to a UTC timestamp.
//! - [`ClockBoard`] — location list + catalog, rendered once per tick into [`Card`]s.
//!
//! # Pipeline
//!
//! ```text
//! tick source ─► instant ─► resolve(instant, zone) ─► ResolvedFields ─► map_visual_state ─► VisualState
//! ```
//!
//! Both stages are pure: the same inputs always give the same outputs, and
//! nothing in the crate owns a timer.
//!
//! # Sky bands
//!
//! | Fractional hour | Period | [`SkyGradient`] / [`ProgressBarColor`] |
//! |-----------------|--------|----------------------------------------|
//! | `t < 6` | night | `Night` |
//! | `6 ≤ t < 8` | dawn | `Dawn` |
//! | `8 ≤ t < 16` | day | `Day` |
//! | `16 ≤ t < 18` | dusk | `Dusk` |
//! | `t ≥ 18` | night | `Night` |
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use skydial::{map_visual_state, resolve, SkyGradient, TimeZoneId};
//!
//! let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
//! let fields = resolve(&instant, &TimeZoneId::new("Europe/London")).unwrap();
//! let sky = map_visual_state(&fields);
//!
//! assert_eq!(sky.day_progress_percent, 50.0);
//! assert_eq!(sky.sky_gradient, SkyGradient::Day);
//! assert!(!sky.is_night);
//! ```

mod board;
mod catalog;
mod config;
mod error;
mod format;
mod instant;
mod locations;
mod visual;
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use board::{Card, CardFace, ClockBoard};
pub use catalog::{Catalog, CatalogEntry};
pub use config::{DisplayConfig, HourCycle};
pub use error::{ClockError, Result};
pub use format::{date_text, time_text, weekday_name};
pub use instant::{FixedClock, SystemClock, TickSource, TimeInstant};
pub use locations::{Location, LocationList};
pub use visual::{
    band_for, map_visual_state, map_wall_clock, CelestialBody, DayPeriod, ProgressBarColor,
    SkyBand, SkyGradient, VisualState, BODY_POSITION_MAX, BODY_POSITION_MIN, DAY_START_HOUR,
    NIGHT_START_HOUR, SKY_BANDS,
};
pub use zone::{resolve, resolve_in, ResolvedFields, TimeZoneId, MINUTES_PER_DAY};
