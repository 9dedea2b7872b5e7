// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instants and tick sources.
//!
//! The engine never reads the system clock on its own. Every computation
//! takes an instant supplied by the caller, either directly or through a
//! [`TickSource`] injected into the [`ClockBoard`](crate::ClockBoard).
//!
//! Anything that can be pinned to a UTC timestamp implements
//! [`TimeInstant`]; the resolver only ever looks at that UTC view.

use chrono::{DateTime, FixedOffset, Utc};
use std::time::SystemTime;

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for types that represent an absolute point in time.
///
/// chrono's `DateTime` has an inherent `to_utc()` returning `DateTime<Utc>`
/// that shadows this method under dot syntax. Call it as
/// `TimeInstant::to_utc(&dt)` to get the `Option` form on a concrete
/// `DateTime`.
pub trait TimeInstant {
    /// Convert this instant to a UTC `DateTime`.
    ///
    /// Returns `None` when the value falls outside chrono's representable
    /// range.
    fn to_utc(&self) -> Option<DateTime<Utc>>;
}

impl TimeInstant for DateTime<Utc> {
    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Some(*self)
    }
}

impl TimeInstant for DateTime<FixedOffset> {
    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Some(self.with_timezone(&Utc))
    }
}

impl TimeInstant for SystemTime {
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        let (secs, nanos) = match self.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(after) => (i64::try_from(after.as_secs()).ok()?, after.subsec_nanos()),
            Err(before) => {
                let before = before.duration();
                let secs = i64::try_from(before.as_secs()).ok()?;
                match before.subsec_nanos() {
                    0 => (-secs, 0),
                    n => (-secs - 1, 1_000_000_000 - n),
                }
            }
        };
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }
}

impl<T: TimeInstant + ?Sized> TimeInstant for &T {
    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        (**self).to_utc()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tick sources
// ═══════════════════════════════════════════════════════════════════════════

/// Supplies the instant for the next tick.
///
/// Implementations decide where "now" comes from; the engine only consumes
/// the returned value.
pub trait TickSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the operating system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TickSource for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant. Useful for tests and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Fixed clock at `secs` seconds after the Unix epoch.
    pub fn from_timestamp(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(Self)
    }
}

impl TickSource for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<T: TickSource + ?Sized> TickSource for &T {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
