// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Zone time resolution.
//!
//! [`resolve`] turns an absolute instant and a [`TimeZoneId`] into the
//! wall-clock fields observed in that zone. Offsets and daylight-saving rules
//! come from the IANA database bundled with `chrono-tz`.
//!
//! The hour is always kept on the 24-hour clock. A 12-hour rendering is a
//! display concern (see [`HourCycle`](crate::HourCycle)) and is never fed
//! back into any computation.

use crate::error::{check_range, ClockError, Result};
use crate::instant::TimeInstant;
use chrono::{Datelike, Month, Timelike, Weekday};
use chrono_tz::Tz;
use qtty::Days;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

// ═══════════════════════════════════════════════════════════════════════════
// TimeZoneId
// ═══════════════════════════════════════════════════════════════════════════

/// An IANA-style timezone identifier such as `"Europe/London"`.
///
/// The identifier is stored as given; it is only checked when it is
/// resolved, so a list may hold a location whose zone is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TimeZoneId(String);

impl TimeZoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Look the identifier up in the zone database.
    ///
    /// Surrounding whitespace is not trimmed and the empty string is
    /// rejected; an unknown name never falls back to UTC.
    pub fn to_tz(&self) -> Result<Tz> {
        Tz::from_str(&self.0).map_err(|_| ClockError::InvalidTimeZone(self.0.clone()))
    }

    /// `true` if the identifier names a known zone.
    pub fn is_known(&self) -> bool {
        self.to_tz().is_ok()
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimeZoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TimeZoneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<Tz> for TimeZoneId {
    fn from(tz: Tz) -> Self {
        Self(tz.name().to_owned())
    }
}

impl AsRef<str> for TimeZoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ResolvedFields
// ═══════════════════════════════════════════════════════════════════════════

/// Wall-clock fields of an instant as observed in one timezone.
///
/// Every value is within range by construction: either it came out of
/// [`resolve`], or it passed [`ResolvedFields::from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ResolvedFields {
    year: i32,
    month: Month,
    day: u32,
    weekday: Weekday,
    hour: u32,
    minute: u32,
    second: u32,
}

impl ResolvedFields {
    /// Build fields from raw parts, rejecting anything out of range.
    ///
    /// Fails with [`ClockError::PreconditionViolation`] if `hour > 23`,
    /// `minute > 59`, `second > 59`, or `day` is not in `1..=31`.
    pub fn from_parts(
        year: i32,
        month: Month,
        day: u32,
        weekday: Weekday,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        if day == 0 {
            return Err(ClockError::PreconditionViolation {
                field: "day",
                value: day,
                max: 31,
            });
        }
        Ok(Self {
            year,
            month,
            day: check_range("day", day, 31)?,
            weekday,
            hour: check_range("hour", hour, 23)?,
            minute: check_range("minute", minute, 59)?,
            second: check_range("second", second, 59)?,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Day of the month, starting at 1.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Hour on the 24-hour clock (0–23).
    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u32 {
        self.second
    }

    // ── derived values ────────────────────────────────────────────────

    /// Whole minutes elapsed since local midnight (0–1439).
    #[inline]
    pub const fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Fractional hour `hour + minute / 60`, in `[0, 24)`.
    #[inline]
    pub fn fractional_hour(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    /// Portion of the local day elapsed, at minute resolution.
    ///
    /// Always in `[0, 1)` days; seconds are ignored.
    #[inline]
    pub fn elapsed_of_day(&self) -> Days {
        elapsed_days(self.minute_of_day())
    }
}

#[inline]
pub(crate) fn elapsed_days(minute_of_day: u32) -> Days {
    Days::new(minute_of_day as f64 / MINUTES_PER_DAY as f64)
}

// ═══════════════════════════════════════════════════════════════════════════
// Resolver
// ═══════════════════════════════════════════════════════════════════════════

/// Resolve `instant` to wall-clock fields in the zone named by `tz`.
///
/// # Errors
///
/// - [`ClockError::InvalidTimeZone`] if `tz` is not a known zone.
/// - [`ClockError::InstantOutOfRange`] if the instant has no calendar date.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use skydial::{resolve, TimeZoneId};
///
/// let instant = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
/// let fields = resolve(&instant, &TimeZoneId::new("Asia/Tokyo")).unwrap();
/// assert_eq!(fields.hour(), 21);
/// ```
pub fn resolve<I: TimeInstant + ?Sized>(instant: &I, tz: &TimeZoneId) -> Result<ResolvedFields> {
    let zone = tz.to_tz().inspect_err(|err| {
        tracing::debug!(%err, "timezone did not resolve");
    })?;
    resolve_in(instant, zone)
}

/// Resolve against an already parsed zone.
pub fn resolve_in<I: TimeInstant + ?Sized>(instant: &I, zone: Tz) -> Result<ResolvedFields> {
    let utc = instant.to_utc().ok_or(ClockError::InstantOutOfRange)?;
    let local = utc.with_timezone(&zone);

    // chrono reports a leap second as second 59 with a nanosecond overflow,
    // so `second()` never exceeds 59 here.
    Ok(ResolvedFields {
        year: local.year(),
        month: Month::try_from(local.month() as u8).map_err(|_| ClockError::InstantOutOfRange)?,
        day: local.day(),
        weekday: local.weekday(),
        hour: local.hour(),
        minute: local.minute(),
        second: local.second(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn resolves_fixed_offset_zone() {
        let fields = resolve(&utc(2024, 1, 15, 3, 45, 10), &"Asia/Tokyo".into()).unwrap();
        assert_eq!(fields.hour(), 12);
        assert_eq!(fields.minute(), 45);
        assert_eq!(fields.second(), 10);
        assert_eq!(fields.day(), 15);
        assert_eq!(fields.month(), Month::January);
        assert_eq!(fields.weekday(), Weekday::Mon);
        assert_eq!(fields.year(), 2024);
    }

    #[test]
    fn resolves_across_date_line() {
        // 2024-01-15 20:00 UTC is already the 16th in Auckland (UTC+13 in summer).
        let fields = resolve(&utc(2024, 1, 15, 20, 0, 0), &"Pacific/Auckland".into()).unwrap();
        assert_eq!(fields.day(), 16);
        assert_eq!(fields.hour(), 9);
        assert_eq!(fields.weekday(), Weekday::Tue);
    }

    #[test]
    fn applies_daylight_saving() {
        let zone = TimeZoneId::new("America/New_York");
        let winter = resolve(&utc(2024, 1, 15, 17, 0, 0), &zone).unwrap();
        let summer = resolve(&utc(2024, 7, 15, 17, 0, 0), &zone).unwrap();
        assert_eq!(winter.hour(), 12);
        assert_eq!(summer.hour(), 13);
    }

    #[test]
    fn afternoon_hours_stay_on_24_hour_clock() {
        let fields = resolve(&utc(2024, 5, 1, 15, 30, 0), &"UTC".into()).unwrap();
        assert_eq!(fields.hour(), 15);
        assert_eq!(fields.minute_of_day(), 15 * 60 + 30);
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let err = resolve(&utc(2024, 1, 1, 0, 0, 0), &TimeZoneId::new("")).unwrap_err();
        assert!(matches!(err, ClockError::InvalidTimeZone(ref id) if id.is_empty()));
    }

    #[test]
    fn unknown_identifier_does_not_default_to_utc() {
        let err = resolve(&utc(2024, 1, 1, 0, 0, 0), &"Mars/Olympus_Mons".into()).unwrap_err();
        assert!(matches!(err, ClockError::InvalidTimeZone(_)));
        assert!(!TimeZoneId::new(" Europe/London").is_known());
    }

    #[test]
    fn unrepresentable_instant_is_out_of_range() {
        use std::time::{Duration, SystemTime};

        let far_future = SystemTime::UNIX_EPOCH + Duration::from_secs(1 << 60);
        let err = resolve(&far_future, &"Asia/Tokyo".into()).unwrap_err();
        assert!(matches!(err, ClockError::InstantOutOfRange));
    }

    #[test]
    fn calendar_extremes_resolve_without_panicking() {
        for zone in ["Pacific/Kiritimati", "Pacific/Pago_Pago", "Asia/Tokyo"] {
            let zone = TimeZoneId::new(zone);
            assert!(resolve(&DateTime::<Utc>::MAX_UTC, &zone).is_ok());
            assert!(resolve(&DateTime::<Utc>::MIN_UTC, &zone).is_ok());
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let instant = utc(2023, 11, 5, 6, 30, 0);
        let zone = TimeZoneId::new("America/Los_Angeles");
        assert_eq!(resolve(&instant, &zone).unwrap(), resolve(&instant, &zone).unwrap());
    }

    #[test]
    fn from_parts_validates_ranges() {
        assert!(ResolvedFields::from_parts(2024, Month::May, 1, Weekday::Wed, 23, 59, 59).is_ok());
        for (h, m, s, d) in [(24, 0, 0, 1), (0, 60, 0, 1), (0, 0, 60, 1), (0, 0, 0, 0), (0, 0, 0, 32)] {
            let err = ResolvedFields::from_parts(2024, Month::May, d, Weekday::Wed, h, m, s);
            assert!(matches!(err, Err(ClockError::PreconditionViolation { .. })));
        }
    }

    #[test]
    fn elapsed_of_day_is_minute_resolution() {
        let fields = ResolvedFields::from_parts(2024, Month::May, 1, Weekday::Wed, 12, 0, 59).unwrap();
        assert_eq!(fields.elapsed_of_day(), Days::new(0.5));
        assert_eq!(fields.fractional_hour(), 12.0);
    }

    #[test]
    fn tz_roundtrips_through_identifier() {
        let id = TimeZoneId::from(chrono_tz::Europe::London);
        assert_eq!(id.as_str(), "Europe/London");
        assert_eq!(id.to_tz().unwrap(), chrono_tz::Europe::London);
    }
}
