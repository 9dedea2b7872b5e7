// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible operation of the crate.

use thiserror::Error;

/// Errors produced while resolving zones, validating wall-clock fields or
/// managing the location list.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The timezone identifier is not a known IANA zone.
    ///
    /// Recoverable: a card whose zone fails to resolve is still shown, with a
    /// placeholder instead of the time.
    #[error("invalid timezone identifier: {0:?}")]
    InvalidTimeZone(String),

    /// A wall-clock field was outside its valid range.
    ///
    /// This signals a bug in the caller; the value is rejected rather than
    /// wrapped or clamped.
    #[error("{field} = {value} is out of range (expected 0..={max})")]
    PreconditionViolation {
        field: &'static str,
        value: u32,
        max: u32,
    },

    /// The instant cannot be represented as a calendar date.
    #[error("instant is outside the representable calendar range")]
    InstantOutOfRange,

    /// No catalog entry matches the requested city.
    #[error("no timezone known for city {0:?}")]
    UnknownCity(String),

    /// A catalog document could not be parsed.
    #[cfg(feature = "serde")]
    #[error("malformed timezone catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

impl ClockError {
    /// `true` for errors a card can survive by rendering a placeholder.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ClockError::InvalidTimeZone(_) | ClockError::InstantOutOfRange
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ClockError>;

pub(crate) fn check_range(field: &'static str, value: u32, max: u32) -> Result<u32> {
    if value > max {
        Err(ClockError::PreconditionViolation { field, value, max })
    } else {
        Ok(value)
    }
}
