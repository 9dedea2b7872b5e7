// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! City → timezone lookup table used by the add-location search.
//!
//! The catalog is plain configuration data. [`Catalog::builtin`] ships a
//! small table of major cities; with the `serde` feature a catalog can also
//! be loaded from a JSON array of `{"city": ..., "timezone": ...}` objects.

use crate::error::{ClockError, Result};
use crate::zone::TimeZoneId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One searchable city.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogEntry {
    pub city: String,
    pub timezone: TimeZoneId,
}

impl CatalogEntry {
    pub fn new(city: impl Into<String>, timezone: impl Into<TimeZoneId>) -> Self {
        Self {
            city: city.into(),
            timezone: timezone.into(),
        }
    }
}

#[rustfmt::skip]
const BUILTIN: &[(&str, &str)] = &[
    ("New York",      "America/New_York"),
    ("Los Angeles",   "America/Los_Angeles"),
    ("Chicago",       "America/Chicago"),
    ("Denver",        "America/Denver"),
    ("Toronto",       "America/Toronto"),
    ("Mexico City",   "America/Mexico_City"),
    ("Bogota",        "America/Bogota"),
    ("Caracas",       "America/Caracas"),
    ("Lima",          "America/Lima"),
    ("Santiago",      "America/Santiago"),
    ("Buenos Aires",  "America/Argentina/Buenos_Aires"),
    ("Sao Paulo",     "America/Sao_Paulo"),
    ("Honolulu",      "Pacific/Honolulu"),
    ("London",        "Europe/London"),
    ("Lisbon",        "Europe/Lisbon"),
    ("Madrid",        "Europe/Madrid"),
    ("Paris",         "Europe/Paris"),
    ("Berlin",        "Europe/Berlin"),
    ("Rome",          "Europe/Rome"),
    ("Athens",        "Europe/Athens"),
    ("Moscow",        "Europe/Moscow"),
    ("Istanbul",      "Europe/Istanbul"),
    ("Cairo",         "Africa/Cairo"),
    ("Lagos",         "Africa/Lagos"),
    ("Johannesburg",  "Africa/Johannesburg"),
    ("Dubai",         "Asia/Dubai"),
    ("Mumbai",        "Asia/Kolkata"),
    ("Kathmandu",     "Asia/Kathmandu"),
    ("Bangkok",       "Asia/Bangkok"),
    ("Singapore",     "Asia/Singapore"),
    ("Hong Kong",     "Asia/Hong_Kong"),
    ("Shanghai",      "Asia/Shanghai"),
    ("Seoul",         "Asia/Seoul"),
    ("Tokyo",         "Asia/Tokyo"),
    ("Sydney",        "Australia/Sydney"),
    ("Auckland",      "Pacific/Auckland"),
];

/// Ordered list of searchable cities.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The bundled table of major cities.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|&(city, tz)| CatalogEntry::new(city, tz))
                .collect(),
        )
    }

    /// Parse a JSON array of catalog entries.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        tracing::debug!(entries = entries.len(), "loaded timezone catalog");
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry whose city matches `city`, ignoring case and surrounding
    /// whitespace.
    pub fn find(&self, city: &str) -> Option<&CatalogEntry> {
        let city = city.trim();
        self.entries
            .iter()
            .find(|entry| entry.city.eq_ignore_ascii_case(city))
    }

    /// Like [`find`](Self::find), failing with [`ClockError::UnknownCity`].
    pub fn lookup(&self, city: &str) -> Result<&CatalogEntry> {
        self.find(city)
            .ok_or_else(|| ClockError::UnknownCity(city.trim().to_owned()))
    }

    /// Entries whose city or zone contains `query`, case-insensitively,
    /// in catalog order. A blank query matches nothing.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        let needle = query.trim().to_lowercase();
        self.entries.iter().filter(move |entry| {
            !needle.is_empty()
                && (entry.city.to_lowercase().contains(&needle)
                    || entry.timezone.as_str().to_lowercase().contains(&needle))
        })
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
