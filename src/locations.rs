// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ordered list of locations shown on the board.
//!
//! Positions are the only identity a location has: two entries may share a
//! name or a zone. Reordering is by swapping adjacent entries; requests that
//! would move past either end are ignored.

use crate::catalog::Catalog;
use crate::error::{ClockError, Result};
use crate::zone::TimeZoneId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named place and the zone its clock follows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub name: String,
    pub timezone: TimeZoneId,
}

impl Location {
    pub fn new(name: impl Into<String>, timezone: impl Into<TimeZoneId>) -> Self {
        Self {
            name: name.into(),
            timezone: timezone.into(),
        }
    }
}

/// Ordered sequence of [`Location`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationList {
    items: Vec<Location>,
}

impl LocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// New York, London, Tokyo and Auckland.
    pub fn with_defaults() -> Self {
        [
            Location::new("New York", "America/New_York"),
            Location::new("London", "Europe/London"),
            Location::new("Tokyo", "Asia/Tokyo"),
            Location::new("Auckland", "Pacific/Auckland"),
        ]
        .into_iter()
        .collect()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Location> {
        self.items.get(index)
    }

    #[inline]
    pub fn is_first(&self, index: usize) -> bool {
        index == 0
    }

    #[inline]
    pub fn is_last(&self, index: usize) -> bool {
        self.items.len().checked_sub(1) == Some(index)
    }

    /// Append a location at the end.
    pub fn push(&mut self, location: Location) {
        tracing::debug!(name = %location.name, timezone = %location.timezone, "location added");
        self.items.push(location);
    }

    /// Append the catalog city matching `city`.
    ///
    /// Fails with [`ClockError::UnknownCity`](crate::ClockError::UnknownCity)
    /// and leaves the list untouched when the catalog has no such city.
    pub fn add_from_catalog(&mut self, catalog: &Catalog, city: &str) -> Result<&Location> {
        let entry = catalog.lookup(city)?;
        self.push(Location::new(entry.city.clone(), entry.timezone.clone()));
        self.items
            .last()
            .ok_or_else(|| ClockError::UnknownCity(city.trim().to_owned()))
    }

    /// Remove and return the location at `index`, if any.
    pub fn remove_at(&mut self, index: usize) -> Option<Location> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        tracing::debug!(index, name = %removed.name, "location removed");
        Some(removed)
    }

    /// Swap the location at `index` with the one before it.
    ///
    /// Returns `false` without changes for the first entry or an
    /// out-of-range index.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.items.len() {
            return false;
        }
        self.items.swap(index - 1, index);
        tracing::debug!(from = index, to = index - 1, "location moved up");
        true
    }

    /// Swap the location at `index` with the one after it.
    ///
    /// Returns `false` without changes for the last entry or an
    /// out-of-range index.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index.saturating_add(1) >= self.items.len() {
            return false;
        }
        self.items.swap(index, index + 1);
        tracing::debug!(from = index, to = index + 1, "location moved down");
        true
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LocationList {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
