// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Per-tick driver for a board of clock cards.
//!
//! A [`ClockBoard`] owns the location list, the city catalog and the display
//! options. It holds no timer: the caller supplies an instant (or a
//! [`TickSource`]) on every tick and receives one [`Card`] per location, in
//! list order. A location whose zone does not resolve still yields a card,
//! carrying the error and the placeholder text.

use crate::catalog::Catalog;
use crate::config::DisplayConfig;
use crate::error::{ClockError, Result};
use crate::format::{date_text, time_text};
use crate::instant::{TickSource, TimeInstant};
use crate::locations::{Location, LocationList};
use crate::visual::{map_visual_state, VisualState};
use crate::zone::{resolve_in, ResolvedFields, TimeZoneId};
use chrono_tz::Tz;
use std::collections::HashMap;

/// Resolved content of a card whose zone is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFace {
    pub fields: ResolvedFields,
    pub visual: VisualState,
}

/// What one location shows for one tick.
#[derive(Debug)]
pub struct Card {
    pub index: usize,
    pub name: String,
    pub timezone: TimeZoneId,
    pub is_first: bool,
    pub is_last: bool,
    /// Formatted time, or the placeholder if resolution failed.
    pub time_text: String,
    /// Formatted date, or the placeholder if resolution failed.
    pub date_text: String,
    pub face: Result<CardFace>,
}

impl Card {
    pub fn is_resolved(&self) -> bool {
        self.face.is_ok()
    }

    pub fn visual(&self) -> Option<&VisualState> {
        self.face.as_ref().ok().map(|face| &face.visual)
    }
}

/// Location list, catalog and display options, rendered on demand.
#[derive(Debug, Clone, Default)]
pub struct ClockBoard {
    locations: LocationList,
    catalog: Catalog,
    config: DisplayConfig,
}

impl ClockBoard {
    pub fn new(locations: LocationList, catalog: Catalog, config: DisplayConfig) -> Self {
        Self {
            locations,
            catalog,
            config,
        }
    }

    /// Default locations, built-in catalog and default display options.
    pub fn with_defaults() -> Self {
        Self::new(
            LocationList::with_defaults(),
            Catalog::builtin(),
            DisplayConfig::default(),
        )
    }

    // ── accessors ─────────────────────────────────────────────────────

    pub fn locations(&self) -> &LocationList {
        &self.locations
    }

    pub fn locations_mut(&mut self) -> &mut LocationList {
        &mut self.locations
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut DisplayConfig {
        &mut self.config
    }

    // ── list controls ─────────────────────────────────────────────────

    /// Add the catalog city matching `city` to the end of the list.
    pub fn add_city(&mut self, city: &str) -> Result<&Location> {
        self.locations.add_from_catalog(&self.catalog, city)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Location> {
        self.locations.remove_at(index)
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        self.locations.move_up(index)
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        self.locations.move_down(index)
    }

    // ── rendering ─────────────────────────────────────────────────────

    /// Render every location at the instant read from `source`.
    pub fn tick_from<S: TickSource + ?Sized>(&self, source: &S) -> Vec<Card> {
        self.tick(&source.now())
    }

    /// Render every location at `instant`.
    pub fn tick<I: TimeInstant + ?Sized>(&self, instant: &I) -> Vec<Card> {
        let utc = instant.to_utc();
        // Zone lookups are shared between cards with the same identifier.
        let mut zones: HashMap<&TimeZoneId, Option<Tz>> = HashMap::new();

        let cards: Vec<Card> = self
            .locations
            .iter()
            .enumerate()
            .map(|(index, location)| {
                let zone = *zones.entry(&location.timezone).or_insert_with(|| {
                    let zone = location.timezone.to_tz().ok();
                    if zone.is_none() {
                        tracing::debug!(timezone = %location.timezone, "card zone did not resolve");
                    }
                    zone
                });

                let face = match (utc, zone) {
                    (None, _) => Err(ClockError::InstantOutOfRange),
                    (_, None) => Err(ClockError::InvalidTimeZone(
                        location.timezone.as_str().to_owned(),
                    )),
                    (Some(utc), Some(zone)) => resolve_in(&utc, zone).map(|fields| CardFace {
                        fields,
                        visual: map_visual_state(&fields),
                    }),
                };
                self.card(index, location, face)
            })
            .collect();

        tracing::trace!(cards = cards.len(), distinct_zones = zones.len(), "board tick");
        cards
    }

    fn card(&self, index: usize, location: &Location, face: Result<CardFace>) -> Card {
        let (time, date) = match &face {
            Ok(face) => (time_text(&face.fields, &self.config), date_text(&face.fields)),
            Err(_) => (self.config.placeholder.clone(), self.config.placeholder.clone()),
        };
        Card {
            index,
            name: location.name.clone(),
            timezone: location.timezone.clone(),
            is_first: self.locations.is_first(index),
            is_last: self.locations.is_last(index),
            time_text: time,
            date_text: date,
            face,
        }
    }
}
