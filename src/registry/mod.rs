//! Card registry for the ChurchAfrica dashboard.
//!
//! This module defines the [`KpiCard`] record describing a single metric
//! tile and the [`CardRegistry`] catalog the dashboard selects cards from.
//!
//! # Architecture
//!
//! Card definitions are static data: they are declared once (see
//! [`CardRegistry::builtin`]), validated when the registry is constructed,
//! and never mutated or deleted afterwards. The registry is a read-only
//! lookup table; which cards are *shown* is the business of the
//! configuration store and layout engine, not of the registry.
//!
//! # Example
//!
//! ```
//! use churchafrica_dashboard::registry::CardRegistry;
//!
//! let registry = CardRegistry::builtin();
//! let card = registry.get("total-members").expect("builtin card exists");
//! assert_eq!(card.title, "Total Members");
//! assert!(registry.recommended().count() >= 1);
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::{CardCategory, Trend};

mod builtin;

pub use builtin::STARTER_CARD_IDS;

/// A single KPI card definition.
///
/// `id` is the stable key used in `visibleCards`; everything else is
/// presentation data. The `value`/`delta`/`trend` fields are the render
/// props the registry supplies to the tile widget; they are static sample
/// figures, not live data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    /// Unique, kebab-case card key.
    pub id: &'static str,
    /// Human-readable tile title.
    pub title: &'static str,
    /// Metric category, drawn from the closed [`CardCategory`] set.
    pub category: CardCategory,
    /// Whether the card is part of the recommended quick-population preset.
    pub recommended: bool,
    /// Headline figure rendered in the tile body.
    pub value: &'static str,
    /// Period-over-period change rendered beside the trend arrow.
    pub delta: &'static str,
    /// Direction of the change.
    pub trend: Trend,
}

/// Errors raised when validating a card catalog at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two card definitions share the same id.
    #[error("duplicate card id: {0}")]
    DuplicateCardId(&'static str),

    /// A card definition has an empty id.
    #[error("card definition with an empty id")]
    EmptyCardId,
}

/// Read-only catalog of KPI card definitions.
///
/// Construction validates the catalog (unique, non-empty ids); lookups
/// after that point cannot fail structurally, only miss.
#[derive(Debug, Clone)]
pub struct CardRegistry {
    cards: Vec<KpiCard>,
}

impl CardRegistry {
    /// Creates a registry from the given definitions, validating ids.
    ///
    /// Returns [`RegistryError::DuplicateCardId`] if two definitions share
    /// an id and [`RegistryError::EmptyCardId`] for blank ids.
    pub fn new(cards: Vec<KpiCard>) -> Result<Self, RegistryError> {
        for (i, card) in cards.iter().enumerate() {
            if card.id.is_empty() {
                return Err(RegistryError::EmptyCardId);
            }
            if cards[..i].iter().any(|earlier| earlier.id == card.id) {
                return Err(RegistryError::DuplicateCardId(card.id));
            }
        }
        Ok(Self { cards })
    }

    /// Returns the builtin ChurchAfrica card catalog.
    pub fn builtin() -> Self {
        Self::new(builtin::catalog()).expect("builtin catalog has unique, non-empty ids")
    }

    /// Looks up a card definition by id.
    pub fn get(&self, id: &str) -> Option<&KpiCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Returns `true` if a card with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All card definitions in catalog order.
    pub fn cards(&self) -> &[KpiCard] {
        &self.cards
    }

    /// Cards flagged for the recommended preset, in catalog order.
    pub fn recommended(&self) -> impl Iterator<Item = &KpiCard> {
        self.cards.iter().filter(|card| card.recommended)
    }

    /// Count of card definitions.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
