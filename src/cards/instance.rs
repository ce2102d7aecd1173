//! Card instances - runtime card state.
//!
//! `Card` pairs a `CardDefinition` with the only mutable bit of a card:
//! whether it has been opened during the current reveal cycle.
//!
//! The opened flag can only be changed by the owning `Deck`, which enforces
//! the gating rule for special cards.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};

/// A card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    definition: CardDefinition,
    opened: bool,
}

impl Card {
    /// Create a closed card from its definition.
    #[must_use]
    pub fn new(definition: CardDefinition) -> Self {
        Self {
            definition,
            opened: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.definition.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.definition.image.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.definition.text.as_deref()
    }

    #[must_use]
    pub fn is_special(&self) -> bool {
        self.definition.special
    }

    #[must_use]
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// The static definition this card was built from.
    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    pub(crate) fn set_opened(&mut self, opened: bool) {
        self.opened = opened;
    }
}

impl From<CardDefinition> for Card {
    fn from(definition: CardDefinition) -> Self {
        Self::new(definition)
    }
}
