//! Card catalog - the injectable set of cards a deck is built from.
//!
//! A `Catalog` is an ordered, validated list of `CardDefinition`s. Ids are
//! checked for uniqueness once, here, so the deck never has to.
//!
//! Catalogs deserialize from a plain list of definitions and go through the
//! same validation, so content can live in JSON/TOML next to the UI assets.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::core::CatalogError;

/// Id of the special card in [`Catalog::gift_box`].
pub const GIFT_BOX_SPECIAL_ID: &str = "5";

/// Validated list of card definitions.
///
/// ## Example
///
/// ```
/// use gift_deck::cards::{Catalog, CardDefinition};
///
/// let catalog = Catalog::new(vec![
///     CardDefinition::new("a", "Gift A"),
///     CardDefinition::new("b", "Gift B"),
///     CardDefinition::new("s", "Surprise").special(),
/// ])?;
///
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.specials().count(), 1);
/// # Ok::<(), gift_deck::core::CatalogError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardDefinition>", into = "Vec<CardDefinition>")]
pub struct Catalog {
    cards: Vec<CardDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(cards: Vec<CardDefinition>) -> Result<Self, CatalogError> {
        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(&card.id) {
                return Err(CatalogError::DuplicateId(card.id.clone()));
            }
        }
        Ok(Self { cards })
    }

    /// The stock five-gift catalog.
    ///
    /// Gifts `"1"` through `"4"` are regular; gift `"5"` is special.
    #[must_use]
    pub fn gift_box() -> Self {
        let cards = (1..=5)
            .map(|i| {
                let id = i.to_string();
                let card = CardDefinition::new(id.as_str(), format!("Gift {i}"));
                if id == GIFT_BOX_SPECIAL_ID {
                    card.special()
                } else {
                    card
                }
            })
            .collect();
        Self { cards }
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardDefinition> {
        self.cards.iter().find(|c| c.id.as_str() == id)
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Iterate over the special definitions in catalog order.
    pub fn specials(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter().filter(|c| c.special)
    }

    /// Iterate over the ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter().map(|c| &c.id)
    }

    /// Split into (regular, special) definitions, each in catalog order.
    pub(crate) fn into_partition(self) -> (Vec<CardDefinition>, Vec<CardDefinition>) {
        self.cards.into_iter().partition(|c| !c.special)
    }
}

impl TryFrom<Vec<CardDefinition>> for Catalog {
    type Error = CatalogError;

    fn try_from(cards: Vec<CardDefinition>) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl From<Catalog> for Vec<CardDefinition> {
    fn from(catalog: Catalog) -> Self {
        catalog.cards
    }
}
