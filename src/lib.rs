//! # gift-deck
//!
//! Card-reveal state machine for a gift card widget.
//!
//! A deck holds a fixed set of cards the player opens one at a time.
//! Special cards are kept at the end of the deck and stay locked until
//! every other card has been opened. `reset` closes everything again
//! without reshuffling.
//!
//! ## Modules
//!
//! - `core`: Deterministic shuffle RNG, errors
//! - `cards`: Card ids, definitions, runtime cards, catalog
//! - `deck`: The deck state manager
//!
//! ## Usage
//!
//! ```
//! use gift_deck::{Catalog, Deck, GIFT_BOX_SPECIAL_ID};
//!
//! let mut deck = Deck::shuffled(Catalog::gift_box());
//!
//! // The special gift is hidden until the others are open
//! assert_eq!(deck.visible_cards().len(), 4);
//!
//! let ids: Vec<String> = deck.visible_cards().iter().map(|c| c.id().to_string()).collect();
//! for id in &ids {
//!     deck.open(id);
//! }
//!
//! assert_eq!(deck.visible_cards().len(), 5);
//! deck.open(GIFT_BOX_SPECIAL_ID);
//! assert!(deck.is_all_opened());
//! ```

pub mod core;
pub mod cards;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{CatalogError, DeckRng};

pub use crate::cards::{Card, CardDefinition, CardId, Catalog, GIFT_BOX_SPECIAL_ID};

pub use crate::deck::{Deck, OpenOutcome};
