//! Card system: definitions, runtime cards, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: String identifier, unique within a catalog
//! - `CardDefinition`: Static card data (name, image, text, special flag)
//! - `Card`: Definition plus the opened flag
//! - `Catalog`: Validated, injectable list of definitions
//!
//! ## Special Cards
//!
//! Cards flagged `special` are gated: a deck keeps them at the end of its
//! order and refuses to open them until every regular card is open.

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::{Catalog, GIFT_BOX_SPECIAL_ID};
pub use definition::{CardDefinition, CardId};
pub use instance::Card;
