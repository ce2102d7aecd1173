//! Error types.
//!
//! Deck operations never fail. The only fallible step is building a
//! `Catalog`, which rejects inconsistent card sets up front.

use thiserror::Error;

use crate::cards::CardId;

/// Errors raised while validating a card catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("card id {0} appears more than once in the catalog")]
    DuplicateId(CardId),
}
