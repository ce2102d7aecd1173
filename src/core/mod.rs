//! Core support types: shuffle RNG and errors.

pub mod error;
pub mod rng;

pub use error::CatalogError;
pub use rng::DeckRng;
