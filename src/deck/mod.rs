//! Deck state manager: ordering, reveal gating, and reset.

pub mod state;

pub use state::{Deck, OpenOutcome};
