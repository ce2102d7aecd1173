//! Deck state: the ordered cards of one play-through.
//!
//! ## Ordering
//!
//! Regular cards are shuffled once at construction; special cards follow
//! them in catalog order. `reset` never reshuffles.
//!
//! ## Gating
//!
//! A special card opens only when every regular card is open. Requests that
//! break this rule, or that name an unknown card, leave the deck untouched.
//!
//! All flags are derived from the cards on every read.

use im::Vector;
use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId, Catalog};
use crate::core::DeckRng;

/// What an `open` request did.
///
/// Purely informational: callers may ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpenOutcome {
    /// The card went from closed to opened.
    Opened,
    /// The card was already open; nothing changed.
    AlreadyOpen,
    /// The card is special and some regular card is still closed.
    Locked,
    /// No card has this id.
    UnknownCard,
}

impl OpenOutcome {
    /// Did this request change the deck?
    #[must_use]
    pub fn changed(self) -> bool {
        self == Self::Opened
    }
}

/// Card deck with reveal gating.
///
/// ## Example
///
/// ```
/// use gift_deck::cards::{CardDefinition, Catalog};
/// use gift_deck::deck::{Deck, OpenOutcome};
///
/// let catalog = Catalog::new(vec![
///     CardDefinition::new("a", "Gift A"),
///     CardDefinition::new("s", "Surprise").special(),
/// ])?;
/// let mut deck = Deck::with_seed(catalog, 42);
///
/// assert_eq!(deck.open("s"), OpenOutcome::Locked);
/// assert_eq!(deck.visible_cards().len(), 1);
///
/// deck.open("a");
/// assert!(deck.is_others_opened());
/// assert_eq!(deck.open("s"), OpenOutcome::Opened);
/// assert!(deck.is_all_opened());
///
/// deck.reset();
/// assert_eq!(deck.opened_count(), 0);
/// # Ok::<(), gift_deck::core::CatalogError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    /// Cards in display order.
    cards: Vector<Card>,

    /// Position of each card in `cards`.
    positions: FxHashMap<CardId, usize>,

    /// Seed the order was drawn with.
    seed: u64,
}

impl Deck {
    /// Build a deck, shuffling regular cards with `rng`.
    #[must_use]
    pub fn new(catalog: Catalog, rng: &mut DeckRng) -> Self {
        let (mut regular, special) = catalog.into_partition();
        rng.shuffle(&mut regular);

        let cards: Vector<Card> = regular
            .into_iter()
            .chain(special)
            .map(Card::new)
            .collect();
        let positions = cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.id().clone(), i))
            .collect();

        debug!("Dealt {} cards with seed {}", cards.len(), rng.seed());

        Self {
            cards,
            positions,
            seed: rng.seed(),
        }
    }

    /// Build a deck with a deterministic order.
    #[must_use]
    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self::new(catalog, &mut DeckRng::new(seed))
    }

    /// Build a deck with an entropy-seeded order.
    #[must_use]
    pub fn shuffled(catalog: Catalog) -> Self {
        Self::new(catalog, &mut DeckRng::from_entropy())
    }

    /// Seed the order was drawn with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// All cards in display order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.positions.get(id).and_then(|&i| self.cards.get(i))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of opened cards, special ones included.
    #[must_use]
    pub fn opened_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_opened()).count()
    }

    /// True iff every card, special ones included, is opened.
    #[must_use]
    pub fn is_all_opened(&self) -> bool {
        self.cards.iter().all(Card::is_opened)
    }

    /// True iff every regular card is opened.
    #[must_use]
    pub fn is_others_opened(&self) -> bool {
        self.cards
            .iter()
            .filter(|c| !c.is_special())
            .all(Card::is_opened)
    }

    /// Cards the player can currently see.
    ///
    /// Special cards are hidden until every regular card is opened; the
    /// full order is returned after that.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<&Card> {
        if self.is_others_opened() {
            self.cards.iter().collect()
        } else {
            self.cards.iter().filter(|c| !c.is_special()).collect()
        }
    }

    /// Open a card.
    ///
    /// Unknown ids and locked special cards are ignored.
    pub fn open(&mut self, id: &str) -> OpenOutcome {
        let Some(&index) = self.positions.get(id) else {
            debug!("Ignoring open of unknown card {id:?}");
            return OpenOutcome::UnknownCard;
        };

        let others_opened = self.is_others_opened();
        let Some(card) = self.cards.get_mut(index) else {
            return OpenOutcome::UnknownCard;
        };

        if card.is_special() && !others_opened {
            debug!("Card {id:?} stays locked until all other cards are open");
            return OpenOutcome::Locked;
        }
        if card.is_opened() {
            return OpenOutcome::AlreadyOpen;
        }

        card.set_opened(true);
        trace!("Opened card {id:?}");
        OpenOutcome::Opened
    }

    /// Close every card. Order is kept.
    pub fn reset(&mut self) {
        for card in self.cards.iter_mut() {
            card.set_opened(false);
        }
        trace!("Reset {} cards", self.cards.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    fn abs_catalog() -> Catalog {
        Catalog::new(vec![
            CardDefinition::new("A", "Gift A"),
            CardDefinition::new("B", "Gift B"),
            CardDefinition::new("S", "Surprise").special(),
        ])
        .unwrap()
    }

    fn ids(deck: &Deck) -> Vec<String> {
        deck.cards().map(|c| c.id().to_string()).collect()
    }

    #[test]
    fn test_special_is_last() {
        for seed in 0..20 {
            let deck = Deck::with_seed(abs_catalog(), seed);
            assert_eq!(ids(&deck).last().map(String::as_str), Some("S"));
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let catalog = Catalog::gift_box();
        let deck1 = Deck::with_seed(catalog.clone(), 7);
        let deck2 = Deck::with_seed(catalog, 7);

        assert_eq!(ids(&deck1), ids(&deck2));
        assert_eq!(deck1.seed(), 7);
    }

    #[test]
    fn test_open_outcomes() {
        let mut deck = Deck::with_seed(abs_catalog(), 1);

        assert_eq!(deck.open("nope"), OpenOutcome::UnknownCard);
        assert_eq!(deck.open("S"), OpenOutcome::Locked);
        assert_eq!(deck.open("A"), OpenOutcome::Opened);
        assert_eq!(deck.open("A"), OpenOutcome::AlreadyOpen);
        assert_eq!(deck.open("B"), OpenOutcome::Opened);
        assert_eq!(deck.open("S"), OpenOutcome::Opened);
        assert_eq!(deck.open("S"), OpenOutcome::AlreadyOpen);

        assert!(OpenOutcome::Opened.changed());
        assert!(!OpenOutcome::Locked.changed());
    }

    #[test]
    fn test_locked_special_leaves_deck_unchanged() {
        let mut deck = Deck::with_seed(abs_catalog(), 2);
        deck.open("A");
        let before = deck.clone();

        assert_eq!(deck.open("S"), OpenOutcome::Locked);

        assert!(deck.cards().eq(before.cards()));
        assert!(!deck.get("S").unwrap().is_opened());
    }

    #[test]
    fn test_get_tracks_state() {
        let mut deck = Deck::with_seed(abs_catalog(), 1);

        assert!(!deck.get("A").unwrap().is_opened());
        deck.open("A");
        assert!(deck.get("A").unwrap().is_opened());
        assert!(deck.get("Z").is_none());
    }

    #[test]
    fn test_opened_count_and_reset() {
        let mut deck = Deck::with_seed(abs_catalog(), 1);
        let order = ids(&deck);

        deck.open("A");
        deck.open("B");
        deck.open("S");
        assert_eq!(deck.opened_count(), 3);

        deck.reset();
        assert_eq!(deck.opened_count(), 0);
        assert_eq!(ids(&deck), order);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut deck = Deck::with_seed(abs_catalog(), 1);
        let snapshot = deck.clone();

        deck.open("A");

        assert!(deck.get("A").unwrap().is_opened());
        assert!(!snapshot.get("A").unwrap().is_opened());
    }

    #[test]
    fn test_empty_deck() {
        let mut deck = Deck::with_seed(Catalog::default(), 1);

        assert!(deck.is_empty());
        assert!(deck.is_all_opened());
        assert!(deck.is_others_opened());
        assert!(deck.visible_cards().is_empty());
        assert_eq!(deck.open("A"), OpenOutcome::UnknownCard);
    }
}
