//! Decks of cards and their shared-access wrapper.

use alloc::vec::Vec;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;
use crate::options::{AceRule, DeckOptions};

mod compare;
mod draw;
mod shared;

pub use shared::SharedDeck;

/// Operations every deck supports.
pub trait Deck {
    /// Reorders the deck and returns to its first card.
    fn shuffle(&mut self);

    /// Draws `count` cards from the current position.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or the deck cannot supply it.
    fn draw_cards(&mut self, count: usize) -> Result<Vec<Card>, DrawError>;

    /// Returns the card at `index` in the current order, drawn or not.
    fn card_at(&self, index: usize) -> Option<Card>;

    /// Returns the number of undrawn cards.
    fn remaining(&self) -> usize;
}

/// A standard 52 card deck.
///
/// The deck is seeded suit by suit (spades, hearts, diamonds, clubs), each
/// suit running from two up to ace. Drawing advances a cursor and never
/// removes cards, so drawn cards stay reachable through
/// [`card_at`](Self::card_at).
///
/// # Example
///
/// ```
/// use gamekit::{DeckOptions, StandardDeck};
///
/// let mut deck = StandardDeck::new(DeckOptions::default(), 42);
/// deck.shuffle();
/// let hand = deck.draw_cards(5).unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.remaining(), 47);
/// ```
#[derive(Debug, Clone)]
pub struct StandardDeck {
    /// Cards in their current order. Always holds [`DECK_SIZE`] cards.
    cards: Vec<Card>,
    /// Index of the next undrawn card.
    position: usize,
    /// Rules fixed at construction.
    options: DeckOptions,
    /// Random number generator used by [`shuffle`](Self::shuffle).
    rng: ChaCha8Rng,
}

impl StandardDeck {
    /// Creates an unshuffled deck whose shuffles are driven by `seed`.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an unshuffled deck whose generator is seeded from the OS.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: DeckOptions) -> Self {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }

    fn with_rng(options: DeckOptions, rng: ChaCha8Rng) -> Self {
        tracing::debug!(
            ace_rule = ?options.ace_rule,
            compare_rule = ?options.compare_rule,
            "seeding standard deck"
        );

        Self {
            cards: Self::seed_cards(options.ace_rule),
            position: 0,
            options,
            rng,
        }
    }

    /// Builds the 52 cards in seeding order.
    fn seed_cards(ace_rule: AceRule) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank.value(ace_rule), rank, suit));
            }
        }

        cards
    }

    /// Shuffles the deck with its own generator and resets the position.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
        tracing::debug!("shuffled deck");
    }

    /// Shuffles the deck with the given generator and resets the position.
    ///
    /// The deck's own generator is left untouched.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.position = 0;
        tracing::debug!("shuffled deck with external generator");
    }

    /// Returns the options the deck was built with.
    #[must_use]
    pub const fn options(&self) -> DeckOptions {
        self.options
    }

    /// Returns the index of the next undrawn card.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.position
    }

    /// Returns every card in its current order, drawn or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Deck for StandardDeck {
    fn shuffle(&mut self) {
        Self::shuffle(self);
    }

    fn draw_cards(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        Self::draw_cards(self, count)
    }

    fn card_at(&self, index: usize) -> Option<Card> {
        Self::card_at(self, index)
    }

    fn remaining(&self) -> usize {
        Self::remaining(self)
    }
}
