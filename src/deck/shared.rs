use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DrawError;
use crate::sync::Mutex;

use super::StandardDeck;

/// A [`StandardDeck`] behind a mutex, for use from several threads.
///
/// Every method locks the deck for its whole duration, so concurrent draws
/// never hand out the same card twice and a shuffle never interleaves with
/// a draw.
///
/// # Example
///
/// ```
/// use gamekit::{DeckOptions, SharedDeck, StandardDeck};
///
/// let deck = SharedDeck::new(StandardDeck::new(DeckOptions::default(), 7));
/// deck.shuffle();
/// std::thread::scope(|s| {
///     s.spawn(|| deck.draw_cards(5).unwrap());
///     s.spawn(|| deck.draw_cards(5).unwrap());
/// });
/// assert_eq!(deck.remaining(), 42);
/// ```
pub struct SharedDeck {
    deck: Mutex<StandardDeck>,
}

impl SharedDeck {
    /// Wraps a deck for shared access.
    #[must_use]
    pub const fn new(deck: StandardDeck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Shuffles the deck and resets its position.
    pub fn shuffle(&self) {
        self.deck.lock().shuffle();
    }

    /// Draws `count` cards from the current position.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as
    /// [`StandardDeck::draw_cards`].
    pub fn draw_cards(&self, count: usize) -> Result<Vec<Card>, DrawError> {
        self.deck.lock().draw_cards(count)
    }

    /// Returns the card at `index` in the current order.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.deck.lock().card_at(index)
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.lock().remaining()
    }

    /// Compares two cards under the deck's compare rule.
    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        self.deck.lock().compare(a, b)
    }

    /// Returns a copy of the deck in its current state.
    #[must_use]
    pub fn snapshot(&self) -> StandardDeck {
        self.deck.lock().clone()
    }

    /// Consumes the wrapper and returns the deck.
    #[must_use]
    pub fn into_inner(self) -> StandardDeck {
        self.deck.into_inner()
    }
}

impl From<StandardDeck> for SharedDeck {
    fn from(deck: StandardDeck) -> Self {
        Self::new(deck)
    }
}
