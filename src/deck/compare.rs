use core::cmp::Ordering;

use crate::card::Card;
use crate::options::CompareRule;

use super::StandardDeck;

impl StandardDeck {
    /// Compares two cards under the deck's [`CompareRule`].
    ///
    /// Under [`CompareRule::Bridge`], cards of equal value are ordered by
    /// their suit codes, so `5H` is less than `5S`.
    ///
    /// # Example
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use gamekit::{Card, CompareRule, DeckOptions, Rank, StandardDeck, Suit};
    ///
    /// let deck = StandardDeck::new(
    ///     DeckOptions::default().with_compare_rule(CompareRule::Bridge),
    ///     0,
    /// );
    /// let heart = Card::new(5, Rank::Five, Suit::Hearts);
    /// let spade = Card::new(5, Rank::Five, Suit::Spades);
    /// assert_eq!(deck.compare(&heart, &spade), Ordering::Less);
    /// ```
    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        match self.options.compare_rule {
            CompareRule::Normal => a.cmp_value(b),
            CompareRule::Bridge => a
                .cmp_value(b)
                .then_with(|| a.suit().code().cmp(&b.suit().code())),
        }
    }

    /// Sorts `cards` in ascending order under the deck's [`CompareRule`].
    ///
    /// The sort is stable, so cards the rule considers equal keep their
    /// relative order.
    pub fn sort_cards(&self, cards: &mut [Card]) {
        cards.sort_by(|a, b| self.compare(a, b));
    }
}
