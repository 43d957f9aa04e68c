//! Deck configuration options.

/// How aces are valued when a deck is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceRule {
    /// Aces rank above kings (value 14).
    #[default]
    AceHigh,
    /// Aces rank below twos (value 1).
    AceLow,
}

/// How a deck compares two cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CompareRule {
    /// Compare card values only.
    #[default]
    Normal,
    /// Compare card values, breaking ties on the suit code.
    ///
    /// Suit codes order as `C < D < H < S`, so a spade beats a heart of the
    /// same value.
    Bridge,
}

/// Configuration options for a deck.
///
/// Options are fixed once the deck is built:
///
/// ```
/// use gamekit::{AceRule, CompareRule, DeckOptions};
///
/// let options = DeckOptions::default()
///     .with_ace_rule(AceRule::AceLow)
///     .with_compare_rule(CompareRule::Bridge);
/// assert_eq!(options.ace_rule, AceRule::AceLow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeckOptions {
    /// Ace valuation used when seeding.
    pub ace_rule: AceRule,
    /// Comparison rule used by [`StandardDeck::compare`](crate::StandardDeck::compare).
    pub compare_rule: CompareRule,
}

impl DeckOptions {
    /// Sets the ace rule.
    ///
    /// # Example
    ///
    /// ```
    /// use gamekit::{AceRule, DeckOptions};
    ///
    /// let options = DeckOptions::default().with_ace_rule(AceRule::AceLow);
    /// assert_eq!(options.ace_rule, AceRule::AceLow);
    /// ```
    #[must_use]
    pub const fn with_ace_rule(mut self, rule: AceRule) -> Self {
        self.ace_rule = rule;
        self
    }

    /// Sets the compare rule.
    ///
    /// # Example
    ///
    /// ```
    /// use gamekit::{CompareRule, DeckOptions};
    ///
    /// let options = DeckOptions::default().with_compare_rule(CompareRule::Bridge);
    /// assert_eq!(options.compare_rule, CompareRule::Bridge);
    /// ```
    #[must_use]
    pub const fn with_compare_rule(mut self, rule: CompareRule) -> Self {
        self.compare_rule = rule;
        self
    }
}
