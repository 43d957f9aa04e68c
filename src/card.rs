//! Card types and deck constants.

use core::cmp::Ordering;
use core::fmt;

use crate::options::AceRule;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in the order a fresh deck is seeded.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the one-letter code of the suit (`'S'`, `'H'`, `'D'` or `'C'`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Card rank, from two up to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// 10
    Ten,
    /// J
    Jack,
    /// Q
    Queen,
    /// K
    King,
    /// A
    Ace,
}

impl Rank {
    /// All ranks, in the order each suit is seeded.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the display symbol of the rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the integer value of the rank under the given ace rule.
    ///
    /// Twos through kings are worth `2..=13`. An ace is worth 14 when aces
    /// are high and 1 when they are low.
    ///
    /// ```
    /// use gamekit::{AceRule, Rank};
    ///
    /// assert_eq!(Rank::Ace.value(AceRule::AceHigh), 14);
    /// assert_eq!(Rank::Ace.value(AceRule::AceLow), 1);
    /// assert_eq!(Rank::Queen.value(AceRule::AceLow), 12);
    /// ```
    #[must_use]
    pub const fn value(self, ace_rule: AceRule) -> u8 {
        match (self, ace_rule) {
            (Self::Ace, AceRule::AceHigh) => 14,
            (Self::Ace, AceRule::AceLow) => 1,
            // Two is the first variant.
            _ => self as u8 + 2,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// Two cards are equal only when value, rank and suit all match. The
/// natural ordering, [`Card::cmp_value`], looks at the value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    value: u8,
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not check `value` against `rank`. Decks
    /// derive the value from an [`AceRule`]; hand-built cards may use any
    /// value.
    #[must_use]
    pub const fn new(value: u8, rank: Rank, suit: Suit) -> Self {
        Self { value, rank, suit }
    }

    /// Returns the integer value of the card.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the display symbol of the card's rank.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.rank.symbol()
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Compares two cards by value only.
    #[must_use]
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Card {
    /// Formats the card as `<symbol><suit> [<value>]`, e.g. `AS [14]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} [{}]", self.symbol(), self.suit, self.value)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
