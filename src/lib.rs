//! Playing-card decks and dice rollers with optional `no_std` support.
//!
//! The crate provides a [`StandardDeck`] of 52 cards with configurable ace
//! valuation and card comparison, a [`SharedDeck`] wrapper for use across
//! threads, and the [`Die`] and [`FuzzyDie`] rollers.
//!
//! # Example
//!
//! ```
//! use gamekit::{AceRule, DeckOptions, StandardDeck};
//!
//! let options = DeckOptions::default().with_ace_rule(AceRule::AceLow);
//! let mut deck = StandardDeck::new(options, 42);
//! deck.shuffle();
//! let cards = deck.draw_cards(2).unwrap();
//! assert_eq!(cards.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod dice;
pub mod error;
pub mod options;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, SharedDeck, StandardDeck};
pub use dice::{Die, FuzzyDie, Roll};
pub use error::{DieError, DrawError};
pub use options::{AceRule, CompareRule, DeckOptions};
