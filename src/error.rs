//! Error types for deck and dice operations.

use thiserror::Error;

/// Errors that can occur when drawing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Zero cards were requested.
    #[error("draw count must be positive")]
    InvalidCount,
    /// The request cannot be met from the cards left in the deck.
    ///
    /// A draw must ask for strictly fewer cards than remain.
    #[error("not enough cards in deck: requested {requested}, {remaining} remaining")]
    OutOfCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left at the time of the request.
        remaining: usize,
    },
}

/// Errors that can occur when creating a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DieError {
    /// A die needs at least one side.
    #[error("die must have a positive number of sides")]
    InvalidSides,
}
