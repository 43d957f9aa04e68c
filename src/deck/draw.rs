use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DrawError;

use super::StandardDeck;

impl StandardDeck {
    /// Draws `count` cards starting at the current position.
    ///
    /// The request must be strictly smaller than the number of remaining
    /// cards, so the last card of a deck can never be drawn. A failed draw
    /// leaves the position unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidCount`] if `count` is zero and
    /// [`DrawError::OutOfCards`] if `count` is not below
    /// [`remaining`](Self::remaining).
    pub fn draw_cards(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        if count == 0 {
            return Err(DrawError::InvalidCount);
        }

        let remaining = self.remaining();
        if count >= remaining {
            tracing::warn!(requested = count, remaining, "not enough cards in deck");
            return Err(DrawError::OutOfCards {
                requested: count,
                remaining,
            });
        }

        let start = self.position;
        self.position += count;
        tracing::trace!(count, position = self.position, "drew cards");

        Ok(self.cards[start..self.position].to_vec())
    }

    /// Returns the card at `index` in the current order.
    ///
    /// The lookup ignores the draw position. Indices past the last card
    /// return `None`.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }
}
