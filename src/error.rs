//! Error types for card, deck, and hand operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside the valid range.
    #[error("rank {0} is outside the valid range 2..=14")]
    InvalidRank(u8),
}

/// Errors that can occur when constructing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The input does not hold exactly five cards.
    #[error("a hand requires exactly five cards, got {0}")]
    InvalidSize(usize),
    /// A card in the input is missing.
    #[error("a card in the input is missing")]
    MissingCard,
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
    /// Fewer than five cards left in the deck.
    #[error("not enough cards left to deal a full hand")]
    InsufficientCards,
}
