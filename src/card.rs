//! Card and suit types.

use core::fmt;

use crate::error::CardError;

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
    /// All four suits, in declaration order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowest card rank (Two).
pub const MIN_RANK: u8 = 2;
/// Highest card rank (Ace).
pub const MAX_RANK: u8 = 14;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;
/// Rank of an Ace. The ace plays high except in the ace-low straight.
pub const ACE: u8 = 14;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Cards are immutable values; two cards are equal iff both rank and suit
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `2..=14`.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{Card, Suit};
    ///
    /// let card = Card::new(5, Suit::Spades).unwrap();
    /// assert_eq!(card.to_string(), "Five of Spades");
    /// assert!(Card::new(15, Suit::Spades).is_err());
    /// ```
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        match rank {
            MIN_RANK..=MAX_RANK => Ok(Self { rank, suit }),
            _ => Err(CardError::InvalidRank(rank)),
        }
    }

    /// Creates a card without validating the rank.
    ///
    /// Callers must guarantee `rank` lies within `2..=14`.
    pub(crate) const fn new_unchecked(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the rank of the card (2..=14, where 11 = Jack, 12 = Queen,
    /// 13 = King, 14 = Ace).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    const fn rank_name(&self) -> &'static str {
        match self.rank {
            2 => "Two",
            3 => "Three",
            4 => "Four",
            5 => "Five",
            6 => "Six",
            7 => "Seven",
            8 => "Eight",
            9 => "Nine",
            10 => "Ten",
            JACK => "Jack",
            QUEEN => "Queen",
            KING => "King",
            _ => "Ace",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit)
    }
}
