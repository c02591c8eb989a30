//! Deck construction, shuffling, and dealing.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, MIN_RANK, Suit};
use crate::error::DeckError;
use crate::hand::{HAND_SIZE, Hand};

const RANKS_PER_SUIT: usize = DECK_SIZE / Suit::ALL.len();

/// A shuffled standard 52-card deck.
///
/// The deck always holds every rank and suit combination exactly once; a
/// cursor separates the cards dealt so far from the cards still to come.
/// Once all 52 cards are dealt the deck is exhausted and is not refilled.
///
/// A deck is a single-owner mutable resource with no internal
/// synchronization; callers sharing one across threads must serialize
/// access themselves.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    dealt: usize,
}

impl Deck {
    /// Creates a new deck shuffled with the thread-local RNG.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Creates a deck shuffled deterministically from a seed.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::Deck;
    ///
    /// let mut a = Deck::from_seed(42);
    /// let mut b = Deck::from_seed(42);
    /// assert_eq!(a.deal_next_card(), b.deal_next_card());
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a deck shuffled with the provided random source.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: [Card; DECK_SIZE] = core::array::from_fn(|i| {
            let rank = MIN_RANK + (i % RANKS_PER_SUIT) as u8;
            Card::new_unchecked(rank, Suit::ALL[i / RANKS_PER_SUIT])
        });
        cards.shuffle(rng);
        Self { cards, dealt: 0 }
    }

    /// Returns whether at least five cards remain undealt.
    #[must_use]
    pub const fn has_full_hand(&self) -> bool {
        self.cards_remaining() >= HAND_SIZE
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        DECK_SIZE - self.dealt
    }

    /// Deals the next undealt card and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when all 52 cards have been dealt.
    pub fn deal_next_card(&mut self) -> Result<Card, DeckError> {
        if self.dealt == DECK_SIZE {
            return Err(DeckError::Empty);
        }
        let card = self.cards[self.dealt];
        self.dealt += 1;
        Ok(card)
    }

    /// Deals five cards and groups them into a hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] when fewer than five cards
    /// remain undealt.
    pub fn deal_hand(&mut self) -> Result<Hand, DeckError> {
        if !self.has_full_hand() {
            return Err(DeckError::InsufficientCards);
        }
        let cards = [
            self.deal_next_card()?,
            self.deal_next_card()?,
            self.deal_next_card()?,
            self.deal_next_card()?,
            self.deal_next_card()?,
        ];
        Ok(Hand::from(cards))
    }

    /// Removes a card from the undealt portion of the deck.
    ///
    /// The card is swapped up to the cursor and dealt, so it can no longer
    /// appear in future deals. Removal is best-effort: when the deck is
    /// exhausted or the card is not among the undealt cards, nothing
    /// happens.
    pub fn remove(&mut self, card: Card) {
        if let Some(offset) = self.cards[self.dealt..].iter().position(|&c| c == card) {
            self.cards.swap(self.dealt, self.dealt + offset);
            self.dealt += 1;
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
