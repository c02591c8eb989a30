//! A standard 52-card deck and five-card poker hand evaluator with
//! optional `no_std` support.
//!
//! The crate deals shuffled cards from a [`Deck`], groups them into
//! [`Hand`]s, and classifies and orders those hands across the nine
//! standard poker categories, including the ace-low straight.
//!
//! # Example
//!
//! ```
//! use pkrs::Deck;
//!
//! let mut deck = Deck::from_seed(42);
//! let first = deck.deal_hand().unwrap();
//! let second = deck.deal_hand().unwrap();
//! assert_eq!(deck.cards_remaining(), 42);
//! assert!(!first.contains(second.cards()[0]));
//! let _ = first.compare(&second);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, MAX_RANK, MIN_RANK, QUEEN, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError, HandError};
pub use hand::{HAND_SIZE, Hand, HandCategory};
