//! Deck construction, shuffling and dealing.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::hand::Hand;

/// A full deck of 52 distinct cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an ordered deck: suits in [`Suit::ALL`] order, each from Ace to King.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates an ordered deck and shuffles it with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Builds a deck from an arranged sequence of cards.
    ///
    /// The first 26 cards become the player's hand and the last 26 the
    /// computer's when the deck is [split](Self::split).
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` does not contain exactly 52 cards or if any
    /// card appears twice.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(cards.len()));
        }

        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            let slot = &mut seen[card.index()];
            if *slot {
                return Err(DeckError::DuplicateCard(*card));
            }
            *slot = true;
        }

        Ok(Self { cards })
    }

    /// Shuffles the deck in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the deck and deals it into the player's and computer's hands.
    #[must_use]
    pub fn split(mut self) -> (Hand, Hand) {
        let computer = self.cards.split_off(HAND_SIZE);
        (Hand::from_cards(self.cards), Hand::from_cards(computer))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
