//! Player and computer hand representation.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque::Iter;
use alloc::vec::Vec;

use crate::card::Card;

/// A hand of cards, played from the front.
///
/// Hands are only created by [`Deck::split`](crate::Deck::split) and only
/// shrink, one card per dealt round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards still to play, front first.
    cards: VecDeque<Card>,
}

impl Hand {
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: VecDeque::from(cards),
        }
    }

    /// Returns the front card without removing it.
    pub(crate) fn front(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Removes and returns the front card.
    pub(crate) fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in play order.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
