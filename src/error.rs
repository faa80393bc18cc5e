//! Error types for deck and match operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a deck from arranged cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck does not hold exactly 52 cards.
    #[error("deck must hold exactly 52 cards, got {0}")]
    WrongSize(usize),
    /// A card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The match is already over.
    #[error("the match is already over")]
    MatchOver,
    /// A dealt round has not been resolved yet.
    #[error("a dealt round is awaiting resolution")]
    RoundPending,
    /// One of the hands has no cards left.
    ///
    /// Matches always start from a full deck and end as soon as a hand runs
    /// out, so this only guards against a match whose hands were emptied
    /// without ending it.
    #[error("a hand is empty")]
    EmptyHand,
}

/// Errors that can occur when resolving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No round has been dealt.
    #[error("no dealt round to resolve")]
    NoRoundPending,
}
