//! Round and match result types.

use core::cmp::Ordering;

use crate::card::Card;

/// Outcome of a comparison, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The player's side is strictly higher.
    Win,
    /// The computer's side is strictly higher.
    Lose,
    /// Both sides are equal.
    Tie,
}

impl RoundOutcome {
    /// Classifies the player's value against the computer's.
    ///
    /// Used both for card rank values and for final scores.
    #[must_use]
    pub fn compare(player: u8, computer: u8) -> Self {
        match player.cmp(&computer) {
            Ordering::Greater => Self::Win,
            Ordering::Less => Self::Lose,
            Ordering::Equal => Self::Tie,
        }
    }
}

/// The two cards taken from the hands for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealtCards {
    /// The player's card.
    pub player_card: Card,
    /// The computer's card.
    pub computer_card: Card,
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's card.
    pub player_card: Card,
    /// The computer's card.
    pub computer_card: Card,
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// Player score after the round.
    pub player_score: u8,
    /// Computer score after the round.
    pub computer_score: u8,
    /// Cards left in the player's hand.
    pub player_remaining: usize,
    /// Cards left in the computer's hand.
    pub computer_remaining: usize,
    /// Whether this round ended the match.
    pub match_over: bool,
    /// Final outcome of the match, set only when `match_over` is true.
    pub final_outcome: Option<RoundOutcome>,
}

/// Final tally of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    /// Final player score.
    pub player_score: u8,
    /// Final computer score.
    pub computer_score: u8,
    /// Number of tied rounds.
    pub ties: u8,
    /// Number of rounds played.
    pub rounds_played: u8,
    /// Overall outcome for the player.
    pub outcome: RoundOutcome,
}
