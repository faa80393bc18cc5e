//! Match engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::hand::Hand;
use crate::result::{DealtCards, MatchSummary, RoundOutcome};

mod round;
pub mod state;

pub use state::MatchState;

/// A War match between a human player and the computer.
///
/// The match owns both hands, the scores and the terminal flag. Drivers
/// advance it with [`Match::play_round`], or with [`Match::deal_round`]
/// followed by [`Match::resolve_round`] when they want to pause between
/// revealing the cards and scoring them.
#[derive(Debug, Clone)]
pub struct Match {
    /// The player's remaining cards.
    player_hand: Hand,
    /// The computer's remaining cards.
    computer_hand: Hand,
    player_score: u8,
    computer_score: u8,
    ties: u8,
    /// Set once a hand runs out. Never cleared.
    over: bool,
    /// Cards dealt by `deal_round` and not yet resolved.
    pending: Option<DealtCards>,
    /// Random number generator, kept for resets.
    rng: ChaCha8Rng,
}

impl Match {
    /// Creates a new match, shuffling a fresh deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bataille::{HAND_SIZE, Match};
    ///
    /// let game = Match::new(7);
    /// assert_eq!(game.player_hand().len(), HAND_SIZE);
    /// assert_eq!(game.computer_hand().len(), HAND_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        log::debug!("new match with seed {seed}");
        Self::deal(deck, rng)
    }

    /// Creates a new match from an arranged deck, without shuffling it.
    ///
    /// The seed only drives later [resets](Self::reset).
    #[must_use]
    pub fn with_deck(deck: Deck, seed: u64) -> Self {
        Self::deal(deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn deal(deck: Deck, rng: ChaCha8Rng) -> Self {
        let (player_hand, computer_hand) = deck.split();

        Self {
            player_hand,
            computer_hand,
            player_score: 0,
            computer_score: 0,
            ties: 0,
            over: false,
            pending: None,
            rng,
        }
    }

    /// Replaces this match with a freshly shuffled one.
    ///
    /// Nothing carries over from the previous match except the position of
    /// the random stream.
    pub fn reset(&mut self) {
        let mut rng = self.rng.clone();
        let deck = Deck::shuffled(&mut rng);
        *self = Self::deal(deck, rng);
        log::debug!("match reset");
    }

    /// Returns the current match state.
    #[must_use]
    pub const fn state(&self) -> MatchState {
        if self.over {
            MatchState::Over
        } else if self.pending.is_some() {
            MatchState::RoundPending
        } else {
            MatchState::InProgress
        }
    }

    /// Returns whether the match has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Returns the cards dealt but not yet resolved, if any.
    #[must_use]
    pub const fn pending_round(&self) -> Option<DealtCards> {
        self.pending
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the computer's hand.
    #[must_use]
    pub const fn computer_hand(&self) -> &Hand {
        &self.computer_hand
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn player_score(&self) -> u8 {
        self.player_score
    }

    /// Returns the computer's score.
    #[must_use]
    pub const fn computer_score(&self) -> u8 {
        self.computer_score
    }

    /// Returns the number of tied rounds so far.
    #[must_use]
    pub const fn ties(&self) -> u8 {
        self.ties
    }

    /// Returns the number of resolved rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u8 {
        self.player_score + self.computer_score + self.ties
    }

    /// Returns the overall outcome once the match is over.
    #[must_use]
    pub fn final_outcome(&self) -> Option<RoundOutcome> {
        self.over
            .then(|| RoundOutcome::compare(self.player_score, self.computer_score))
    }

    /// Returns the final tally once the match is over.
    #[must_use]
    pub fn summary(&self) -> Option<MatchSummary> {
        let outcome = self.final_outcome()?;

        Some(MatchSummary {
            player_score: self.player_score,
            computer_score: self.computer_score,
            ties: self.ties,
            rounds_played: self.rounds_played(),
            outcome,
        })
    }
}
