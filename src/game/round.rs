use crate::error::{DealError, ResolveError};
use crate::result::{DealtCards, RoundOutcome, RoundResult};

use super::Match;

impl Match {
    /// Plays one full round: deals the front cards and scores them.
    ///
    /// Returns `None` without touching the match if it is over, a dealt round
    /// is still pending, or a hand is empty.
    pub fn play_round(&mut self) -> Option<RoundResult> {
        self.deal_round().ok()?;
        self.resolve_round().ok()
    }

    /// Takes the front card of each hand without scoring them.
    ///
    /// The cards leave the hands for good. Call [`Match::resolve_round`] to
    /// score them; no other round can be dealt until then.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is over, a dealt round is awaiting
    /// resolution, or either hand is empty. The match is left unchanged.
    pub fn deal_round(&mut self) -> Result<DealtCards, DealError> {
        if self.over {
            return Err(DealError::MatchOver);
        }
        if self.pending.is_some() {
            return Err(DealError::RoundPending);
        }
        let (Some(player_card), Some(computer_card)) =
            (self.player_hand.front(), self.computer_hand.front())
        else {
            return Err(DealError::EmptyHand);
        };
        self.player_hand.draw();
        self.computer_hand.draw();

        let dealt = DealtCards {
            player_card,
            computer_card,
        };
        self.pending = Some(dealt);

        log::trace!("dealt {player_card} against {computer_card}");

        Ok(dealt)
    }

    /// Scores the pending round and checks for the end of the match.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been dealt.
    pub fn resolve_round(&mut self) -> Result<RoundResult, ResolveError> {
        let DealtCards {
            player_card,
            computer_card,
        } = self.pending.take().ok_or(ResolveError::NoRoundPending)?;

        let outcome = RoundOutcome::compare(player_card.rank_value(), computer_card.rank_value());
        match outcome {
            RoundOutcome::Win => self.player_score += 1,
            RoundOutcome::Lose => self.computer_score += 1,
            RoundOutcome::Tie => self.ties += 1,
        }

        log::debug!(
            "round {}: {player_card} vs {computer_card} -> {outcome:?} ({}-{})",
            self.rounds_played(),
            self.player_score,
            self.computer_score,
        );

        if self.player_hand.is_empty() || self.computer_hand.is_empty() {
            self.over = true;
        }

        let final_outcome = self.final_outcome();
        if let Some(final_outcome) = final_outcome {
            log::info!(
                "match over: {final_outcome:?} ({}-{}, {} ties)",
                self.player_score,
                self.computer_score,
                self.ties,
            );
        }

        Ok(RoundResult {
            player_card,
            computer_card,
            outcome,
            player_score: self.player_score,
            computer_score: self.computer_score,
            player_remaining: self.player_hand.len(),
            computer_remaining: self.computer_hand.len(),
            match_over: self.over,
            final_outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::card::HAND_SIZE;
    use crate::deck::Deck;
    use crate::error::DealError;
    use crate::game::{Match, MatchState};

    #[test]
    fn empty_hand_deal_leaves_match_untouched() {
        let mut game = Match::with_deck(Deck::new(), 0);
        while game.player_hand.draw().is_some() {}

        assert_eq!(game.deal_round().unwrap_err(), DealError::EmptyHand);
        assert_eq!(game.computer_hand().len(), HAND_SIZE);
        assert_eq!(game.pending_round(), None);
        assert_eq!(game.state(), MatchState::InProgress);
        assert_eq!(game.play_round(), None);
        assert_eq!(game.computer_hand().len(), HAND_SIZE);
    }
}
