//! Presentation helpers for drivers.
//!
//! Nothing in here is used by [`Match`] itself. Drivers render cards with
//! [`card_face`], pick strings from a [`Locale`], and may implement
//! [`MatchView`] to let [`drive_round`] sequence a staged round for them.

use alloc::string::{String, ToString};

use crate::card::{Card, Color, HAND_SIZE, Suit};
use crate::game::Match;
use crate::result::{DealtCards, MatchSummary, RoundOutcome, RoundResult};

/// What a card looks like face up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    /// Rank symbol followed by suit symbol, e.g. `"Q♥"`.
    pub label: String,
    /// Color class of the card.
    pub color: Color,
}

/// Renders a card face.
#[must_use]
pub fn card_face(card: &Card) -> CardFace {
    CardFace {
        label: card.to_string(),
        color: card.color(),
    }
}

/// Width of a hand's progress bar, as a percentage of a full hand.
#[must_use]
pub const fn hand_progress_percent(remaining: usize) -> u8 {
    let remaining = if remaining > HAND_SIZE {
        HAND_SIZE
    } else {
        remaining
    };
    (remaining * 100 / HAND_SIZE) as u8
}

/// Language of the strings shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// French.
    #[default]
    French,
    /// English.
    English,
}

impl Locale {
    /// Banner shown after a round.
    #[must_use]
    pub const fn round_message(self, outcome: RoundOutcome) -> &'static str {
        match (self, outcome) {
            (Self::French, RoundOutcome::Win) => "🎉 VICTOIRE!",
            (Self::French, RoundOutcome::Lose) => "😔 Défaite",
            (Self::French, RoundOutcome::Tie) => "🤝 Égalité",
            (Self::English, RoundOutcome::Win) => "🎉 VICTORY!",
            (Self::English, RoundOutcome::Lose) => "😔 Defeat",
            (Self::English, RoundOutcome::Tie) => "🤝 Tie",
        }
    }

    /// Title of the end-of-match screen.
    #[must_use]
    pub const fn final_title(self, outcome: RoundOutcome) -> &'static str {
        match (self, outcome) {
            (Self::French, RoundOutcome::Win) => "🏆 FÉLICITATIONS! 🏆",
            (Self::French, RoundOutcome::Lose) => "😢 DÉFAITE 😢",
            (Self::French, RoundOutcome::Tie) => "🤝 ÉGALITÉ 🤝",
            (Self::English, RoundOutcome::Win) => "🏆 CONGRATULATIONS! 🏆",
            (Self::English, RoundOutcome::Lose) => "😢 DEFEAT 😢",
            (Self::English, RoundOutcome::Tie) => "🤝 DRAW 🤝",
        }
    }

    /// Message of the end-of-match screen.
    #[must_use]
    pub const fn final_message(self, outcome: RoundOutcome) -> &'static str {
        match (self, outcome) {
            (Self::French, RoundOutcome::Win) => "Vous avez gagné!",
            (Self::French, RoundOutcome::Lose) => "L'ordinateur a gagné...",
            (Self::French, RoundOutcome::Tie) => "Match nul!",
            (Self::English, RoundOutcome::Win) => "You won!",
            (Self::English, RoundOutcome::Lose) => "The computer won...",
            (Self::English, RoundOutcome::Tie) => "It's a draw!",
        }
    }

    /// Heading of the final score block.
    #[must_use]
    pub const fn final_score_label(self) -> &'static str {
        match self {
            Self::French => "Score final",
            Self::English => "Final score",
        }
    }

    /// Label of a side's score.
    #[must_use]
    pub const fn score_label(self) -> &'static str {
        match self {
            Self::French => "points",
            Self::English => "score",
        }
    }

    /// Label of a side's remaining card count.
    #[must_use]
    pub const fn cards_label(self) -> &'static str {
        match self {
            Self::French => "cartes",
            Self::English => "cards",
        }
    }

    /// Notice shown when a new match is dealt.
    #[must_use]
    pub const fn new_game_notice(self) -> &'static str {
        match self {
            Self::French => "Nouvelle partie.",
            Self::English => "New game.",
        }
    }

    /// Hint shown when the player tries to play after the end.
    #[must_use]
    pub const fn game_over_hint(self) -> &'static str {
        match self {
            Self::French => "Partie terminée. Tapez 'n' pour une nouvelle partie.",
            Self::English => "Game over. Type 'n' for a new game.",
        }
    }

    /// Notice shown when no round can be dealt.
    #[must_use]
    pub const fn no_round_notice(self) -> &'static str {
        match self {
            Self::French => "Aucune manche ne peut être jouée pour l'instant.",
            Self::English => "No round can be played right now.",
        }
    }

    /// Name of the human side.
    #[must_use]
    pub const fn player_label(self) -> &'static str {
        match self {
            Self::French => "Joueur",
            Self::English => "Player",
        }
    }

    /// Name of the computer side.
    #[must_use]
    pub const fn computer_label(self) -> &'static str {
        match self {
            Self::French => "Ordinateur",
            Self::English => "Computer",
        }
    }

    /// Full name of a suit.
    #[must_use]
    pub const fn suit_name(self, suit: Suit) -> &'static str {
        match (self, suit) {
            (Self::French, Suit::Spades) => "Pique",
            (Self::French, Suit::Hearts) => "Cœur",
            (Self::French, Suit::Diamonds) => "Carreau",
            (Self::French, Suit::Clubs) => "Trèfle",
            (Self::English, Suit::Spades) => "Spades",
            (Self::English, Suit::Hearts) => "Hearts",
            (Self::English, Suit::Diamonds) => "Diamonds",
            (Self::English, Suit::Clubs) => "Clubs",
        }
    }
}

/// A surface that shows a match to the player.
pub trait MatchView {
    /// Shows the two cards just taken from the hands.
    ///
    /// Runs between dealing and scoring, so a driver that wants a pause
    /// before the result appears waits here.
    fn reveal(&mut self, dealt: &DealtCards);

    /// Shows the scored round.
    fn show_round(&mut self, result: &RoundResult);

    /// Shows the end-of-match screen.
    fn show_final(&mut self, summary: &MatchSummary);
}

/// Plays one staged round through a view: deal, reveal, resolve, show.
///
/// Returns `None` without calling the view if no round can be dealt.
pub fn drive_round<V: MatchView + ?Sized>(game: &mut Match, view: &mut V) -> Option<RoundResult> {
    let dealt = game.deal_round().ok()?;
    view.reveal(&dealt);

    let result = game.resolve_round().ok()?;
    view.show_round(&result);

    if let Some(summary) = game.summary() {
        view.show_final(&summary);
    }

    Some(result)
}
