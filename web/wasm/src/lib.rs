use bataille::{
    Card, DealtCards, Locale, Match, MatchState, MatchSummary, PresentationOptions, RoundOutcome,
    RoundResult, card_face, hand_progress_percent,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmMatch {
    game: Match,
    options: PresentationOptions,
}

#[wasm_bindgen]
impl WasmMatch {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Match::new(seed as u64),
            options: PresentationOptions::default(),
        }
    }

    /// Starts a new match, keeping the presentation options.
    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn set_locale(&mut self, code: &str) -> Result<(), JsValue> {
        let locale = match code {
            "fr" => Locale::French,
            "en" => Locale::English,
            _ => return Err(JsValue::from_str("unsupported locale")),
        };
        self.options = self.options.with_locale(locale);
        Ok(())
    }

    pub fn set_reveal_delay_ms(&mut self, delay_ms: u32) {
        self.options = self.options.with_reveal_delay_ms(delay_ms);
    }

    pub fn reveal_delay_ms(&self) -> u32 {
        self.options.reveal_delay_ms
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Takes the next two cards. Disable the play button until `resolve`.
    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        let dealt = self.game.deal_round().map_err(js_err)?;
        to_js_value(&JsDealt::new(dealt, self.options.locale))
    }

    /// Scores the dealt cards, typically after `reveal_delay_ms`.
    pub fn resolve(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.resolve_round().map_err(js_err)?;
        let js_round = JsRound::new(&result, self.game.summary(), self.options.locale);
        to_js_value(&js_round)
    }

    /// Plays a round in one step. Returns `null` when no round can be played.
    pub fn play(&mut self) -> Result<JsValue, JsValue> {
        match self.game.play_round() {
            Some(result) => {
                let js_round = JsRound::new(&result, self.game.summary(), self.options.locale);
                to_js_value(&js_round)
            }
            None => Ok(JsValue::NULL),
        }
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let locale = self.options.locale;
        let player_remaining = self.game.player_hand().len();
        let computer_remaining = self.game.computer_hand().len();

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            player: JsSide {
                label: locale.player_label(),
                score: self.game.player_score(),
                remaining: player_remaining as u32,
                progress: hand_progress_percent(player_remaining),
            },
            computer: JsSide {
                label: locale.computer_label(),
                score: self.game.computer_score(),
                remaining: computer_remaining as u32,
                progress: hand_progress_percent(computer_remaining),
            },
            ties: self.game.ties(),
            pending: self
                .game
                .pending_round()
                .map(|dealt| JsDealt::new(dealt, locale)),
            reveal_delay_ms: self.options.reveal_delay_ms,
            final_screen: self
                .game
                .summary()
                .map(|summary| JsFinal::new(&summary, locale)),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    player: JsSide,
    computer: JsSide,
    ties: u8,
    pending: Option<JsDealt>,
    reveal_delay_ms: u32,
    final_screen: Option<JsFinal>,
}

#[derive(Serialize)]
struct JsSide {
    label: &'static str,
    score: u8,
    remaining: u32,
    progress: u8,
}

#[derive(Serialize)]
struct JsCard {
    label: String,
    suit: &'static str,
    suit_name: &'static str,
    color: &'static str,
    rank_value: u8,
}

impl JsCard {
    fn new(card: Card, locale: Locale) -> Self {
        let face = card_face(&card);
        Self {
            label: face.label,
            suit: card.suit.symbol(),
            suit_name: locale.suit_name(card.suit),
            color: face.color.as_str(),
            rank_value: card.rank_value(),
        }
    }
}

#[derive(Serialize)]
struct JsDealt {
    player_card: JsCard,
    computer_card: JsCard,
}

impl JsDealt {
    fn new(dealt: DealtCards, locale: Locale) -> Self {
        Self {
            player_card: JsCard::new(dealt.player_card, locale),
            computer_card: JsCard::new(dealt.computer_card, locale),
        }
    }
}

#[derive(Serialize)]
struct JsRound {
    player_card: JsCard,
    computer_card: JsCard,
    outcome: &'static str,
    message: &'static str,
    player_score: u8,
    computer_score: u8,
    player_remaining: u32,
    computer_remaining: u32,
    match_over: bool,
    final_outcome: Option<&'static str>,
    final_screen: Option<JsFinal>,
}

impl JsRound {
    fn new(result: &RoundResult, summary: Option<MatchSummary>, locale: Locale) -> Self {
        Self {
            player_card: JsCard::new(result.player_card, locale),
            computer_card: JsCard::new(result.computer_card, locale),
            outcome: outcome_to_str(result.outcome),
            message: locale.round_message(result.outcome),
            player_score: result.player_score,
            computer_score: result.computer_score,
            player_remaining: result.player_remaining as u32,
            computer_remaining: result.computer_remaining as u32,
            match_over: result.match_over,
            final_outcome: result.final_outcome.map(outcome_to_str),
            final_screen: summary.map(|summary| JsFinal::new(&summary, locale)),
        }
    }
}

#[derive(Serialize)]
struct JsFinal {
    outcome: &'static str,
    title: &'static str,
    message: &'static str,
    score_label: &'static str,
    player_score: u8,
    computer_score: u8,
    ties: u8,
}

impl JsFinal {
    fn new(summary: &MatchSummary, locale: Locale) -> Self {
        Self {
            outcome: outcome_to_str(summary.outcome),
            title: locale.final_title(summary.outcome),
            message: locale.final_message(summary.outcome),
            score_label: locale.final_score_label(),
            player_score: summary.player_score,
            computer_score: summary.computer_score,
            ties: summary.ties,
        }
    }
}

fn state_to_str(state: MatchState) -> &'static str {
    match state {
        MatchState::InProgress => "InProgress",
        MatchState::RoundPending => "RoundPending",
        MatchState::Over => "Over",
    }
}

fn outcome_to_str(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Win => "win",
        RoundOutcome::Lose => "lose",
        RoundOutcome::Tie => "tie",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
