//! Match state types.

/// Match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Ready to deal the next round.
    InProgress,
    /// A round has been dealt and awaits resolution.
    RoundPending,
    /// A hand ran out of cards. Terminal.
    Over,
}
