//! A two-player War ("Bataille") card game engine with optional `no_std` support.
//!
//! A shuffled 52-card deck is split between a human player and the computer.
//! Each round the front card of both hands is compared and the higher rank
//! scores a point. The [`Match`] type owns the hands, scores and terminal
//! state; rendering lives in [`display`] and never feeds back into the match.
//!
//! # Example
//!
//! ```
//! use bataille::Match;
//!
//! let mut game = Match::new(42);
//! while let Some(result) = game.play_round() {
//!     let _ = result.outcome;
//! }
//! assert!(game.is_over());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod display;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, HAND_SIZE, Rank, Suit};
pub use deck::Deck;
pub use display::{CardFace, Locale, MatchView, card_face, drive_round, hand_progress_percent};
pub use error::{DealError, DeckError, ResolveError};
pub use game::{Match, MatchState};
pub use hand::Hand;
pub use options::PresentationOptions;
pub use result::{DealtCards, MatchSummary, RoundOutcome, RoundResult};
