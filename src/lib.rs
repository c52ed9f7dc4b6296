//! A single-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the whole round: chip
//! betting, the deal, hit/stand/double/split decisions, dealer play and
//! settlement. It never renders anything; a presentation layer reads
//! [`Game::snapshot`] and replays [`Game::drain_events`] at its own pace.
//!
//! # Example
//!
//! ```
//! use blackjack_table::{Game, GameOptions, GameState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! assert!(game.place_bet(100).unwrap().is_applied());
//! assert!(game.start_round().unwrap().is_applied());
//!
//! while game.active_hand().is_some() {
//!     assert!(game.stand().is_applied());
//! }
//! assert!(matches!(game.state(), GameState::Settled | GameState::GameOver));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod shoe;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, CommandStatus};
pub use event::{GameEvent, Recipient};
pub use game::{DealerView, Game, GameState, HandSlot, HandView, RevealGuard, Snapshot};
pub use hand::{DealerHand, Hand, HandStatus, score};
pub use ledger::{Bet, Ledger};
pub use options::{GameOptions, RoundingMode};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use shoe::Shoe;
