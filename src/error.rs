//! Error types for game operations.
//!
//! Only problems a player should be told about are errors. A command issued
//! in the wrong phase is not an error: it reports [`CommandStatus::Ignored`]
//! and leaves the table untouched.

use thiserror::Error;

/// Errors that can occur while building a bet or starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Insufficient funds.
    #[error("not enough chips")]
    InsufficientFunds,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// A round was requested with nothing wagered.
    #[error("please place a bet first")]
    NoBet,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The bankroll cannot cover the extra wager for a double or split.
    #[error("not enough chips for this action")]
    InsufficientFunds,
}

/// Whether a command changed the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum CommandStatus {
    /// The command ran and the table moved on.
    Applied,
    /// The command was not valid right now and nothing changed.
    Ignored,
}

impl CommandStatus {
    /// Returns whether the command ran.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
