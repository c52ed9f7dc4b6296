//! Game state types.

use core::fmt;

/// Which of the player's hands is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSlot {
    /// The hand dealt at the start of the round.
    Main,
    /// The hand created by splitting the main hand.
    Split,
}

impl fmt::Display for HandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Main => "Main",
            Self::Split => "Split",
        })
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Accepting chips for the next round.
    Betting,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for the player to act on the given hand.
    PlayerTurn(HandSlot),
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been paid out; cards stay on the table until the next bet.
    Settled,
    /// The bankroll is empty.
    GameOver,
}

impl GameState {
    /// Returns whether chips may be placed or taken back.
    #[must_use]
    pub const fn accepts_bets(self) -> bool {
        matches!(self, Self::Betting | Self::Settled)
    }

    /// Returns the hand waiting for a decision, if any.
    #[must_use]
    pub const fn active_hand(self) -> Option<HandSlot> {
        match self {
            Self::PlayerTurn(slot) => Some(slot),
            _ => None,
        }
    }
}
