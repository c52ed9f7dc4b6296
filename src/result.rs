//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::game::HandSlot;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins by out-scoring the dealer.
    Win,
    /// Dealer busted with the hand still live.
    DealerBust,
    /// Player busted.
    Bust,
    /// Dealer has the higher value.
    Lose,
    /// Push (tie).
    Push,
    /// Player has blackjack.
    Blackjack,
}

impl HandOutcome {
    /// Returns whether the stake comes back with winnings.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::DealerBust | Self::Blackjack)
    }
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "You win!",
            Self::DealerBust => "Dealer busts! You win",
            Self::Bust => "Bust! You lose",
            Self::Lose => "Dealer wins!",
            Self::Push => "Push! Bet returned",
            Self::Blackjack => "Blackjack! You win 3:2",
        })
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Which of the player's hands this is.
    pub slot: HandSlot,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand.
    pub bet: usize,
    /// The amount credited back to the bankroll (stake included).
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand (two if split).
    pub hands: Vec<HandResult>,
    /// Total credited to the bankroll.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.hands.as_slice() {
            return write!(f, "{}", only.outcome);
        }

        for (index, hand) in self.hands.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{} hand: {}", hand.slot, hand.outcome)?;
        }
        Ok(())
    }
}
