//! Chip bookkeeping: the bankroll and the wagers drawn from it.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::{ActionError, BetError};

/// A wager and the chips that make it up.
///
/// The total always equals the sum of the chips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bet {
    total: usize,
    chips: Vec<usize>,
}

impl Bet {
    /// Creates an empty bet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            chips: Vec::new(),
        }
    }

    /// Returns the total amount wagered.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the chip denominations in the order they were placed.
    #[must_use]
    pub fn chips(&self) -> &[usize] {
        &self.chips
    }

    /// Returns whether no chips are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Adds a chip on top of the stack.
    pub fn push(&mut self, chip: usize) {
        self.chips.push(chip);
        self.total += chip;
    }

    /// Removes the most recently placed chip.
    pub fn pop(&mut self) -> Option<usize> {
        let chip = self.chips.pop()?;
        self.total -= chip;
        Some(chip)
    }

    /// Removes every chip, returning the amount taken off.
    pub fn clear(&mut self) -> usize {
        self.chips.clear();
        core::mem::take(&mut self.total)
    }

    /// Matches the bet with a second copy of every chip already placed.
    pub fn double(&mut self) {
        self.chips.extend_from_within(..);
        self.total *= 2;
    }
}

/// The player's bankroll and the bet being built before a deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    bankroll: usize,
    bet: Bet,
}

impl Ledger {
    /// Creates a ledger with the given bankroll and no bet.
    #[must_use]
    pub const fn new(bankroll: usize) -> Self {
        Self {
            bankroll,
            bet: Bet::new(),
        }
    }

    /// Returns the chips not currently wagered.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the bet being built for the next deal.
    #[must_use]
    pub const fn bet(&self) -> &Bet {
        &self.bet
    }

    /// Moves a chip from the bankroll onto the bet.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::ZeroBet`] for a zero amount and
    /// [`BetError::InsufficientFunds`] if the bankroll cannot cover it.
    pub fn place(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        self.bankroll -= amount;
        self.bet.push(amount);
        Ok(())
    }

    /// Returns the most recently placed chip to the bankroll.
    pub fn reduce(&mut self) -> Option<usize> {
        let chip = self.bet.pop()?;
        self.bankroll += chip;
        Some(chip)
    }

    /// Returns the whole bet to the bankroll.
    pub fn clear(&mut self) -> usize {
        let amount = self.bet.clear();
        self.bankroll += amount;
        amount
    }

    /// Takes the bet off the ledger so it can ride on a hand.
    pub fn take_bet(&mut self) -> Bet {
        core::mem::take(&mut self.bet)
    }

    /// Doubles a bet, charging the bankroll its current total.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InsufficientFunds`] if the bankroll is smaller
    /// than the bet.
    pub fn double(&mut self, bet: &mut Bet) -> Result<(), ActionError> {
        self.charge(bet.total())?;
        bet.double();
        Ok(())
    }

    /// Charges a second bet equal to `bet` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InsufficientFunds`] if the bankroll is smaller
    /// than the bet.
    pub fn stake_copy(&mut self, bet: &Bet) -> Result<Bet, ActionError> {
        self.charge(bet.total())?;
        Ok(bet.clone())
    }

    /// Returns whether the bankroll covers `amount`.
    #[must_use]
    pub const fn can_cover(&self, amount: usize) -> bool {
        self.bankroll >= amount
    }

    /// Credits settlement winnings (stake included) to the bankroll.
    pub const fn credit(&mut self, amount: usize) {
        self.bankroll += amount;
    }

    fn charge(&mut self, amount: usize) -> Result<(), ActionError> {
        if !self.can_cover(amount) {
            return Err(ActionError::InsufficientFunds);
        }
        self.bankroll -= amount;
        Ok(())
    }
}
