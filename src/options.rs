//! Table configuration options.

extern crate alloc;

use alloc::vec::Vec;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_table::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_starting_bankroll(500);
/// assert_eq!(options.decks, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// The shoe is rebuilt when fewer than this many cards remain before a draw.
    pub reshuffle_below: usize,
    /// Chips given to the player by a new game.
    pub starting_bankroll: usize,
    /// Rounding mode for blackjack payouts on odd bets.
    pub rounding_blackjack: RoundingMode,
    /// Chip denominations offered to the player.
    pub chips: Vec<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            reshuffle_below: 52,
            starting_bankroll: 1000,
            rounding_blackjack: RoundingMode::Down,
            chips: alloc::vec![5, 25, 100, 500, 1000],
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the remaining-card count below which the shoe is rebuilt.
    #[must_use]
    pub const fn with_reshuffle_below(mut self, cards: usize) -> Self {
        self.reshuffle_below = cards;
        self
    }

    /// Sets the bankroll a new game starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the chip denominations offered to the player.
    #[must_use]
    pub fn with_chips(mut self, chips: &[usize]) -> Self {
        self.chips = chips.to_vec();
        self
    }
}
