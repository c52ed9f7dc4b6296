//! Ordered log of table transitions for presentation layers.
//!
//! Every command appends the transitions it caused. A renderer drains the
//! queue with [`Game::drain_events`](crate::Game::drain_events) and replays
//! the events at whatever pace its animations need; the engine state is
//! already final by the time the events are read.

use core::fmt;

use crate::card::Card;
use crate::game::HandSlot;
use crate::hand::HandStatus;
use crate::result::RoundResult;

/// Who received a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    /// The dealer. `face_down` is set for the hole card.
    Dealer {
        /// Whether the card is dealt face down.
        face_down: bool,
    },
    /// One of the player's hands.
    Player(HandSlot),
}

/// A single table transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game reset the bankroll.
    NewGame {
        /// The starting bankroll.
        bankroll: usize,
    },
    /// A round started with the given total wager.
    RoundStarted {
        /// The wager on the main hand.
        bet: usize,
    },
    /// The shoe ran low and was rebuilt and reshuffled.
    Reshuffled,
    /// A card left the shoe.
    CardDealt {
        /// Who received it.
        to: Recipient,
        /// The card.
        card: Card,
    },
    /// The main hand was split into two hands.
    Split,
    /// A hand's wager was doubled.
    Doubled {
        /// The doubled hand.
        slot: HandSlot,
    },
    /// A player hand stopped taking actions.
    HandFinished {
        /// The finished hand.
        slot: HandSlot,
        /// Its final status.
        status: HandStatus,
    },
    /// The player moved on to another hand.
    TurnChanged(HandSlot),
    /// The dealer turned over the hole card.
    HoleRevealed(Card),
    /// The round was settled.
    Settled(RoundResult),
    /// The bankroll is empty; only a new game can continue.
    GameOver,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewGame { .. } => f.write_str("Place your bet and click Deal to start a new game!"),
            Self::RoundStarted { .. } => f.write_str("Your turn! Hit, Stand, Double or Split"),
            Self::Reshuffled => f.write_str("Shuffling a new set of decks..."),
            Self::CardDealt {
                to: Recipient::Dealer { face_down: true },
                ..
            } => f.write_str("Dealer takes a hole card"),
            Self::CardDealt {
                to: Recipient::Dealer { face_down: false },
                card,
            } => write!(f, "Dealer draws {card}"),
            Self::CardDealt {
                to: Recipient::Player(slot),
                card,
            } => write!(f, "{slot} hand draws {card}"),
            Self::Split => f.write_str("Hand split! Playing main hand first"),
            Self::Doubled { slot } => write!(f, "{slot} hand doubles down"),
            Self::HandFinished { slot, status } => match status {
                HandStatus::Bust => write!(f, "{slot} hand busts!"),
                HandStatus::Blackjack => write!(f, "Blackjack on {slot} hand!"),
                _ => write!(f, "{slot} hand stands"),
            },
            Self::TurnChanged(slot) => write!(f, "Playing {slot} hand"),
            Self::HoleRevealed(card) => write!(f, "Dealer reveals {card}"),
            Self::Settled(result) => write!(f, "{result}"),
            Self::GameOver => f.write_str("Game over! You're out of chips. Start a new game."),
        }
    }
}
