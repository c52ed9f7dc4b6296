//! Read-only views of the table for presentation layers.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::HandStatus;
use crate::result::RoundResult;

use super::{Game, GameState, HandSlot};

/// One of the player's hands as shown on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Which hand this is.
    pub slot: HandSlot,
    /// The cards, in the order received.
    pub cards: Vec<Card>,
    /// The scored value.
    pub value: u8,
    /// The hand's status.
    pub status: HandStatus,
    /// The wager on this hand.
    pub bet: usize,
    /// Whether the player is deciding on this hand right now.
    pub active: bool,
}

/// The dealer's hand as the player can see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerView {
    /// Face-up cards.
    pub cards: Vec<Card>,
    /// Number of face-down cards.
    pub hidden: usize,
    /// Value of the face-up cards.
    pub value: u8,
    /// Whether the hole card has been turned over.
    pub hole_revealed: bool,
}

/// Everything a renderer needs, taken at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current phase.
    pub state: GameState,
    /// Chips not currently wagered.
    pub bankroll: usize,
    /// Total amount wagered.
    pub bet: usize,
    /// Chip denominations making up the wager.
    pub bet_chips: Vec<usize>,
    /// Player hands, main first.
    pub hands: Vec<HandView>,
    /// The dealer's visible hand.
    pub dealer: DealerView,
    /// Whether hit and stand are available.
    pub can_hit: bool,
    /// Whether double down is available.
    pub can_double: bool,
    /// Whether split is available.
    pub can_split: bool,
    /// Whether a round can be dealt.
    pub can_deal: bool,
    /// Whether a command or reveal holds the table.
    pub busy: bool,
    /// Cards left in the shoe.
    pub cards_remaining: usize,
    /// Result of the round just settled.
    pub last_result: Option<RoundResult>,
}

impl Game {
    /// Captures the whole query surface at once.
    pub fn snapshot(&self) -> Snapshot {
        let round = self.round.lock();
        let active = round.active_hand().map(|(slot, _)| slot);

        let hands = round
            .player_hands()
            .map(|(slot, hand)| HandView {
                slot,
                cards: hand.cards().to_vec(),
                value: hand.value(),
                status: hand.status(),
                bet: hand.bet().total(),
                active: active == Some(slot),
            })
            .collect();

        let dealer = DealerView {
            cards: round.dealer.visible_cards().to_vec(),
            hidden: round.dealer.len() - round.dealer.visible_cards().len(),
            value: round.dealer.visible_value(),
            hole_revealed: round.dealer.is_hole_revealed(),
        };

        Snapshot {
            state: round.state,
            bankroll: round.ledger.bankroll(),
            bet: round.current_bet(),
            bet_chips: round.bet_chips(),
            hands,
            dealer,
            can_hit: round.can_play(),
            can_double: round.can_double(),
            can_split: round.can_split(),
            can_deal: round.can_deal(),
            busy: self.is_busy(),
            cards_remaining: self.cards_remaining(),
            last_result: round.last_result.clone(),
        }
    }
}
