//! Game engine and state management.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::CommandStatus;
use crate::event::{GameEvent, Recipient};
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::ledger::Ledger;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::sync::{BusyFlag, BusyGuard, Mutex};

mod actions;
mod bet;
mod dealer;
pub mod snapshot;
pub mod state;

pub use snapshot::{DealerView, HandView, Snapshot};
pub use state::{GameState, HandSlot};

/// Everything that changes over a round, guarded as one unit.
#[derive(Debug, Clone)]
pub(crate) struct Round {
    state: GameState,
    ledger: Ledger,
    dealer: DealerHand,
    main: Option<Hand>,
    split: Option<Hand>,
    last_result: Option<RoundResult>,
}

impl Round {
    const fn new(bankroll: usize) -> Self {
        Self {
            state: if bankroll == 0 {
                GameState::GameOver
            } else {
                GameState::Betting
            },
            ledger: Ledger::new(bankroll),
            dealer: DealerHand::new(),
            main: None,
            split: None,
            last_result: None,
        }
    }

    /// Clears the previous round's cards once the player starts betting again.
    fn open_betting(&mut self) {
        if self.state == GameState::Settled {
            self.main = None;
            self.split = None;
            self.dealer.clear();
            self.last_result = None;
            self.state = GameState::Betting;
        }
    }

    fn hand(&self, slot: HandSlot) -> Option<&Hand> {
        match slot {
            HandSlot::Main => self.main.as_ref(),
            HandSlot::Split => self.split.as_ref(),
        }
    }

    fn hand_mut(&mut self, slot: HandSlot) -> Option<&mut Hand> {
        match slot {
            HandSlot::Main => self.main.as_mut(),
            HandSlot::Split => self.split.as_mut(),
        }
    }

    fn hand_and_ledger(&mut self, slot: HandSlot) -> Option<(&mut Hand, &mut Ledger)> {
        let hand = match slot {
            HandSlot::Main => self.main.as_mut(),
            HandSlot::Split => self.split.as_mut(),
        }?;
        Some((hand, &mut self.ledger))
    }

    fn player_hands(&self) -> impl Iterator<Item = (HandSlot, &Hand)> {
        self.main
            .iter()
            .map(|hand| (HandSlot::Main, hand))
            .chain(self.split.iter().map(|hand| (HandSlot::Split, hand)))
    }

    fn active_hand(&self) -> Option<(HandSlot, &Hand)> {
        let slot = self.state.active_hand()?;
        self.hand(slot)
            .filter(|hand| hand.status() == HandStatus::Active)
            .map(|hand| (slot, hand))
    }

    fn current_bet(&self) -> usize {
        if self.state.accepts_bets() {
            self.ledger.bet().total()
        } else {
            self.player_hands().map(|(_, hand)| hand.bet().total()).sum()
        }
    }

    fn bet_chips(&self) -> Vec<usize> {
        if self.state.accepts_bets() {
            self.ledger.bet().chips().to_vec()
        } else {
            self.player_hands()
                .flat_map(|(_, hand)| hand.bet().chips().iter().copied())
                .collect()
        }
    }

    fn can_play(&self) -> bool {
        self.active_hand().is_some()
    }

    fn can_double(&self) -> bool {
        self.active_hand()
            .is_some_and(|(_, hand)| !hand.has_acted() && self.ledger.can_cover(hand.bet().total()))
    }

    fn can_split(&self) -> bool {
        self.split.is_none()
            && matches!(self.active_hand(), Some((HandSlot::Main, hand))
                if !hand.has_acted()
                    && hand.is_pair()
                    && self.ledger.can_cover(hand.bet().total()))
    }

    fn can_deal(&self) -> bool {
        self.state.accepts_bets() && !self.ledger.bet().is_empty()
    }
}

/// Holds the table busy while a presentation layer plays back events.
///
/// Every command is ignored until the guard is dropped.
pub struct RevealGuard<'a> {
    _busy: BusyGuard<'a>,
}

/// A single-player blackjack table: shoe, bankroll, hands and round flow.
///
/// The game owns the shoe and every piece of round state. All methods take
/// `&self`; exactly one command runs at a time and any command that arrives
/// while another one (or a [`RevealGuard`]) is in flight is ignored.
pub struct Game {
    /// Table options.
    pub options: GameOptions,
    /// Cards in the shoe.
    pub shoe: Mutex<Shoe>,
    round: Mutex<Round>,
    events: Mutex<Vec<GameEvent>>,
    busy: BusyFlag,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.bankroll(), 1000);
    /// assert_eq!(game.cards_remaining(), 208);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, options.reshuffle_below, seed);
        let round = Round::new(options.starting_bankroll);

        Self {
            options,
            shoe: Mutex::new(shoe),
            round: Mutex::new(round),
            events: Mutex::new(Vec::new()),
            busy: BusyFlag::new(),
        }
    }

    /// Starts over: resets the bankroll, clears the table and reshuffles a full shoe.
    pub fn new_game(&self) -> CommandStatus {
        let Some(_busy) = self.acquire("new game") else {
            return CommandStatus::Ignored;
        };

        let mut round = self.round.lock();
        *round = Round::new(self.options.starting_bankroll);

        let mut shoe = self.shoe.lock();
        shoe.build();
        shoe.shuffle();
        drop(shoe);

        self.events.lock().clear();
        log::info!("new game with {} chips", self.options.starting_bankroll);
        self.emit(GameEvent::NewGame {
            bankroll: self.options.starting_bankroll,
        });
        if round.state == GameState::GameOver {
            self.emit(GameEvent::GameOver);
        }
        drop(round);

        CommandStatus::Applied
    }

    /// Holds the table busy until the returned guard is dropped.
    ///
    /// Returns `None` if a command or another reveal is in progress.
    pub fn begin_reveal(&self) -> Option<RevealGuard<'_>> {
        self.busy
            .try_acquire()
            .map(|busy| RevealGuard { _busy: busy })
    }

    /// Returns whether a command or reveal currently holds the table.
    pub fn is_busy(&self) -> bool {
        self.busy.is_set()
    }

    /// Takes every event recorded since the last call, oldest first.
    pub fn drain_events(&self) -> Vec<GameEvent> {
        core::mem::take(&mut *self.events.lock())
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.lock().len()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.round.lock().state
    }

    /// Returns the hand waiting for a decision, if any.
    pub fn active_hand(&self) -> Option<HandSlot> {
        self.round.lock().active_hand().map(|(slot, _)| slot)
    }

    /// Returns the chips not currently wagered.
    pub fn bankroll(&self) -> usize {
        self.round.lock().ledger.bankroll()
    }

    /// Returns the amount wagered: the pending bet while betting, otherwise
    /// the sum over the player's hands.
    pub fn current_bet(&self) -> usize {
        self.round.lock().current_bet()
    }

    /// Returns the chip denominations making up [`Game::current_bet`].
    pub fn bet_chips(&self) -> Vec<usize> {
        self.round.lock().bet_chips()
    }

    /// Returns the player's hands: the main hand, then the split hand if any.
    pub fn hands(&self) -> Vec<Hand> {
        self.round
            .lock()
            .player_hands()
            .map(|(_, hand)| hand.clone())
            .collect()
    }

    /// Returns a clone of the dealer's hand.
    pub fn dealer_hand(&self) -> DealerHand {
        self.round.lock().dealer.clone()
    }

    /// Returns the result of the last settled round, until the next bet clears it.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.round.lock().last_result.clone()
    }

    /// Returns whether [`Game::hit`] would act.
    pub fn can_hit(&self) -> bool {
        self.round.lock().can_play()
    }

    /// Returns whether [`Game::stand`] would act.
    pub fn can_stand(&self) -> bool {
        self.round.lock().can_play()
    }

    /// Returns whether [`Game::double`] would act.
    pub fn can_double(&self) -> bool {
        self.round.lock().can_double()
    }

    /// Returns whether [`Game::split`] would act.
    pub fn can_split(&self) -> bool {
        self.round.lock().can_split()
    }

    /// Returns whether [`Game::start_round`] would deal.
    pub fn can_deal(&self) -> bool {
        self.round.lock().can_deal()
    }

    /// Returns the configured chip denominations the player can still afford.
    pub fn affordable_chips(&self) -> Vec<usize> {
        let round = self.round.lock();
        if !round.state.accepts_bets() {
            return Vec::new();
        }
        let bankroll = round.ledger.bankroll();
        drop(round);

        self.options
            .chips
            .iter()
            .copied()
            .filter(|&chip| chip <= bankroll)
            .collect()
    }

    fn acquire(&self, command: &str) -> Option<BusyGuard<'_>> {
        let guard = self.busy.try_acquire();
        if guard.is_none() {
            log::debug!("{command} ignored: table is busy");
        }
        guard
    }

    fn emit(&self, event: GameEvent) {
        self.events.lock().push(event);
    }

    /// Draws a card from the shoe and records who got it.
    fn draw(&self, to: Recipient) -> Card {
        let mut shoe = self.shoe.lock();
        let reshuffled = shoe.needs_rebuild();
        let card = shoe.draw();
        drop(shoe);

        if reshuffled {
            self.emit(GameEvent::Reshuffled);
        }
        log::debug!("dealt {card} to {to:?}");
        self.emit(GameEvent::CardDealt { to, card });
        card
    }
}

fn ignored(command: &str, state: GameState) -> CommandStatus {
    log::debug!("{command} ignored in state {state:?}");
    CommandStatus::Ignored
}
