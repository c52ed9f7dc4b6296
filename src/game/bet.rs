use crate::error::{BetError, CommandStatus};
use crate::event::{GameEvent, Recipient};
use crate::hand::{DealerHand, Hand, HandStatus};

use super::{Game, GameState, HandSlot, ignored};

impl Game {
    /// Places a chip of `amount` on the pending bet.
    ///
    /// After a settled round this also clears the old cards from the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or the bankroll cannot cover it;
    /// the table is left untouched in that case.
    pub fn place_bet(&self, amount: usize) -> Result<CommandStatus, BetError> {
        let Some(_busy) = self.acquire("place bet") else {
            return Ok(CommandStatus::Ignored);
        };

        let mut round = self.round.lock();
        if !round.state.accepts_bets() {
            return Ok(ignored("place bet", round.state));
        }

        round.ledger.place(amount)?;
        round.open_betting();
        drop(round);

        Ok(CommandStatus::Applied)
    }

    /// Takes the most recently placed chip back into the bankroll.
    pub fn reduce_bet(&self) -> CommandStatus {
        let Some(_busy) = self.acquire("reduce bet") else {
            return CommandStatus::Ignored;
        };

        let mut round = self.round.lock();
        if !round.state.accepts_bets() {
            return ignored("reduce bet", round.state);
        }

        if round.ledger.reduce().is_none() {
            return ignored("reduce bet", round.state);
        }
        round.open_betting();
        drop(round);

        CommandStatus::Applied
    }

    /// Returns the whole pending bet to the bankroll.
    pub fn clear_bet(&self) -> CommandStatus {
        let Some(_busy) = self.acquire("clear bet") else {
            return CommandStatus::Ignored;
        };

        let mut round = self.round.lock();
        if !round.state.accepts_bets() {
            return ignored("clear bet", round.state);
        }

        if round.ledger.clear() == 0 {
            return ignored("clear bet", round.state);
        }
        round.open_betting();
        drop(round);

        CommandStatus::Applied
    }

    /// Deals a new round with the pending bet.
    ///
    /// Two cards go to the player and two to the dealer, alternating, the
    /// dealer's second card face down. A player 21 settles at once: a push
    /// against a dealer 21, otherwise a blackjack.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NoBet`] if no chips have been placed.
    pub fn start_round(&self) -> Result<CommandStatus, BetError> {
        let Some(_busy) = self.acquire("start round") else {
            return Ok(CommandStatus::Ignored);
        };

        let mut round = self.round.lock();
        if !round.state.accepts_bets() {
            return Ok(ignored("start round", round.state));
        }
        if round.ledger.bet().is_empty() {
            return Err(BetError::NoBet);
        }

        round.open_betting();
        round.state = GameState::Dealing;

        let bet = round.ledger.take_bet();
        log::info!("dealing a round for {} chips", bet.total());
        self.emit(GameEvent::RoundStarted { bet: bet.total() });
        let mut hand = Hand::new(bet);
        round.split = None;
        round.dealer.clear();
        self.deal_initial(&mut hand, &mut round.dealer);

        let player_natural = hand.value() == 21;
        if player_natural {
            hand.set_status(HandStatus::Blackjack);
        }
        round.main = Some(hand);

        if player_natural {
            self.emit(GameEvent::HandFinished {
                slot: HandSlot::Main,
                status: HandStatus::Blackjack,
            });
            self.finish_round(&mut round);
        } else {
            round.state = GameState::PlayerTurn(HandSlot::Main);
        }
        drop(round);

        Ok(CommandStatus::Applied)
    }

    fn deal_initial(&self, hand: &mut Hand, dealer: &mut DealerHand) {
        let player = Recipient::Player(HandSlot::Main);

        hand.add_card(self.draw(player));
        dealer.add_card(self.draw(Recipient::Dealer { face_down: false }));
        hand.add_card(self.draw(player));
        dealer.add_card(self.draw(Recipient::Dealer { face_down: true }));
    }
}
