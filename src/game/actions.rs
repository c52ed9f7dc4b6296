use crate::error::{ActionError, CommandStatus};
use crate::event::{GameEvent, Recipient};
use crate::hand::{Hand, HandStatus};

use super::{Game, GameState, HandSlot, Round, ignored};

impl Game {
    /// Player action: Hit (draw a card into the active hand).
    ///
    /// A bust ends the hand; so does reaching 21, which stands automatically.
    /// Hitting rules out doubling and splitting for the rest of the hand.
    pub fn hit(&self) -> CommandStatus {
        let Some(_busy) = self.acquire("hit") else {
            return CommandStatus::Ignored;
        };

        let mut round = self.round.lock();
        let state = round.state;
        let Some((slot, _)) = round.active_hand() else {
            return ignored("hit", state);
        };

        let card = self.draw(Recipient::Player(slot));
        let Some(hand) = round.hand_mut(slot) else {
            return ignored("hit", state);
        };
        hand.mark_acted();
        hand.add_card(card);
        if hand.status() == HandStatus::Active && hand.value() == 21 {
            hand.set_status(HandStatus::Stand);
        }

        let status = hand.status();
        if status.is_finished() {
            self.emit(GameEvent::HandFinished { slot, status });
            self.advance_after_hand(&mut round);
        }
        drop(round);

        CommandStatus::Applied
    }

    /// Player action: Stand (keep the active hand).
    pub fn stand(&self) -> CommandStatus {
        let Some(_busy) = self.acquire("stand") else {
            return CommandStatus::Ignored;
        };

        let mut round = self.round.lock();
        let state = round.state;
        let Some((slot, _)) = round.active_hand() else {
            return ignored("stand", state);
        };

        if let Some(hand) = round.hand_mut(slot) {
            hand.set_status(HandStatus::Stand);
        }
        self.emit(GameEvent::HandFinished {
            slot,
            status: HandStatus::Stand,
        });
        self.advance_after_hand(&mut round);
        drop(round);

        CommandStatus::Applied
    }

    /// Player action: Double down (double the hand's bet, take exactly one card).
    ///
    /// Only valid as the first action on a hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the bankroll cannot match the hand's bet.
    pub fn double(&self) -> Result<CommandStatus, ActionError> {
        let Some(_busy) = self.acquire("double") else {
            return Ok(CommandStatus::Ignored);
        };

        let mut round = self.round.lock();
        let state = round.state;
        let Some((slot, hand)) = round.active_hand() else {
            return Ok(ignored("double", state));
        };
        if hand.has_acted() {
            return Ok(ignored("double", state));
        }

        let Some((hand, ledger)) = round.hand_and_ledger(slot) else {
            return Ok(ignored("double", state));
        };
        ledger.double(hand.bet_mut())?;
        self.emit(GameEvent::Doubled { slot });

        hand.mark_acted();
        hand.add_card(self.draw(Recipient::Player(slot)));
        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }

        self.emit(GameEvent::HandFinished {
            slot,
            status: hand.status(),
        });
        self.advance_after_hand(&mut round);
        drop(round);

        Ok(CommandStatus::Applied)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// Allowed once per round, before any other action on the main hand, when
    /// both cards have the same value. The split hand carries a copy of the
    /// main bet and each hand receives one new card, main first.
    ///
    /// # Errors
    ///
    /// Returns an error if the bankroll cannot match the bet.
    pub fn split(&self) -> Result<CommandStatus, ActionError> {
        let Some(_busy) = self.acquire("split") else {
            return Ok(CommandStatus::Ignored);
        };

        let mut round = self.round.lock();
        let state = round.state;
        let eligible = round.split.is_none()
            && matches!(round.active_hand(), Some((HandSlot::Main, hand))
                if !hand.has_acted() && hand.is_pair());
        if !eligible {
            return Ok(ignored("split", state));
        }

        let Some((main, ledger)) = round.hand_and_ledger(HandSlot::Main) else {
            return Ok(ignored("split", state));
        };
        let bet = ledger.stake_copy(main.bet())?;
        let Some(card) = main.take_split_card() else {
            return Ok(ignored("split", state));
        };
        self.emit(GameEvent::Split);
        log::info!("split into two hands of {} chips", bet.total());

        let mut split = Hand::from_split(card, bet);
        main.add_card(self.draw(Recipient::Player(HandSlot::Main)));
        split.add_card(self.draw(Recipient::Player(HandSlot::Split)));

        self.check_split_twenty_one(main, HandSlot::Main);
        self.check_split_twenty_one(&mut split, HandSlot::Split);
        let main_finished = main.status().is_finished();
        round.split = Some(split);

        if main_finished {
            self.advance_after_hand(&mut round);
        }
        drop(round);

        Ok(CommandStatus::Applied)
    }

    fn check_split_twenty_one(&self, hand: &mut Hand, slot: HandSlot) {
        if hand.is_twenty_one_in_two() {
            hand.set_status(HandStatus::Blackjack);
            self.emit(GameEvent::HandFinished {
                slot,
                status: HandStatus::Blackjack,
            });
        }
    }

    /// Moves play to the split hand if it still needs decisions, otherwise
    /// hands the round to the dealer.
    fn advance_after_hand(&self, round: &mut Round) {
        let split_waiting = round.state == GameState::PlayerTurn(HandSlot::Main)
            && round
                .split
                .as_ref()
                .is_some_and(|hand| hand.status() == HandStatus::Active);

        if split_waiting {
            round.state = GameState::PlayerTurn(HandSlot::Split);
            self.emit(GameEvent::TurnChanged(HandSlot::Split));
        } else {
            self.finish_round(round);
        }
    }
}
