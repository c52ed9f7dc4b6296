use alloc::vec::Vec;

use crate::event::{GameEvent, Recipient};
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::options::RoundingMode;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Game, GameState, HandSlot, Round};

/// The dealer draws until reaching this total, soft or hard.
const DEALER_STANDS_ON: u8 = 17;

/// Blackjack winnings on top of the returned stake (3:2).
const BLACKJACK_PAYS: f64 = 1.5;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Game {
    /// Plays the dealer's hand and pays out the round.
    ///
    /// Called by whichever command finished the player's last hand; nothing
    /// else can run until it returns.
    pub(super) fn finish_round(&self, round: &mut Round) {
        round.state = GameState::DealerTurn;
        self.dealer_play(round);

        let result = self.settle(round);
        round.ledger.credit(result.total_payout);
        log::info!(
            "round settled: paid {} (net {}), bankroll {}",
            result.total_payout,
            result.net,
            round.ledger.bankroll()
        );
        round.last_result = Some(result.clone());
        self.emit(GameEvent::Settled(result));

        if round.ledger.bankroll() == 0 {
            log::info!("bankroll empty, game over");
            round.state = GameState::GameOver;
            self.emit(GameEvent::GameOver);
        } else {
            round.state = GameState::Settled;
        }
    }

    /// Reveals the hole card and draws while the dealer is under 17.
    ///
    /// An unsplit hand that busted or made blackjack settles without dealer
    /// draws. A split round always plays the dealer out.
    fn dealer_play(&self, round: &mut Round) {
        round.dealer.reveal_hole();
        if let Some(&hole) = round.dealer.cards().get(1) {
            self.emit(GameEvent::HoleRevealed(hole));
        }

        let main_settled = round.main.as_ref().is_some_and(|hand| {
            matches!(hand.status(), HandStatus::Bust | HandStatus::Blackjack)
        });
        if round.split.is_none() && main_settled {
            return;
        }

        while round.dealer.value() < DEALER_STANDS_ON {
            let card = self.draw(Recipient::Dealer { face_down: false });
            round.dealer.add_card(card);
        }
    }

    /// Compares each hand with the dealer and totals the payouts.
    fn settle(&self, round: &Round) -> RoundResult {
        let natural_round = round.split.is_none();
        let dealer = &round.dealer;

        let hands: Vec<HandResult> = round
            .player_hands()
            .map(|(slot, hand)| self.settle_hand(slot, hand, dealer, natural_round))
            .collect();

        let total_bet: usize = hands.iter().map(|hand| hand.bet).sum();
        let total_payout: usize = hands.iter().map(|hand| hand.payout).sum();
        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total_payout as isize - total_bet as isize;

        RoundResult {
            hands,
            total_payout,
            net,
            dealer_value: dealer.value(),
            dealer_bust: dealer.is_bust(),
        }
    }

    fn settle_hand(
        &self,
        slot: HandSlot,
        hand: &Hand,
        dealer: &DealerHand,
        natural_round: bool,
    ) -> HandResult {
        let bet = hand.bet().total();
        let player_value = hand.value();
        let dealer_value = dealer.value();

        let (outcome, payout) = match hand.status() {
            HandStatus::Bust => (HandOutcome::Bust, 0),
            HandStatus::Blackjack if natural_round && dealer.is_blackjack() => {
                (HandOutcome::Push, bet)
            }
            HandStatus::Blackjack => (HandOutcome::Blackjack, bet + self.blackjack_winnings(bet)),
            HandStatus::Stand | HandStatus::Active => {
                if dealer.is_bust() {
                    (HandOutcome::DealerBust, bet * 2)
                } else if dealer_value > player_value {
                    (HandOutcome::Lose, 0)
                } else if dealer_value < player_value {
                    (HandOutcome::Win, bet * 2)
                } else {
                    (HandOutcome::Push, bet)
                }
            }
        };

        HandResult {
            slot,
            outcome,
            bet,
            payout,
            player_value,
        }
    }

    fn blackjack_winnings(&self, bet: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = (bet as f64) * BLACKJACK_PAYS;
        round_amount(winnings, self.options.rounding_blackjack)
    }
}
