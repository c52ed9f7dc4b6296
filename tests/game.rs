//! Game integration tests.

use blackjack_table::{
    ActionError, BetError, Card, CommandStatus, Game, GameEvent, GameOptions, GameState,
    HandOutcome, HandSlot, HandStatus, Recipient, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Stacks the shoe so the given cards come out in order, with enough filler
/// underneath that the shoe is not rebuilt mid-round.
fn stack_shoe(game: &Game, draws: &[Card]) {
    let mut cards = vec![card(Suit::Clubs, 2); 60];
    cards.extend(draws.iter().rev());
    game.shoe.lock().replace_cards(cards);
}

fn game_with_bankroll(bankroll: usize) -> Game {
    Game::new(GameOptions::default().with_starting_bankroll(bankroll), 7)
}

fn bet_and_deal(game: &Game, amount: usize, draws: &[Card]) {
    stack_shoe(game, draws);
    assert_eq!(game.place_bet(amount), Ok(CommandStatus::Applied));
    assert_eq!(game.start_round(), Ok(CommandStatus::Applied));
}

#[test]
fn new_game_starts_in_betting_with_full_shoe() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.state(), GameState::Betting);
    assert_eq!(game.bankroll(), 1000);
    assert_eq!(game.current_bet(), 0);
    assert_eq!(game.cards_remaining(), 208);
    assert!(game.hands().is_empty());
    assert!(!game.can_deal());
}

#[test]
fn betting_moves_chips_between_bankroll_and_bet() {
    let game = game_with_bankroll(1000);

    assert_eq!(game.place_bet(25), Ok(CommandStatus::Applied));
    assert_eq!(game.place_bet(100), Ok(CommandStatus::Applied));
    assert_eq!(game.bankroll(), 875);
    assert_eq!(game.current_bet(), 125);
    assert_eq!(game.bet_chips(), vec![25, 100]);

    assert_eq!(game.reduce_bet(), CommandStatus::Applied);
    assert_eq!(game.bankroll(), 975);
    assert_eq!(game.bet_chips(), vec![25]);

    assert_eq!(game.clear_bet(), CommandStatus::Applied);
    assert_eq!(game.bankroll(), 1000);
    assert_eq!(game.current_bet(), 0);
    assert!(game.bet_chips().is_empty());

    assert_eq!(game.reduce_bet(), CommandStatus::Ignored);
    assert_eq!(game.clear_bet(), CommandStatus::Ignored);
}

#[test]
fn bet_errors_leave_state_unchanged() {
    let game = game_with_bankroll(100);
    let before = game.snapshot();

    assert_eq!(game.place_bet(101), Err(BetError::InsufficientFunds));
    assert_eq!(game.place_bet(0), Err(BetError::ZeroBet));
    assert_eq!(game.start_round(), Err(BetError::NoBet));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn affordable_chips_follow_the_bankroll() {
    let game = game_with_bankroll(120);
    assert_eq!(game.affordable_chips(), vec![5, 25, 100]);

    assert!(game.place_bet(100).unwrap().is_applied());
    assert_eq!(game.affordable_chips(), vec![5]);
}

#[test]
fn dealer_bust_pays_even_money() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 10),   // player
            card(Suit::Clubs, 6),     // dealer up
            card(Suit::Diamonds, 8),  // player
            card(Suit::Spades, 10),   // dealer hole
            card(Suit::Hearts, 9),    // dealer draw
        ],
    );

    assert_eq!(game.bankroll(), 900);
    assert_eq!(game.current_bet(), 100);
    assert_eq!(game.state(), GameState::PlayerTurn(HandSlot::Main));

    assert_eq!(game.stand(), CommandStatus::Applied);
    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.bankroll(), 1100);
    assert_eq!(game.current_bet(), 0);

    let result = game.last_result().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_value, 25);
    assert_eq!(result.hands[0].outcome, HandOutcome::DealerBust);
    assert_eq!(result.net, 100);
}

#[test]
fn dealer_higher_takes_the_bet() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 9),   // dealer hole
        ],
    );

    assert!(game.stand().is_applied());
    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.net, -100);
    assert_eq!(game.bankroll(), 900);
}

#[test]
fn equal_totals_push() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 8),   // dealer hole
        ],
    );

    assert!(game.stand().is_applied());
    assert_eq!(
        game.last_result().unwrap().hands[0].outcome,
        HandOutcome::Push
    );
    assert_eq!(game.bankroll(), 1000);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 1),    // dealer up
            card(Suit::Diamonds, 9), // player
            card(Suit::Spades, 6),   // dealer hole
        ],
    );

    assert!(game.stand().is_applied());
    let dealer = game.dealer_hand();
    assert_eq!(dealer.len(), 2);
    assert!(dealer.is_soft());
    assert_eq!(dealer.value(), 17);
    assert_eq!(game.bankroll(), 1100);
}

#[test]
fn natural_blackjack_pays_three_to_two() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Spades, 1),   // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Hearts, 13),  // player
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.bankroll(), 1150);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.dealer_hand().len(), 2);

    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 250);
}

#[test]
fn blackjack_against_dealer_twenty_one_pushes() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Spades, 1),   // player
            card(Suit::Clubs, 1),    // dealer up
            card(Suit::Hearts, 13),  // player
            card(Suit::Diamonds, 12), // dealer hole
        ],
    );

    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(
        game.last_result().unwrap().hands[0].outcome,
        HandOutcome::Push
    );
    assert_eq!(game.bankroll(), 1000);
}

#[test]
fn blackjack_on_odd_bet_rounds_down() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        5,
        &[
            card(Suit::Spades, 1),   // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Hearts, 10),  // player
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    assert_eq!(game.bankroll(), 995 + 5 + 7);
}

#[test]
fn hit_to_twenty_one_stands_automatically() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 5),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 6), // player
            card(Suit::Spades, 8),   // dealer hole
            card(Suit::Hearts, 10),  // player hit
        ],
    );

    assert_eq!(game.hit(), CommandStatus::Applied);
    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.hands()[0].status(), HandStatus::Stand);
    assert_eq!(game.hands()[0].value(), 21);
    assert_eq!(game.bankroll(), 1100);
}

#[test]
fn hitting_after_a_bust_changes_nothing() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 6), // player
            card(Suit::Spades, 8),   // dealer hole
            card(Suit::Clubs, 10),   // player hit
        ],
    );

    assert_eq!(game.hit(), CommandStatus::Applied);
    assert_eq!(game.hands()[0].status(), HandStatus::Bust);
    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.bankroll(), 900);

    let before = game.snapshot();
    assert_eq!(game.hit(), CommandStatus::Ignored);
    assert_eq!(game.stand(), CommandStatus::Ignored);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn double_down_doubles_the_wager_and_draws_once() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 5),   // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 6), // player
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 10),  // double draw
            card(Suit::Clubs, 9),    // dealer draw
        ],
    );

    assert!(game.can_double());
    assert_eq!(game.double(), Ok(CommandStatus::Applied));
    assert_eq!(game.state(), GameState::Settled);

    let hands = game.hands();
    assert_eq!(hands[0].len(), 3);
    assert_eq!(hands[0].bet().total(), 200);
    assert_eq!(hands[0].bet().chips(), &[100, 100]);

    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].bet, 200);
    assert_eq!(result.hands[0].payout, 400);
    assert_eq!(game.bankroll(), 1200);
}

#[test]
fn double_needs_matching_chips() {
    let game = game_with_bankroll(150);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 5),   // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 6), // player
            card(Suit::Spades, 10),  // dealer hole
        ],
    );

    assert!(!game.can_double());
    let before = game.snapshot();
    assert_eq!(game.double(), Err(ActionError::InsufficientFunds));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn actions_after_a_hit_rule_out_double_and_split() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 2),   // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 2), // player
            card(Suit::Spades, 8),   // dealer hole
            card(Suit::Clubs, 3),    // player hit
        ],
    );

    assert!(game.can_split());
    assert_eq!(game.hit(), CommandStatus::Applied);
    assert!(!game.can_split());
    assert!(!game.can_double());
    assert_eq!(game.split(), Ok(CommandStatus::Ignored));
    assert_eq!(game.double(), Ok(CommandStatus::Ignored));
    assert_eq!(game.hands()[0].len(), 3);
    assert_eq!(game.bankroll(), 900);
}

#[test]
fn split_pair_plays_two_hands() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 7),   // dealer hole
            card(Suit::Clubs, 3),    // main hand after split
            card(Suit::Hearts, 10),  // split hand after split
            card(Suit::Spades, 9),   // main hand hit
        ],
    );

    assert!(game.can_split());
    assert_eq!(game.split(), Ok(CommandStatus::Applied));
    assert_eq!(game.bankroll(), 800);
    assert_eq!(game.current_bet(), 200);
    assert!(!game.can_split());

    let hands = game.hands();
    assert_eq!(hands.len(), 2);
    assert_eq!(
        hands[0].cards(),
        &[card(Suit::Hearts, 8), card(Suit::Clubs, 3)]
    );
    assert_eq!(
        hands[1].cards(),
        &[card(Suit::Diamonds, 8), card(Suit::Hearts, 10)]
    );
    assert_eq!(game.active_hand(), Some(HandSlot::Main));

    assert!(game.hit().is_applied());
    assert_eq!(game.hands()[0].value(), 20);
    assert_eq!(game.stand(), CommandStatus::Applied);
    assert_eq!(game.state(), GameState::PlayerTurn(HandSlot::Split));

    assert_eq!(game.stand(), CommandStatus::Applied);
    assert_eq!(game.state(), GameState::Settled);

    let result = game.last_result().unwrap();
    assert_eq!(result.hands.len(), 2);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[1].outcome, HandOutcome::Win);
    assert_eq!(result.total_payout, 400);
    assert_eq!(game.bankroll(), 1200);
}

#[test]
fn split_hands_settle_independently() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 8),   // dealer hole
            card(Suit::Clubs, 10),   // main hand after split
            card(Suit::Hearts, 10),  // split hand after split
            card(Suit::Spades, 5),   // main hand hit: bust
        ],
    );

    assert!(game.split().unwrap().is_applied());
    assert!(game.hit().is_applied());
    assert_eq!(game.hands()[0].status(), HandStatus::Bust);
    assert_eq!(game.state(), GameState::PlayerTurn(HandSlot::Split));

    assert!(game.stand().is_applied());
    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Bust);
    assert_eq!(result.hands[1].outcome, HandOutcome::Push);
    assert_eq!(result.total_payout, 100);
    assert_eq!(game.bankroll(), 900);
}

#[test]
fn dealer_draws_after_split_hands_all_bust() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 6),   // dealer hole
            card(Suit::Spades, 10),  // main hand after split
            card(Suit::Hearts, 10),  // split hand after split
            card(Suit::Clubs, 10),   // main hand hit: bust
            card(Suit::Diamonds, 10), // split hand hit: bust
            card(Suit::Hearts, 5),   // dealer draw
        ],
    );

    assert!(game.split().unwrap().is_applied());
    assert!(game.hit().is_applied());
    assert_eq!(game.state(), GameState::PlayerTurn(HandSlot::Split));
    assert!(game.hit().is_applied());
    assert_eq!(game.state(), GameState::Settled);

    let dealer = game.dealer_hand();
    assert_eq!(dealer.len(), 3);
    assert_eq!(dealer.cards()[2], card(Suit::Hearts, 5));

    let result = game.last_result().unwrap();
    assert_eq!(result.dealer_value, 21);
    assert!(!result.dealer_bust);
    assert_eq!(result.hands[0].outcome, HandOutcome::Bust);
    assert_eq!(result.hands[1].outcome, HandOutcome::Bust);
    assert_eq!(result.total_payout, 0);
    assert_eq!(game.bankroll(), 800);
}

#[test]
fn dealer_draws_after_split_blackjack_and_bust() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 1),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 1), // player
            card(Suit::Spades, 6),   // dealer hole
            card(Suit::Clubs, 13),   // main hand after split
            card(Suit::Hearts, 5),   // split hand after split
            card(Suit::Spades, 10),  // split hand hit: hard 16
            card(Suit::Diamonds, 10), // split hand hit: bust
            card(Suit::Hearts, 9),   // dealer draw: bust
        ],
    );

    assert!(game.split().unwrap().is_applied());
    assert_eq!(game.state(), GameState::PlayerTurn(HandSlot::Split));
    assert!(game.hit().is_applied());
    assert_eq!(game.hands()[1].value(), 16);
    assert!(game.hit().is_applied());
    assert_eq!(game.state(), GameState::Settled);

    assert_eq!(game.dealer_hand().len(), 3);
    let result = game.last_result().unwrap();
    assert_eq!(result.dealer_value, 25);
    assert!(result.dealer_bust);
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert!(result.hands[0].outcome.is_win());
    assert_eq!(result.hands[1].outcome, HandOutcome::Bust);
    assert!(!result.hands[1].outcome.is_win());
    assert_eq!(game.bankroll(), 800 + 250);
}

#[test]
fn twenty_one_after_split_pays_as_blackjack() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 1),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 1), // player
            card(Suit::Spades, 7),   // dealer hole
            card(Suit::Clubs, 13),   // main hand after split
            card(Suit::Hearts, 9),   // split hand after split
        ],
    );

    assert!(game.split().unwrap().is_applied());
    assert_eq!(game.hands()[0].status(), HandStatus::Blackjack);
    assert_eq!(game.state(), GameState::PlayerTurn(HandSlot::Split));

    assert!(game.stand().is_applied());
    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 250);
    assert_eq!(result.hands[1].outcome, HandOutcome::Win);
    assert_eq!(game.bankroll(), 1250);
}

#[test]
fn double_on_split_hand_only_doubles_that_hand() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 9), // player
            card(Suit::Spades, 7),   // dealer hole
            card(Suit::Clubs, 10),   // main hand after split
            card(Suit::Hearts, 2),   // split hand after split
            card(Suit::Spades, 9),   // split hand double
        ],
    );

    assert!(game.split().unwrap().is_applied());
    assert!(game.stand().is_applied());
    assert!(game.can_double());
    assert_eq!(game.double(), Ok(CommandStatus::Applied));

    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].bet, 100);
    assert_eq!(result.hands[1].bet, 200);
    assert_eq!(result.total_payout, 600);
    assert_eq!(game.bankroll(), 1000 - 300 + 600);
}

#[test]
fn split_needs_matching_chips() {
    let game = game_with_bankroll(150);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 8), // player
            card(Suit::Spades, 7),   // dealer hole
        ],
    );

    assert!(!game.can_split());
    assert_eq!(game.split(), Err(ActionError::InsufficientFunds));
    assert_eq!(game.hands().len(), 1);
    assert_eq!(game.bankroll(), 50);
}

#[test]
fn split_rejects_unmatched_cards() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 9), // player
            card(Suit::Spades, 7),   // dealer hole
        ],
    );

    assert_eq!(game.split(), Ok(CommandStatus::Ignored));
    assert_eq!(game.bankroll(), 900);
}

#[test]
fn face_cards_split_as_a_pair() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 12), // player
            card(Suit::Spades, 7),   // dealer hole
        ],
    );

    assert!(game.can_split());
}

#[test]
fn commands_outside_their_phase_are_ignored() {
    let game = game_with_bankroll(1000);
    assert_eq!(game.hit(), CommandStatus::Ignored);
    assert_eq!(game.stand(), CommandStatus::Ignored);
    assert_eq!(game.double(), Ok(CommandStatus::Ignored));
    assert_eq!(game.split(), Ok(CommandStatus::Ignored));

    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 8),   // dealer hole
        ],
    );

    let before = game.snapshot();
    assert_eq!(game.place_bet(25), Ok(CommandStatus::Ignored));
    assert_eq!(game.reduce_bet(), CommandStatus::Ignored);
    assert_eq!(game.clear_bet(), CommandStatus::Ignored);
    assert_eq!(game.start_round(), Ok(CommandStatus::Ignored));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn next_bet_clears_the_settled_table() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 9), // player
            card(Suit::Spades, 8),   // dealer hole
        ],
    );
    assert!(game.stand().is_applied());
    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.hands().len(), 1);
    assert!(!game.can_deal());

    assert_eq!(game.place_bet(25), Ok(CommandStatus::Applied));
    assert_eq!(game.state(), GameState::Betting);
    assert!(game.hands().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert!(game.last_result().is_none());
    assert!(game.can_deal());
}

#[test]
fn losing_the_last_chip_ends_the_game() {
    let game = game_with_bankroll(100);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 9),   // dealer hole
        ],
    );
    assert!(game.stand().is_applied());

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.bankroll(), 0);
    assert_eq!(game.place_bet(5), Ok(CommandStatus::Ignored));
    assert!(game.drain_events().contains(&GameEvent::GameOver));

    assert_eq!(game.new_game(), CommandStatus::Applied);
    assert_eq!(game.state(), GameState::Betting);
    assert_eq!(game.bankroll(), 100);
    assert_eq!(game.cards_remaining(), 208);
    assert!(game.hands().is_empty());
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::NewGame { bankroll: 100 }]
    );
}

#[test]
fn reveal_guard_blocks_commands() {
    let game = game_with_bankroll(1000);

    let guard = game.begin_reveal().unwrap();
    assert!(game.is_busy());
    assert!(game.snapshot().busy);
    assert!(game.begin_reveal().is_none());
    assert_eq!(game.place_bet(25), Ok(CommandStatus::Ignored));
    assert_eq!(game.new_game(), CommandStatus::Ignored);
    assert_eq!(game.bankroll(), 1000);

    drop(guard);
    assert!(!game.is_busy());
    assert_eq!(game.place_bet(25), Ok(CommandStatus::Applied));
}

#[test]
fn deal_emits_events_in_order() {
    let game = game_with_bankroll(1000);
    let draws = [
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 9),    // dealer up
        card(Suit::Diamonds, 7), // player
        card(Suit::Spades, 8),   // dealer hole
    ];
    bet_and_deal(&game, 100, &draws);

    let main = Recipient::Player(HandSlot::Main);
    assert_eq!(
        game.drain_events(),
        vec![
            GameEvent::RoundStarted { bet: 100 },
            GameEvent::CardDealt { to: main, card: draws[0] },
            GameEvent::CardDealt {
                to: Recipient::Dealer { face_down: false },
                card: draws[1],
            },
            GameEvent::CardDealt { to: main, card: draws[2] },
            GameEvent::CardDealt {
                to: Recipient::Dealer { face_down: true },
                card: draws[3],
            },
        ]
    );
    assert!(game.drain_events().is_empty());

    assert!(game.stand().is_applied());
    let events = game.drain_events();
    assert_eq!(
        events[0],
        GameEvent::HandFinished {
            slot: HandSlot::Main,
            status: HandStatus::Stand,
        }
    );
    assert_eq!(events[1], GameEvent::HoleRevealed(draws[3]));
    assert!(matches!(events.last(), Some(GameEvent::Settled(_))));
}

#[test]
fn snapshot_hides_the_hole_card() {
    let game = game_with_bankroll(1000);
    bet_and_deal(
        &game,
        100,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 8),   // dealer hole
        ],
    );

    let snapshot = game.snapshot();
    assert_eq!(snapshot.dealer.cards, vec![card(Suit::Clubs, 9)]);
    assert_eq!(snapshot.dealer.hidden, 1);
    assert_eq!(snapshot.dealer.value, 9);
    assert!(!snapshot.dealer.hole_revealed);
    assert_eq!(snapshot.hands[0].value, 17);
    assert!(snapshot.hands[0].active);
    assert!(snapshot.can_hit);
    assert!(!snapshot.can_deal);

    assert!(game.stand().is_applied());
    let snapshot = game.snapshot();
    assert_eq!(snapshot.dealer.hidden, 0);
    assert_eq!(snapshot.dealer.value, 17);
    assert!(!snapshot.can_hit);
}

#[test]
fn low_shoe_is_rebuilt_before_the_deal() {
    let game = game_with_bankroll(1000);
    game.shoe.lock().replace_cards(vec![card(Suit::Hearts, 5); 51]);

    assert!(game.place_bet(100).unwrap().is_applied());
    assert!(game.start_round().unwrap().is_applied());

    assert_eq!(game.cards_remaining(), 208 - 4);
    let events = game.drain_events();
    assert_eq!(events[1], GameEvent::Reshuffled);
    assert_eq!(
        events.iter().filter(|e| **e == GameEvent::Reshuffled).count(),
        1
    );
}
