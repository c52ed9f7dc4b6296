//! The multi-deck shoe the table deals from.

extern crate alloc;

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A shuffled supply of cards drawn from several identical decks.
///
/// When fewer than `reshuffle_below` cards remain at the time of a draw, the
/// shoe throws away what is left, rebuilds every deck and reshuffles before
/// handing out the card.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    reshuffle_below: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a built and shuffled shoe.
    ///
    /// At least one deck is used, and the rebuild threshold is clamped to the
    /// size of a full shoe so a draw can always be served.
    #[must_use]
    pub fn new(decks: u8, reshuffle_below: usize, seed: u64) -> Self {
        let decks = decks.max(1);
        let mut shoe = Self {
            cards: Vec::with_capacity(decks as usize * DECK_SIZE),
            decks,
            reshuffle_below: reshuffle_below.min(decks as usize * DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.build();
        shoe.shuffle();
        shoe
    }

    /// Replaces the contents with full decks in order: deck, then suit, then rank.
    pub fn build(&mut self) {
        self.cards.clear();

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }
    }

    /// Shuffles the shoe in place (Fisher–Yates).
    pub fn shuffle(&mut self) {
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Returns whether the next draw will rebuild the shoe first.
    #[must_use]
    pub fn needs_rebuild(&self) -> bool {
        self.cards.is_empty() || self.cards.len() < self.reshuffle_below
    }

    /// Draws the top card, rebuilding and reshuffling first if the shoe is low.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a rebuilt shoe always holds at least one deck"
    )]
    pub fn draw(&mut self) -> Card {
        if self.needs_rebuild() {
            log::info!(
                "shoe down to {} cards, rebuilding {} decks",
                self.cards.len(),
                self.decks
            );
            self.build();
            self.shuffle();
        }

        self.cards
            .pop()
            .expect("shoe is rebuilt before it can run dry")
    }

    /// Returns the cards left in the shoe; the next card drawn is the last one.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replaces the shoe contents, keeping the last card on top.
    ///
    /// Useful for stacking the shoe in tests and demos. The rebuild threshold
    /// still applies on the next draw.
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks in a full shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the size of a freshly built shoe.
    #[must_use]
    pub const fn full_size(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }
}
