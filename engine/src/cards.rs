// ═══════════════════════════════════════════════════════════════════════
// Cards, hands and the draw deck
// ═══════════════════════════════════════════════════════════════════════

use crate::types::CardType;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub card_type: CardType,
}

impl Card {
    pub fn new(card_type: CardType) -> Self {
        Card { card_type }
    }

    pub fn card_type(&self) -> CardType { self.card_type }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} card", self.card_type)
    }
}

// ── Hand ───────────────────────────────────────────────────────────────

/// A player's cards. The front card is the next one consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    pub fn from_types(types: &[CardType]) -> Self {
        Hand { cards: types.iter().copied().map(Card::new).collect() }
    }

    pub fn cards(&self) -> &[Card] { &self.cards }
    pub fn first(&self) -> Option<&Card> { self.cards.first() }
    pub fn len(&self) -> usize { self.cards.len() }
    pub fn is_empty(&self) -> bool { self.cards.is_empty() }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first card equal to `card`. Returns false if none matched.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }
}

// ── Deck ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// `copies` of every card type, in `CardType::ALL` order.
    pub fn standard(copies: usize) -> Self {
        let cards = CardType::ALL.iter()
            .flat_map(|&t| std::iter::repeat(Card::new(t)).take(copies))
            .collect();
        Deck { cards }
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize { self.cards.len() }
    pub fn is_empty(&self) -> bool { self.cards.is_empty() }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Move up to `count` cards into `hand`. Returns how many were dealt.
    pub fn deal(&mut self, hand: &mut Hand, count: usize) -> usize {
        let mut dealt = 0;
        while dealt < count {
            match self.draw() {
                Some(card) => hand.add_card(card),
                None => break,
            }
            dealt += 1;
        }
        dealt
    }
}
