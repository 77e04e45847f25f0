//! Tarot deck model and seeded draws.
//!
//! Indices 0–21 are the major arcana; 22–77 are the minor arcana in suit
//! order (wands, cups, swords, pentacles), fourteen ranks each.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::constants::seed::{DECK_SIZE, REVERSED_MODULUS};
use crate::config::TarotConfig;
use crate::seed::{daily_seed, Lcg};

const MAJOR_ARCANA: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

const RANKS: [&str; 14] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page",
    "Knight", "Queen", "King",
];

const MAJOR_COUNT: u32 = MAJOR_ARCANA.len() as u32;
const RANK_COUNT: u32 = RANKS.len() as u32;

/// Minor arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }
}

/// Which half of the deck a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "arcana", rename_all = "lowercase")]
pub enum Arcana {
    Major { number: u32 },
    Minor { suit: Suit, rank: u32 },
}

/// One card of the 78-card deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TarotCard {
    pub index: u32,
    pub name: String,
    #[serde(flatten)]
    pub arcana: Arcana,
}

impl TarotCard {
    /// Card at deck position `index`.
    ///
    /// # Panics
    /// Panics if `index >= 78`.
    pub fn from_index(index: u32) -> Self {
        assert!(index < DECK_SIZE, "tarot card index {} out of range 0..{}", index, DECK_SIZE);

        if index < MAJOR_COUNT {
            return Self {
                index,
                name: MAJOR_ARCANA[index as usize].to_string(),
                arcana: Arcana::Major { number: index },
            };
        }

        let minor = index - MAJOR_COUNT;
        let suit = Suit::ALL[(minor / RANK_COUNT) as usize];
        let rank = minor % RANK_COUNT;
        Self {
            index,
            name: format!("{} of {}", RANKS[rank as usize], suit.name()),
            arcana: Arcana::Minor {
                suit,
                rank: rank + 1,
            },
        }
    }

    /// Content-table key, e.g. `the-high-priestess` or `queen-of-cups`.
    pub fn key(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

/// A card drawn face-up or reversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub card: TarotCard,
    pub reversed: bool,
}

/// The card of the day for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDraw {
    pub date: NaiveDate,
    pub seed: u32,
    #[serde(flatten)]
    pub draw: Draw,
}

/// Position in a three-card spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadPosition {
    Past,
    Present,
    Future,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadCard {
    pub position: SpreadPosition,
    #[serde(flatten)]
    pub draw: Draw,
}

/// Seeded card selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarotReader {
    deck_size: u32,
}

impl Default for TarotReader {
    fn default() -> Self {
        Self {
            deck_size: DECK_SIZE,
        }
    }
}

impl TarotReader {
    /// Create from configuration. Deck size is clamped to the full deck.
    pub fn new(config: &TarotConfig) -> Self {
        Self {
            deck_size: config.deck_size.clamp(1, DECK_SIZE),
        }
    }

    /// Cards eligible for a draw.
    pub fn deck_size(&self) -> u32 {
        self.deck_size
    }

    /// Card and orientation selected by a raw seed.
    pub fn draw_from_seed(&self, seed: u32) -> Draw {
        Draw {
            card: TarotCard::from_index(seed % self.deck_size),
            reversed: seed % REVERSED_MODULUS == 0,
        }
    }

    /// The card of the day. Same date and identity always give the same card.
    pub fn daily_card(&self, date: NaiveDate, identity: &str) -> DailyDraw {
        let seed = daily_seed(date, identity);
        let draw = self.draw_from_seed(seed);
        tracing::debug!(
            %date,
            seed,
            card = %draw.card.name,
            reversed = draw.reversed,
            "daily card drawn"
        );
        DailyDraw { date, seed, draw }
    }

    /// Past/present/future spread of three distinct cards.
    ///
    /// Each card takes two LCG steps: one picks the index, the next the
    /// orientation. Repeated indices are skipped. The index comes from the
    /// high bits since the low bit of the LCG alternates every step.
    pub fn three_card_spread(&self, date: NaiveDate, identity: &str) -> Vec<SpreadCard> {
        let positions = [SpreadPosition::Past, SpreadPosition::Present, SpreadPosition::Future];
        let count = positions.len().min(self.deck_size as usize);
        let mut lcg = Lcg::new(daily_seed(date, identity));
        let mut used = HashSet::with_capacity(count);
        let mut spread = Vec::with_capacity(count);

        while spread.len() < count {
            let index = (lcg.next_value() >> 16) % self.deck_size;
            let reversed = lcg.next_value() % REVERSED_MODULUS == 0;
            if used.insert(index) {
                spread.push(SpreadCard {
                    position: positions[spread.len()],
                    draw: Draw {
                        card: TarotCard::from_index(index),
                        reversed,
                    },
                });
            }
        }

        spread
    }
}
