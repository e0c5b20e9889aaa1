//! Card identities, difficulty tiers, and deck construction.
//!
//! ## Identity
//!
//! The finite food-item alphabet. Declared order is load-bearing: each tier's
//! alphabet is a prefix of `Identity::ALL`, and the opponent's deterministic
//! pair selection orders by identity index.
//!
//! ## Deck
//!
//! An ordered sequence of cards built once per game: every identity in the
//! tier's alphabet appears exactly twice, positions are the contiguous range
//! `0..2k`, and the order is a uniform shuffle from the engine's RNG. Decks
//! are never mutated after construction; play references them by position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rng::GameRng;

/// A card's face: one of the twelve food items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    Bread,
    Carrot,
    Cheese,
    Chicken,
    Corn,
    Eggs,
    Flour,
    Milk,
    OliveOil,
    Peas,
    Salt,
    Sauce,
}

impl Identity {
    /// All identities in declared order. Tier alphabets are prefixes of this.
    pub const ALL: [Identity; 12] = [
        Identity::Bread,
        Identity::Carrot,
        Identity::Cheese,
        Identity::Chicken,
        Identity::Corn,
        Identity::Eggs,
        Identity::Flour,
        Identity::Milk,
        Identity::OliveOil,
        Identity::Peas,
        Identity::Salt,
        Identity::Sauce,
    ];

    /// Stable index within the declared order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name, matching the presentation layer's asset names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Identity::Bread => "bread",
            Identity::Carrot => "carrot",
            Identity::Cheese => "cheese",
            Identity::Chicken => "chicken",
            Identity::Corn => "corn",
            Identity::Eggs => "eggs",
            Identity::Flour => "flour",
            Identity::Milk => "milk",
            Identity::OliveOil => "olive_oil",
            Identity::Peas => "peas",
            Identity::Salt => "salt",
            Identity::Sauce => "sauce",
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Difficulty tier, determining the alphabet size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// Number of distinct identities at this tier.
    #[must_use]
    pub const fn alphabet_size(self) -> usize {
        match self {
            Tier::Easy => 8,
            Tier::Medium => 10,
            Tier::Hard => 12,
        }
    }

    /// The tier's alphabet: a prefix of `Identity::ALL`, so harder tiers are
    /// supersets of easier ones.
    #[must_use]
    pub fn alphabet(self) -> &'static [Identity] {
        &Identity::ALL[..self.alphabet_size()]
    }

    /// Number of cards in a deck at this tier.
    #[must_use]
    pub const fn deck_size(self) -> usize {
        2 * self.alphabet_size()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Error returned when a tier string is not `easy`, `medium`, or `hard`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTierError {
    input: String,
}

impl fmt::Display for ParseTierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown difficulty tier {:?} (expected easy, medium, or hard)",
            self.input
        )
    }
}

impl std::error::Error for ParseTierError {}

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Tier::Easy),
            "medium" => Ok(Tier::Medium),
            "hard" => Ok(Tier::Hard),
            _ => Err(ParseTierError {
                input: s.to_string(),
            }),
        }
    }
}

/// A single card: identity plus fixed position. Immutable once the deck is
/// built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub identity: Identity,
    pub position: usize,
}

/// A shuffled, duplicated, uniquely-positioned card sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck for the tier: duplicate the alphabet, shuffle uniformly,
    /// assign positions in shuffled order.
    ///
    /// Re-invocable at any time; the RNG stream advances, so successive
    /// builds produce independent decks.
    #[must_use]
    pub fn build(tier: Tier, rng: &mut GameRng) -> Self {
        let mut identities: Vec<Identity> = tier
            .alphabet()
            .iter()
            .flat_map(|&identity| [identity, identity])
            .collect();
        rng.shuffle(&mut identities);

        let cards = identities
            .into_iter()
            .enumerate()
            .map(|(position, identity)| Card { identity, position })
            .collect();

        Self { cards }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards (only true before the first setup).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in position order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The identity at a position.
    #[must_use]
    pub fn identity_at(&self, position: usize) -> Identity {
        self.cards[position].identity
    }

    /// Match evaluation: do the cards at two positions share an identity?
    ///
    /// Pure and symmetric. Callers uphold the preconditions (distinct,
    /// in-range, unmatched positions) by construction.
    #[must_use]
    pub fn is_match(&self, a: usize, b: usize) -> bool {
        debug_assert!(a != b, "match evaluation needs two distinct positions");
        debug_assert!(a < self.len() && b < self.len());
        self.identity_at(a) == self.identity_at(b)
    }

    /// Positions holding a given identity, in position order.
    pub fn positions_of(&self, identity: Identity) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .filter(move |card| card.identity == identity)
            .map(|card| card.position)
    }
}
