// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card ranks and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "parallel")]
mod parallel;

/// Card rank.
///
/// The discriminant is the rank numeric value, from 2 for the deuce to 14
/// for the ace, so that ranks compare and index the way cards are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of distinct ranks.
    pub const COUNT: usize = 13;

    /// The lowest rank.
    pub const LOWEST: Rank = Rank::Deuce;

    /// The highest rank.
    pub const HIGHEST: Rank = Rank::Ace;

    /// Returns all ranks from the deuce to the ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> + Clone {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value in 2..=14.
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Creates a rank from its numeric value, returns None if the value is
    /// not in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        use Rank::*;
        let rank = match value {
            2 => Deuce,
            3 => Trey,
            4 => Four,
            5 => Five,
            6 => Six,
            7 => Seven,
            8 => Eight,
            9 => Nine,
            10 => Ten,
            11 => Jack,
            12 => Queen,
            13 => King,
            14 => Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// Returns the rank `n` steps below this one, if any.
    pub fn down(self, n: u8) -> Option<Rank> {
        self.value().checked_sub(n).and_then(Rank::from_value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Error returned when parsing a rank from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rank '{0}', expected one of 2-14 or 2 3 4 5 6 7 8 9 T J Q K A")]
pub struct ParseRankError(String);

impl FromStr for Rank {
    type Err = ParseRankError;

    /// Parses a rank from its face letter or its numeric value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.trim().to_ascii_uppercase().as_str() {
            "T" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            other => other.parse::<u8>().ok().and_then(Rank::from_value),
        };

        rank.ok_or_else(|| ParseRankError(s.to_string()))
    }
}

/// Parses a whitespace or comma separated list of ranks, e.g. `"9 9 9 4 4"`
/// or `"A,K,2"`.
pub fn parse_ranks(s: &str) -> Result<Vec<Rank>, ParseRankError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// A cards deck.
///
/// Suits play no role in the game so the deck stores one entry per card with
/// each rank repeated a fixed number of times.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Rank>,
}

impl Deck {
    /// The number of cards in the default deck.
    pub const SIZE: usize = 52;

    /// The number of copies of each rank in the default deck.
    pub const COPIES: u8 = 4;

    /// Creates a deck with `copies` cards of each rank.
    pub fn with_copies(copies: u8) -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| std::iter::repeat_n(r, copies as usize))
            .collect();
        Self { cards }
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for `samples` random hands of k cards.
    ///
    /// Each hand is drawn without replacement so that all the k-subsets of the
    /// deck are equally likely. Does nothing if k is larger than the deck.
    pub fn sample<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&[Rank]),
    {
        if k > self.cards.len() {
            return;
        }

        let mut h = Vec::with_capacity(k);
        for _ in 0..samples {
            h.clear();
            h.extend(self.cards.choose_multiple(rng, k).copied());
            f(&h);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::with_copies(Self::COPIES)
    }
}

impl IntoIterator for Deck {
    type Item = Rank;
    type IntoIter = std::vec::IntoIter<Rank>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
