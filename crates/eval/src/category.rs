// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Combination categories.
use serde::{Deserialize, Serialize};
use std::fmt;

use bspoker_cards::Rank;

/// The number of consecutive ranks in a straight.
pub const STRAIGHT_LEN: u8 = 5;

/// A combination category.
///
/// Categories are listed from the most to the least likely to exist in a
/// deal, the discriminant is the category position in a probability vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// A single card.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two pairs, the anchor rank is the higher pair.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks, the anchor rank is the top of the run.
    Straight,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Four of a kind and a pair.
    Evens,
    /// Four of a kind and a three of a kind.
    FullerHouse,
    /// Five cards of the same rank.
    FiveOfAKind,
    /// Five of a kind and a three of a kind.
    Odds,
    /// Five of a kind and a four of a kind.
    FullestHouse,
    /// Six cards of the same rank.
    SixOfAKind,
    /// Six of a kind and a four of a kind.
    BrimmingHouse,
    /// Seven cards of the same rank.
    SevenOfAKind,
    /// Eight cards of the same rank.
    EightOfAKind,
}

/// How a category is matched against a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The anchor rank or a wildcard.
    High,
    /// n cards made of anchor ranks and wildcards.
    OfAKind(u8),
    /// n consecutive ranks ending at the anchor, any of them can be a wildcard.
    Straight(u8),
    /// A primary of a kind of the anchor rank followed by a secondary category
    /// on the cards left, for a rank in the given scope.
    Compound {
        /// Size of the anchor of a kind.
        primary: u8,
        /// Category for the cards left after the primary.
        secondary: Category,
        /// Which ranks the secondary can be anchored to.
        scope: Scope,
    },
}

/// The ranks a compound secondary category can be anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Ranks strictly lower than the primary rank.
    Lower,
    /// Any rank but the primary rank.
    Other,
}

impl Scope {
    /// Checks if `rank` is in scope for a primary anchored to `primary`.
    #[inline]
    pub fn includes(self, primary: Rank, rank: Rank) -> bool {
        match self {
            Scope::Lower => rank < primary,
            Scope::Other => rank != primary,
        }
    }
}

impl Shape {
    /// The minimum number of cards a hand needs for the shape to match.
    pub fn min_len(self) -> usize {
        match self {
            Shape::High => 0,
            Shape::OfAKind(n) | Shape::Straight(n) => n as usize,
            Shape::Compound {
                primary, secondary, ..
            } => primary as usize + secondary.shape().min_len(),
        }
    }
}

impl Category {
    /// The number of categories.
    pub const COUNT: usize = 16;

    /// Returns all categories in probability vector order.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> + Clone {
        use Category::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            FullHouse,
            FourOfAKind,
            Evens,
            FullerHouse,
            FiveOfAKind,
            Odds,
            FullestHouse,
            SixOfAKind,
            BrimmingHouse,
            SevenOfAKind,
            EightOfAKind,
        ]
        .into_iter()
    }

    /// The category position in a probability vector.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The category name.
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::Evens => "Evens",
            Category::FullerHouse => "Fuller house",
            Category::FiveOfAKind => "Five of a kind",
            Category::Odds => "Odds",
            Category::FullestHouse => "Fullest house",
            Category::SixOfAKind => "Six of a kind",
            Category::BrimmingHouse => "Brimming house",
            Category::SevenOfAKind => "Seven of a kind",
            Category::EightOfAKind => "Eight of a kind",
        }
    }

    /// A two letters code for the category, used by narrow tables.
    pub fn code(self) -> &'static str {
        match self {
            Category::HighCard => "HC",
            Category::Pair => "1P",
            Category::TwoPair => "2P",
            Category::ThreeOfAKind => "3K",
            Category::Straight => "ST",
            Category::FullHouse => "FH",
            Category::FourOfAKind => "4K",
            Category::Evens => "EV",
            Category::FullerHouse => "FR",
            Category::FiveOfAKind => "5K",
            Category::Odds => "OD",
            Category::FullestHouse => "FT",
            Category::SixOfAKind => "6K",
            Category::BrimmingHouse => "BH",
            Category::SevenOfAKind => "7K",
            Category::EightOfAKind => "8K",
        }
    }

    /// How this category is matched.
    pub fn shape(self) -> Shape {
        use Category::*;
        use Scope::*;

        let compound = |primary, secondary, scope| Shape::Compound {
            primary,
            secondary,
            scope,
        };

        match self {
            HighCard => Shape::High,
            Pair => Shape::OfAKind(2),
            TwoPair => compound(2, Pair, Lower),
            ThreeOfAKind => Shape::OfAKind(3),
            Straight => Shape::Straight(STRAIGHT_LEN),
            FullHouse => compound(3, Pair, Other),
            FourOfAKind => Shape::OfAKind(4),
            Evens => compound(4, Pair, Other),
            FullerHouse => compound(4, ThreeOfAKind, Other),
            FiveOfAKind => Shape::OfAKind(5),
            Odds => compound(5, ThreeOfAKind, Other),
            FullestHouse => compound(5, FourOfAKind, Other),
            SixOfAKind => Shape::OfAKind(6),
            BrimmingHouse => compound(6, FourOfAKind, Other),
            SevenOfAKind => Shape::OfAKind(7),
            EightOfAKind => Shape::OfAKind(8),
        }
    }

    /// Checks if this category can be anchored to the given rank.
    ///
    /// A straight needs the ranks below its anchor, so it can only be
    /// anchored from the six upwards.
    pub fn can_anchor(self, rank: Rank) -> bool {
        match self.shape() {
            Shape::Straight(n) => rank.down(n - 1).is_some(),
            _ => true,
        }
    }

    /// The number of ranks this category can be anchored to.
    pub fn anchors(self) -> usize {
        Rank::ranks().filter(|&r| self.can_anchor(r)).count()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
