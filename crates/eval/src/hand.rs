// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Multisets of ranks.
//!
//! A [Hand] holds the cards dealt to the players and a [Pattern] the cards
//! required by a combination, both are stored as per rank counts so that
//! containment and subtraction are a pass over the counts.
use std::fmt;

use bspoker_cards::Rank;

/// Number of count slots, indexed by the rank value.
const SLOTS: usize = Rank::HIGHEST as usize + 1;

/// A multiset of ranks.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    counts: [u8; SLOTS],
    len: usize,
}

impl Hand {
    /// Creates a hand from a slice of ranks.
    ///
    /// Cards past 255 of the same rank are dropped, a hand dealt from a
    /// deck never has that many.
    pub fn new(ranks: &[Rank]) -> Self {
        ranks.iter().copied().collect()
    }

    /// The number of cards in the hand.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the hand has no cards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of cards of the given rank.
    #[inline]
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank as usize]
    }

    /// Checks if the hand has at least one card of the given rank.
    #[inline]
    pub fn contains(&self, rank: Rank) -> bool {
        self.count(rank) > 0
    }

    /// Checks if every rank in the pattern appears in this hand at least as
    /// many times as in the pattern. The empty pattern is always contained.
    #[inline]
    pub fn contains_all(&self, pattern: &Pattern) -> bool {
        self.counts
            .iter()
            .zip(&pattern.counts)
            .all(|(have, need)| need <= have)
    }

    /// Returns the hand left after removing the pattern cards.
    ///
    /// The pattern must be contained in the hand, see [Hand::contains_all].
    pub fn remove_match(&self, pattern: &Pattern) -> Hand {
        debug_assert!(
            self.contains_all(pattern),
            "pattern {} not in hand {}",
            pattern,
            self
        );

        let mut rest = *self;
        for (have, need) in rest.counts.iter_mut().zip(&pattern.counts) {
            let n = (*have).min(*need);
            *have -= n;
            rest.len -= n as usize;
        }

        rest
    }

    /// Returns the hand ranks from the highest to the lowest.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        expand(&self.counts)
    }
}

impl FromIterator<Rank> for Hand {
    fn from_iter<T: IntoIterator<Item = Rank>>(iter: T) -> Self {
        let mut hand = Hand::default();
        for r in iter {
            let count = &mut hand.counts[r as usize];
            if *count < u8::MAX {
                *count += 1;
                hand.len += 1;
            }
        }

        hand
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ranks(f, &self.counts)
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand(")?;
        write_ranks(f, &self.counts)?;
        write!(f, ")")
    }
}

/// A multiset of ranks a hand must contain for a combination to exist.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    counts: [u8; SLOTS],
    len: usize,
}

impl Pattern {
    /// Creates a pattern from a slice of ranks.
    pub fn new(ranks: &[Rank]) -> Self {
        ranks.iter().fold(Pattern::default(), |p, &r| p.with(r, 1))
    }

    /// Returns this pattern with `n` more cards of the given rank.
    #[inline]
    pub fn with(mut self, rank: Rank, n: u8) -> Self {
        self.counts[rank as usize] += n;
        self.len += n as usize;
        self
    }

    /// The number of cards in the pattern.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the pattern has no cards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of cards of the given rank.
    #[inline]
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank as usize]
    }

}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ranks(f, &self.counts)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern(")?;
        write_ranks(f, &self.counts)?;
        write!(f, ")")
    }
}

fn expand(counts: &[u8; SLOTS]) -> impl Iterator<Item = Rank> + '_ {
    Rank::ranks()
        .rev()
        .flat_map(move |r| std::iter::repeat_n(r, counts[r as usize] as usize))
}

fn write_ranks(f: &mut fmt::Formatter<'_>, counts: &[u8; SLOTS]) -> fmt::Result {
    for (idx, r) in expand(counts).enumerate() {
        if idx > 0 {
            write!(f, " ")?;
        }

        write!(f, "{r}")?;
    }

    Ok(())
}
