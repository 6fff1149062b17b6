// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcard rules and category predicates.
//!
//! Every predicate takes a hand and a candidate anchor rank and checks if the
//! category exists in the hand for that rank. The patterns a category can be
//! made of are generated from the deck composition: a rank has at most
//! [Rules::copies] cards and so do the wildcards, so an n of a kind is any
//! split of n cards between anchor cards and wildcards within those bounds.
use serde::{Deserialize, Serialize};

use bspoker_cards::{Deck, Rank};

use crate::{
    category::{Category, Shape},
    hand::{Hand, Pattern},
};

/// The deck composition and the wildcard rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    wildcard: Rank,
    copies: u8,
}

impl Default for Rules {
    /// Deuces are wild in a deck with four cards of each rank.
    fn default() -> Self {
        Self {
            wildcard: Rank::Deuce,
            copies: Deck::COPIES,
        }
    }
}

impl Rules {
    /// Creates rules with the given wildcard rank and copies of each rank.
    pub fn new(wildcard: Rank, copies: u8) -> Self {
        Self { wildcard, copies }
    }

    /// The wildcard rank.
    pub fn wildcard(&self) -> Rank {
        self.wildcard
    }

    /// The number of cards of each rank in the deck.
    pub fn copies(&self) -> u8 {
        self.copies
    }

    /// A new deck for these rules.
    pub fn deck(&self) -> Deck {
        Deck::with_copies(self.copies)
    }

    /// Returns the patterns for n cards of the given rank.
    ///
    /// Patterns go from the most to the least anchor cards, a pair of sevens
    /// is `7 7`, `7 2` or `2 2`.
    pub fn of_a_kind_patterns(&self, n: u8, c: Rank) -> impl Iterator<Item = Pattern> {
        let wildcard = self.wildcard;
        let lo = n.saturating_sub(self.copies);
        let hi = n.min(self.copies);

        (lo..=hi)
            .rev()
            .map(move |x| Pattern::default().with(c, x).with(wildcard, n - x))
    }

    /// Returns the patterns for n consecutive ranks ending at the given rank.
    ///
    /// Each subset of at most `copies` slots, and never all of them, is
    /// replaced by wildcards. There are no patterns when the run would go
    /// below the lowest rank.
    pub fn straight_patterns(&self, n: u8, c: Rank) -> impl Iterator<Item = Pattern> {
        let wildcard = self.wildcard;
        let max_wild = self.copies.min(n.saturating_sub(1)) as u32;

        let slots = (0..n).map_while(|i| c.down(i)).collect::<Vec<_>>();
        let masks = if n > 0 && slots.len() == n as usize {
            0..(1u32 << n)
        } else {
            0..0
        };

        masks
            .filter(move |mask| mask.count_ones() <= max_wild)
            .map(move |mask| {
                slots
                    .iter()
                    .enumerate()
                    .fold(Pattern::default(), |p, (idx, &slot)| {
                        if mask & (1 << idx) != 0 {
                            p.with(wildcard, 1)
                        } else {
                            p.with(slot, 1)
                        }
                    })
            })
    }

    /// Checks if the category exists in the hand for the anchor rank `c`.
    pub fn holds(&self, category: Category, hand: &Hand, c: Rank) -> bool {
        let shape = category.shape();
        if hand.len() < shape.min_len() {
            return false;
        }

        match shape {
            Shape::High => hand.contains(c) || hand.contains(self.wildcard),
            Shape::OfAKind(n) => self
                .of_a_kind_patterns(n, c)
                .any(|p| hand.contains_all(&p)),
            Shape::Straight(n) => self
                .straight_patterns(n, c)
                .any(|p| hand.contains_all(&p)),
            Shape::Compound {
                primary,
                secondary,
                scope,
            } => self
                .of_a_kind_patterns(primary, c)
                .filter(|p| hand.contains_all(p))
                .any(|p| {
                    let rest = hand.remove_match(&p);
                    Rank::ranks()
                        .filter(|&i| scope.includes(c, i))
                        .any(|i| self.holds(secondary, &rest, i))
                }),
        }
    }

    /// Checks if the category exists in the hand for any rank.
    pub fn exists(&self, category: Category, hand: &Hand) -> bool {
        Rank::ranks().any(|c| self.holds(category, hand, c))
    }

    /// Returns the ranks the category can be anchored to in the hand.
    pub fn anchors(&self, category: Category, hand: &Hand) -> Vec<Rank> {
        Rank::ranks()
            .filter(|&c| self.holds(category, hand, c))
            .collect()
    }

    /// Returns every category with the ranks it can be anchored to in the
    /// hand, categories that do not exist have no anchors.
    pub fn classify(&self, hand: &Hand) -> Vec<(Category, Vec<Rank>)> {
        Category::categories()
            .map(|category| (category, self.anchors(category, hand)))
            .collect()
    }

    /// The hand has the anchor rank or a wildcard.
    pub fn high(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::HighCard, hand, c)
    }

    /// Two cards of rank `c`.
    pub fn pair(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::Pair, hand, c)
    }

    /// A pair of rank `c` and a pair of a lower rank.
    pub fn two_pair(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::TwoPair, hand, c)
    }

    /// Three cards of rank `c`.
    pub fn three_of_a_kind(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::ThreeOfAKind, hand, c)
    }

    /// Five consecutive ranks from `c` down.
    pub fn straight(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::Straight, hand, c)
    }

    /// Three cards of rank `c` and a pair of another rank.
    pub fn full_house(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::FullHouse, hand, c)
    }

    /// Four cards of rank `c`.
    pub fn four_of_a_kind(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::FourOfAKind, hand, c)
    }

    /// Four cards of rank `c` and a pair of another rank.
    pub fn evens(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::Evens, hand, c)
    }

    /// Four cards of rank `c` and three of another rank.
    pub fn fuller_house(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::FullerHouse, hand, c)
    }

    /// Five cards of rank `c`.
    pub fn five_of_a_kind(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::FiveOfAKind, hand, c)
    }

    /// Five cards of rank `c` and three of another rank.
    pub fn odds(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::Odds, hand, c)
    }

    /// Five cards of rank `c` and four of another rank.
    pub fn fullest_house(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::FullestHouse, hand, c)
    }

    /// Six cards of rank `c`.
    pub fn six_of_a_kind(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::SixOfAKind, hand, c)
    }

    /// Six cards of rank `c` and four of another rank.
    pub fn brimming_house(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::BrimmingHouse, hand, c)
    }

    /// Seven cards of rank `c`.
    pub fn seven_of_a_kind(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::SevenOfAKind, hand, c)
    }

    /// Eight cards of rank `c`.
    pub fn eight_of_a_kind(&self, hand: &Hand, c: Rank) -> bool {
        self.holds(Category::EightOfAKind, hand, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;
    use ahash::AHashSet;

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::new(ranks)
    }

    #[test]
    fn of_a_kind_patterns() {
        let rules = Rules::default();

        let pairs = rules.of_a_kind_patterns(2, Seven).collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                Pattern::new(&[Seven, Seven]),
                Pattern::new(&[Seven, Deuce]),
                Pattern::new(&[Deuce, Deuce]),
            ]
        );

        // Number of patterns for 2 to 8 cards.
        let counts = (2..=8)
            .map(|n| rules.of_a_kind_patterns(n, Ace).count())
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![3, 4, 5, 4, 3, 2, 1]);

        // Five of a kind always needs at least one anchor card and one wildcard.
        for p in rules.of_a_kind_patterns(5, King) {
            assert_eq!(p.len(), 5);
            assert!(p.count(King) >= 1 && p.count(King) <= 4);
            assert!(p.count(Deuce) >= 1);
        }

        let eights = rules.of_a_kind_patterns(8, Nine).collect::<Vec<_>>();
        assert_eq!(eights, vec![Pattern::default().with(Nine, 4).with(Deuce, 4)]);

        assert_eq!(rules.of_a_kind_patterns(9, Nine).count(), 0);
    }

    #[test]
    fn straight_patterns() {
        let rules = Rules::default();

        let patterns = rules.straight_patterns(5, Ten).collect::<Vec<_>>();
        assert_eq!(patterns.len(), 31);

        // All patterns are distinct, there are 1 + 5 + 10 + 10 + 5 of them.
        let unique = patterns.iter().copied().collect::<AHashSet<_>>();
        assert_eq!(unique.len(), 31);

        let mut by_wilds = [0; 6];
        for p in &patterns {
            assert_eq!(p.len(), 5);
            by_wilds[p.count(Deuce) as usize] += 1;
        }
        assert_eq!(by_wilds, [1, 5, 10, 10, 5, 0]);

        assert!(patterns.contains(&Pattern::new(&[Ten, Nine, Eight, Seven, Six])));
        assert!(patterns.contains(&Pattern::new(&[Deuce, Deuce, Deuce, Deuce, Six])));
        assert!(patterns.contains(&Pattern::new(&[Ten, Deuce, Deuce, Deuce, Deuce])));

        // A run can't go below the deuce.
        assert_eq!(rules.straight_patterns(5, Five).count(), 0);
        assert_eq!(rules.straight_patterns(5, Six).count(), 31);
    }

    #[test]
    fn high() {
        let rules = Rules::default();
        assert!(rules.high(&hand(&[Nine]), Nine));
        assert!(!rules.high(&hand(&[Nine]), Ten));
        assert!(rules.high(&hand(&[Deuce]), Ten));
        assert!(!rules.high(&Hand::default(), Ten));
    }

    #[test]
    fn pair() {
        let rules = Rules::default();

        for ranks in [[Seven, Seven], [Seven, Deuce], [Deuce, Deuce]] {
            assert!(rules.pair(&hand(&ranks), Seven), "{ranks:?}");
        }

        assert!(!rules.pair(&hand(&[Trey, Five]), Seven));
        assert!(!rules.pair(&hand(&[Seven, Five]), Seven));
        assert!(!rules.pair(&hand(&[Seven]), Seven));
    }

    #[test]
    fn two_pair() {
        let rules = Rules::default();
        let h = hand(&[Nine, Nine, Four, Four, Ace]);
        assert!(rules.two_pair(&h, Nine));

        // The anchor is the higher pair.
        assert!(!rules.two_pair(&h, Four));

        // A wildcard can complete either pair but not both with a single card.
        assert!(rules.two_pair(&hand(&[Nine, Deuce, Four, Four]), Nine));
        assert!(!rules.two_pair(&hand(&[Nine, Deuce, Four]), Nine));

        // Two wildcards make a lower pair of deuces.
        assert!(rules.two_pair(&hand(&[Nine, Nine, Deuce, Deuce]), Nine));
        assert!(!rules.two_pair(&hand(&[Nine, Nine, Deuce, Deuce]), Deuce));
    }

    #[test]
    fn two_pair_of_wildcards() {
        let rules = Rules::default();

        // Using `J J` as the pair leaves `2 2` for the lower pair.
        let h = hand(&[Jack, Jack, Deuce, Deuce]);
        assert!(rules.two_pair(&h, Jack));

        // Using `2 2` as the pair of treys leaves jacks that are not lower.
        assert!(!rules.two_pair(&h, Trey));
    }

    #[test]
    fn three_and_four_of_a_kind() {
        let rules = Rules::default();
        let h = hand(&[Queen, Queen, Deuce, Five]);
        assert!(rules.three_of_a_kind(&h, Queen));
        assert!(!rules.four_of_a_kind(&h, Queen));
        assert!(!rules.three_of_a_kind(&h, Five));

        let h = hand(&[Queen, Deuce, Deuce, Deuce]);
        assert!(rules.four_of_a_kind(&h, Queen));
        assert!(rules.three_of_a_kind(&h, Ace));
    }

    #[test]
    fn five_to_eight_of_a_kind() {
        let rules = Rules::default();

        // Four anchor cards and four wildcards make every of a kind.
        let h = hand(&[Eight, Eight, Eight, Eight, Deuce, Deuce, Deuce, Deuce]);
        assert!(rules.eight_of_a_kind(&h, Eight));
        assert!(rules.seven_of_a_kind(&h, Eight));
        assert!(rules.six_of_a_kind(&h, Eight));
        assert!(rules.five_of_a_kind(&h, Eight));

        // Wildcards alone don't make a five of a kind.
        let h = hand(&[Deuce, Deuce, Deuce, Deuce, Ace]);
        assert!(rules.five_of_a_kind(&h, Ace));
        assert!(!rules.five_of_a_kind(&h, King));

        // Under length hands never match.
        let h = hand(&[Eight, Eight, Eight, Eight, Deuce, Deuce, Deuce]);
        assert!(!rules.eight_of_a_kind(&h, Eight));
        assert!(rules.seven_of_a_kind(&h, Eight));
    }

    #[test]
    fn straight() {
        let rules = Rules::default();
        let h = hand(&[Six, Five, Four, Trey, Deuce]);
        assert!(rules.straight(&h, Six));

        // No straight can end below the six.
        for c in [Deuce, Trey, Four, Five] {
            assert!(!rules.straight(&h, c));
            assert!(!rules.straight(&hand(&[Deuce, Deuce, Deuce, Deuce, c]), c));
        }

        // Wildcards fill the gaps.
        let h = hand(&[Ace, King, Deuce, Jack, Deuce]);
        assert!(rules.straight(&h, Ace));
        assert!(!rules.straight(&h, King));

        let h = hand(&[Deuce, Deuce, Deuce, Deuce, Nine]);
        for c in [Nine, Ten, Jack, Queen, King] {
            assert!(rules.straight(&h, c), "{c}");
        }
        assert!(!rules.straight(&h, Ace));
        assert!(!rules.straight(&h, Eight));

        // Short hands never make a straight.
        assert!(!rules.straight(&hand(&[Ace, King, Queen, Jack]), Ace));
    }

    #[test]
    fn full_house() {
        let rules = Rules::default();
        let h = hand(&[Nine, Nine, Nine, Four, Four]);
        assert!(rules.full_house(&h, Nine));
        assert!(!rules.full_house(&h, Four));

        // The pair can't be of the same rank.
        let h = hand(&[Nine, Nine, Nine, Nine, Ace]);
        assert!(!rules.full_house(&h, Nine));

        // The pair can be of a higher rank.
        let h = hand(&[Five, Five, Five, King, Deuce]);
        assert!(rules.full_house(&h, Five));
        assert!(!rules.full_house(&h, King));
    }

    #[test]
    fn compound_houses() {
        let rules = Rules::default();

        let h = hand(&[Ten, Ten, Ten, Ten, Trey, Trey]);
        assert!(rules.evens(&h, Ten));
        assert!(!rules.evens(&h, Trey));
        assert!(!rules.fuller_house(&h, Ten));

        let h = hand(&[Ten, Ten, Ten, Deuce, Trey, Trey, Trey]);
        assert!(rules.fuller_house(&h, Ten));
        assert!(rules.fuller_house(&h, Trey));

        let h = hand(&[Ten, Ten, Ten, Ten, Deuce, Trey, Trey, Trey]);
        assert!(rules.odds(&h, Ten));
        assert!(!rules.fullest_house(&h, Ten));

        let h = hand(&[Ten, Ten, Ten, Ten, Deuce, Trey, Trey, Trey, Deuce]);
        assert!(rules.fullest_house(&h, Ten));
        assert!(!rules.brimming_house(&h, Ten));

        let h = hand(&[Ten, Ten, Ten, Ten, Deuce, Deuce, Trey, Trey, Trey, Trey]);
        assert!(rules.brimming_house(&h, Ten));
        assert!(rules.brimming_house(&h, Trey));
        assert!(!rules.brimming_house(&h, Ace));
    }

    #[test]
    fn full_deck() {
        let rules = Rules::default();
        let h = rules.deck().into_iter().collect::<Hand>();

        for category in Category::categories() {
            let anchors = rules.anchors(category, &h);
            let expected = match category {
                // Every rank can anchor these.
                Category::HighCard
                | Category::Pair
                | Category::ThreeOfAKind
                | Category::FullHouse
                | Category::FourOfAKind
                | Category::Evens
                | Category::FullerHouse => 13,
                Category::Straight => 9,
                // Five deuces or a lower pair than deuces don't exist.
                _ => 12,
            };

            assert_eq!(anchors.len(), expected, "{category}");
        }
    }

    #[test]
    fn classify() {
        let rules = Rules::default();
        let h = hand(&[Nine, Nine, Nine, Four, Four]);

        let classes = rules.classify(&h);
        assert_eq!(classes.len(), Category::COUNT);

        let anchors = |c: Category| classes[c.index()].1.clone();
        assert_eq!(anchors(Category::HighCard), vec![Four, Nine]);
        assert_eq!(anchors(Category::Pair), vec![Four, Nine]);
        assert_eq!(anchors(Category::TwoPair), vec![Nine]);
        assert_eq!(anchors(Category::ThreeOfAKind), vec![Nine]);
        assert_eq!(anchors(Category::FullHouse), vec![Nine]);
        assert!(anchors(Category::Straight).is_empty());
        assert!(!rules.exists(Category::FourOfAKind, &h));
        assert!(rules.exists(Category::FullHouse, &h));
    }

    #[test]
    fn wildcard_anchor() {
        // Deuces anchor like any other rank, a pair of deuces only needs two
        // deuces while three deuces are needed for three of a kind.
        let rules = Rules::default();
        let h = hand(&[Deuce, Deuce, Ace]);
        assert!(rules.pair(&h, Deuce));
        assert!(!rules.three_of_a_kind(&h, Deuce));
        assert!(rules.three_of_a_kind(&h, Ace));
    }

    #[test]
    fn custom_rules() {
        // Aces wild with two copies of each rank.
        let rules = Rules::new(Ace, 2);
        assert_eq!(rules.deck().count(), 26);

        let counts = (2..=4)
            .map(|n| rules.of_a_kind_patterns(n, Nine).count())
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![3, 2, 1]);

        let h = hand(&[Nine, Ace]);
        assert!(rules.pair(&h, Nine));
        assert!(rules.high(&hand(&[Ace]), Trey));
        assert!(!rules.high(&hand(&[Deuce]), Trey));

        // At most two slots can be wildcards.
        assert_eq!(rules.straight_patterns(5, Ten).count(), 16);
    }
}
