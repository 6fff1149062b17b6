// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo simulation of BS Poker deals.
//!
//! A simulation draws random hands from the deck, checks every category for
//! every anchor rank, and counts how many times each category holds. The
//! counts are then normalized by the number of ranks a category can be
//! anchored to, so that a probability is the chance that the category exists
//! for a given rank among the cards in play.
use log::{debug, info};
use rand::{prelude::*, rngs::StdRng};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::{
    ops::{self, RangeInclusive},
    time::Instant,
};

use bspoker_eval::{Category, Deck, Hand, Rank, Rules};

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicU64, Ordering};

/// Simulation errors.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The simulation parameters can't be satisfied.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of hands drawn for each hand size.
    pub iterations: usize,
    /// Seed for reproducible runs, a random seed is used if none.
    pub seed: Option<u64>,
    /// Number of parallel tasks, more than one requires the `parallel` feature.
    pub tasks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: 100,
            seed: None,
            tasks: 1,
        }
    }
}

/// Calls `f` with each category that holds in the hand, once for every rank
/// the category is anchored to.
fn for_each_match<F>(rules: &Rules, hand: &Hand, mut f: F)
where
    F: FnMut(Category),
{
    for c in Rank::ranks() {
        for category in Category::categories() {
            if rules.holds(category, hand, c) {
                f(category);
            }
        }
    }
}

/// Categories occurrence counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u64; Category::COUNT],
    iterations: u64,
}

impl Tally {
    /// Counts the categories in a hand.
    pub fn record(&mut self, rules: &Rules, hand: &Hand) {
        for_each_match(rules, hand, |category| {
            self.counts[category.index()] += 1;
        });

        self.iterations += 1;
    }

    /// The number of times a category was found, summed over anchor ranks.
    pub fn count(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    /// The number of hands recorded.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// The category count averaged over the ranks it can be anchored to.
    pub fn normalized(&self, category: Category) -> f64 {
        self.count(category) as f64 / category.anchors() as f64
    }

    /// The probability that the category exists for a given rank.
    ///
    /// Zero if no hands have been recorded.
    pub fn probability(&self, category: Category) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }

        let trials = category.anchors() as u64 * self.iterations;
        self.count(category) as f64 / trials as f64
    }

    /// The probabilities for all categories.
    pub fn probabilities(&self) -> Probabilities {
        let mut probs = [0.0; Category::COUNT];
        for category in Category::categories() {
            probs[category.index()] = self.probability(category);
        }

        Probabilities(probs)
    }
}

impl ops::AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        for (l, r) in self.counts.iter_mut().zip(rhs.counts) {
            *l += r;
        }

        self.iterations += rhs.iterations;
    }
}

/// Tally shared by a parallel task.
#[cfg(feature = "parallel")]
#[derive(Default)]
struct AtomicTally {
    counts: [AtomicU64; Category::COUNT],
    iterations: AtomicU64,
}

#[cfg(feature = "parallel")]
impl AtomicTally {
    fn record(&self, rules: &Rules, hand: &Hand) {
        for_each_match(rules, hand, |category| {
            self.counts[category.index()].fetch_add(1, Ordering::Relaxed);
        });

        self.iterations.fetch_add(1, Ordering::Relaxed);
    }

    fn load(&self) -> Tally {
        Tally {
            counts: std::array::from_fn(|idx| self.counts[idx].load(Ordering::Relaxed)),
            iterations: self.iterations.load(Ordering::Relaxed),
        }
    }
}

/// A probability for each category in [Category::categories] order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Probabilities([f64; Category::COUNT]);

impl Probabilities {
    /// The probability for a category.
    pub fn get(&self, category: Category) -> f64 {
        self.0[category.index()]
    }

    /// Iterates categories and their probabilities.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::categories().map(move |c| (c, self.get(c)))
    }

    /// The probabilities as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl ops::Index<Category> for Probabilities {
    type Output = f64;

    fn index(&self, category: Category) -> &Self::Output {
        &self.0[category.index()]
    }
}

impl Serialize for Probabilities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, prob) in self.iter() {
            map.serialize_entry(&category, &prob)?;
        }

        map.end()
    }
}

/// The probabilities for a hand size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    /// Number of cards in play.
    pub handsize: usize,
    /// Number of hands drawn.
    pub iterations: u64,
    /// Category probabilities.
    pub probabilities: Probabilities,
}

/// Simulates random deals for given rules.
#[derive(Debug, Clone)]
pub struct Simulation {
    rules: Rules,
    deck: Deck,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl Simulation {
    /// Creates a simulation with the deck for the given rules.
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            deck: rules.deck(),
        }
    }

    /// The simulation rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Counts the categories in `iterations` random hands of `handsize` cards.
    ///
    /// Fails if the deck doesn't have enough cards for a hand.
    pub fn tally<R>(&self, rng: &mut R, handsize: usize, iterations: usize) -> Result<Tally, SimError>
    where
        R: Rng + ?Sized,
    {
        self.check_handsize(handsize)?;

        let now = Instant::now();
        let mut tally = Tally::default();
        self.deck.sample(rng, iterations, handsize, |ranks| {
            tally.record(&self.rules, &Hand::new(ranks));
        });

        debug!(
            "Tally {iterations} hands of {handsize} cards in {:.3}s",
            now.elapsed().as_secs_f64()
        );

        Ok(tally)
    }

    /// Returns the categories probabilities for `iterations` random hands of
    /// `handsize` cards.
    pub fn simulate<R>(
        &self,
        rng: &mut R,
        handsize: usize,
        iterations: usize,
    ) -> Result<Probabilities, SimError>
    where
        R: Rng + ?Sized,
    {
        Ok(self.tally(rng, handsize, iterations)?.probabilities())
    }

    /// Counts the categories using `tasks` parallel tasks each with its own
    /// counters that are added up when all tasks are done.
    ///
    /// With a seed the counts only depend on the seed and the number of tasks.
    #[cfg(feature = "parallel")]
    pub fn par_tally(
        &self,
        tasks: usize,
        handsize: usize,
        iterations: usize,
        seed: Option<u64>,
    ) -> Result<Tally, SimError> {
        if tasks == 0 {
            return Err(SimError::InvalidConfiguration(
                "tasks must be at least 1".to_string(),
            ));
        }

        self.check_handsize(handsize)?;

        // Create per task counters to avoid contention.
        let task_tallies = (0..tasks)
            .map(|_| AtomicTally::default())
            .collect::<Vec<_>>();

        let now = Instant::now();
        self.deck
            .par_sample(tasks, iterations, handsize, seed, |task_id, ranks| {
                task_tallies[task_id].record(&self.rules, &Hand::new(ranks));
            });

        debug!(
            "Tally {iterations} hands of {handsize} cards with {tasks} tasks in {:.3}s",
            now.elapsed().as_secs_f64()
        );

        // Aggregate counters.
        let mut tally = Tally::default();
        for t in &task_tallies {
            tally += t.load();
        }

        Ok(tally)
    }

    /// Counts the categories for one hand size with the given configuration.
    pub fn run(&self, config: &Config, handsize: usize) -> Result<Tally, SimError> {
        let seed = config.seed.map(|s| hand_seed(s, handsize));

        match config.tasks {
            0 => Err(SimError::InvalidConfiguration(
                "tasks must be at least 1".to_string(),
            )),
            1 => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };

                self.tally(&mut rng, handsize, config.iterations)
            }
            #[cfg(feature = "parallel")]
            tasks => self.par_tally(tasks, handsize, config.iterations, seed),
            #[cfg(not(feature = "parallel"))]
            tasks => Err(SimError::InvalidConfiguration(format!(
                "{tasks} tasks requires the parallel feature"
            ))),
        }
    }

    /// Returns the probabilities for each hand size in the range.
    ///
    /// Each hand size is seeded from the configuration seed and the hand size,
    /// so a row is the same as a [Simulation::run] with the same configuration.
    pub fn sweep(
        &self,
        config: &Config,
        handsizes: RangeInclusive<usize>,
    ) -> Result<Vec<SweepRow>, SimError> {
        if !handsizes.is_empty() {
            self.check_handsize(*handsizes.end())?;
        }

        let now = Instant::now();
        let rows = handsizes
            .map(|handsize| {
                let start = Instant::now();
                let tally = self.run(config, handsize)?;

                info!(
                    "Hand size {handsize:>2}: {} hands in {:.3}s",
                    tally.iterations(),
                    start.elapsed().as_secs_f64()
                );

                Ok(SweepRow {
                    handsize,
                    iterations: tally.iterations(),
                    probabilities: tally.probabilities(),
                })
            })
            .collect::<Result<Vec<_>, SimError>>()?;

        info!(
            "Sweep of {} hand sizes in {:.3}s",
            rows.len(),
            now.elapsed().as_secs_f64()
        );

        Ok(rows)
    }

    fn check_handsize(&self, handsize: usize) -> Result<(), SimError> {
        if handsize > self.deck.count() {
            return Err(SimError::InvalidConfiguration(format!(
                "hand size {handsize} is larger than the {} cards deck",
                self.deck.count()
            )));
        }

        Ok(())
    }
}

/// Derives the seed for a hand size from the configuration seed.
fn hand_seed(seed: u64, handsize: usize) -> u64 {
    seed ^ ((handsize as u64) << 32)
}

/// Returns the categories probabilities for `iterations` random hands of
/// `handsize` cards with deuces wild and a 52 cards deck.
pub fn simulate(handsize: usize, iterations: usize) -> Result<Probabilities, SimError> {
    Simulation::default().simulate(&mut rand::rng(), handsize, iterations)
}
