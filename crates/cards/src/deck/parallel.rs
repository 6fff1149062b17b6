// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand sampling.
use rand::prelude::*;
use std::thread;

use super::{Deck, Rank};

impl Deck {
    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples` random hands of size k in total.
    ///
    /// The closure takes an usize that is the task identifier (0..num_tasks)
    /// and a slice of k ranks. Samples are split evenly between tasks with the
    /// first `samples % num_tasks` tasks drawing one extra hand.
    ///
    /// When a seed is given each task uses its own generator seeded from the
    /// seed and the task id, so that the hands drawn by a task do not depend
    /// on threads scheduling.
    ///
    /// Panics if `num_tasks` is zero.
    pub fn par_sample<F>(&self, num_tasks: usize, samples: usize, k: usize, seed: Option<u64>, f: F)
    where
        F: Fn(usize, &[Rank]) + Send + Sync,
    {
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        let per_task = samples / num_tasks;
        let extra = samples % num_tasks;

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                let task_samples = per_task + usize::from(task_id < extra);
                s.spawn(move || {
                    let mut rng = match seed {
                        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                        None => SmallRng::from_os_rng(),
                    };

                    self.sample(&mut rng, task_samples, k, |hand| f(task_id, hand));
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    };

    #[test]
    fn par_sample_counts() {
        const NUM_TASKS: usize = 4;

        let task_counters = (0..NUM_TASKS)
            .map(|_| AtomicU64::new(0))
            .collect::<Vec<_>>();

        Deck::default().par_sample(NUM_TASKS, 10, 7, None, |task_id, hand| {
            assert_eq!(hand.len(), 7);
            task_counters[task_id].fetch_add(1, Ordering::Relaxed);
        });

        let counts = task_counters
            .iter()
            .map(|c| c.load(Ordering::Relaxed))
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![3, 3, 2, 2]);
    }

    #[test]
    fn par_sample_seeded() {
        let draw = || {
            let hands = (0..3).map(|_| Mutex::new(Vec::new())).collect::<Vec<_>>();
            Deck::default().par_sample(3, 30, 5, Some(7), |task_id, hand| {
                hands[task_id].lock().unwrap().push(hand.to_vec());
            });

            hands
                .into_iter()
                .map(|h| h.into_inner().unwrap())
                .collect::<Vec<_>>()
        };

        assert_eq!(draw(), draw());
    }
}
