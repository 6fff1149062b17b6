// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! BS Poker cards types.
//!
//! This crate defines the card [Rank] type, ranks carry their numeric value
//! from 2 (deuce) to 14 (ace):
//!
//! ```
//! # use bspoker_cards::Rank;
//! assert_eq!(Rank::Ace.value(), 14);
//! assert_eq!("T".parse::<Rank>().unwrap(), Rank::Ten);
//! ```
//!
//! and a [Deck] type with four cards of each rank for sampling random hands
//! without replacement.
//!
//! For example to sample 10 random 5-cards hands:
//!
//! ```
//! # use bspoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling with a given number of
//! tasks, the closure's `task_id` argument can be used to store per task data
//! to reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_sample() {
//! # use std::sync::atomic;
//! # use bspoker_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_sample(4, 40, 7, None, |task_id, hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 40);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Deck, ParseRankError, Rank, parse_ranks};
