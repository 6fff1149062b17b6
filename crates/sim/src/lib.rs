// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! BS Poker combination odds simulator.
//!
//! Estimates the probability that each combination category exists for a
//! given rank among the cards in play by drawing random hands:
//!
//! ```
//! # use bspoker_sim::*;
//! use bspoker_eval::Category;
//!
//! let probs = simulate(10, 100).unwrap();
//! assert!(probs[Category::HighCard] > 0.0);
//! assert!(probs[Category::EightOfAKind] <= 1.0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod report;

pub mod simulation;
pub use simulation::{Config, Probabilities, SimError, Simulation, SweepRow, Tally, simulate};
