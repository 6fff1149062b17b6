// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! BS Poker hand classifier.
//!
//! In BS Poker the players bid on combinations that exist among all the cards
//! in play, with deuces wild. This crate checks whether any of the sixteen
//! [Category] combinations exists in a [Hand] for a candidate anchor rank.
//!
//! To classify a hand create [Rules] and call a predicate or [Rules::holds]:
//!
//! ```
//! # use bspoker_eval::*;
//! use Rank::*;
//!
//! let rules = Rules::default();
//! let hand = Hand::new(&[Nine, Nine, Nine, Four, Four]);
//! assert!(rules.full_house(&hand, Nine));
//! assert!(!rules.full_house(&hand, Four));
//!
//! // Deuces are wild.
//! let hand = Hand::new(&[Ace, King, Deuce, Jack, Ten]);
//! assert!(rules.holds(Category::Straight, &hand, Ace));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub use category::{Category, Scope, Shape};

pub mod hand;
pub use hand::{Hand, Pattern};

pub mod rules;
pub use rules::Rules;

// Reexport cards types.
pub use bspoker_cards::{Deck, Rank};
