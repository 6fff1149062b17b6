// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation reports.
use anyhow::Result;
use std::io::Write;

use bspoker_eval::{Category, Hand, Rank};

use crate::simulation::{SweepRow, Tally};

/// Writes the occurrences and probabilities for a single hand size.
pub fn write_tally<W: Write>(w: &mut W, handsize: usize, tally: &Tally) -> Result<()> {
    writeln!(w, "Hand size:  {handsize}")?;
    writeln!(w, "Iterations: {}", tally.iterations())?;
    writeln!(
        w,
        "{:<16}| {:>10} | {:>10} | {:>11}",
        "Category", "Raw", "Normalized", "Probability"
    )?;

    for category in Category::categories() {
        writeln!(
            w,
            "{:<16}| {:>10} | {:>10.2} | {:>11.4}",
            category.name(),
            tally.count(category),
            tally.normalized(category),
            tally.probability(category)
        )?;
    }

    Ok(())
}

fn separator<W: Write>(w: &mut W) -> Result<()> {
    write!(w, "|-------|")?;
    for _ in Category::categories() {
        write!(w, "------|")?;
    }

    writeln!(w)?;
    Ok(())
}

/// Writes a table with a row for each hand size and a column for each
/// category, see [Category::code] for the columns labels.
pub fn write_table<W: Write>(w: &mut W, rows: &[SweepRow]) -> Result<()> {
    separator(w)?;

    write!(w, "| Cards |")?;
    for category in Category::categories() {
        write!(w, "  {}  |", category.code())?;
    }
    writeln!(w)?;

    separator(w)?;

    for row in rows {
        write!(w, "| {:>5} |", row.handsize)?;
        for (_, prob) in row.probabilities.iter() {
            write!(w, " {prob:.3}|")?;
        }
        writeln!(w)?;
    }

    separator(w)?;

    // Legend for the columns codes.
    for category in Category::categories() {
        writeln!(w, "{}: {}", category.code(), category.name())?;
    }

    Ok(())
}

/// Writes the rows as a JSON array.
pub fn write_json<W: Write>(w: &mut W, rows: &[SweepRow]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, rows)?;
    writeln!(w)?;
    Ok(())
}

/// Writes the ranks each category is anchored to in a hand.
pub fn write_classification<W: Write>(
    w: &mut W,
    hand: &Hand,
    classes: &[(Category, Vec<Rank>)],
) -> Result<()> {
    writeln!(w, "Hand: {hand} ({} cards)", hand.len())?;

    for (category, anchors) in classes {
        write!(w, "{:<16}", category.name())?;
        if anchors.is_empty() {
            write!(w, " -")?;
        }

        for rank in anchors.iter().rev() {
            write!(w, " {rank}")?;
        }

        writeln!(w)?;
    }

    Ok(())
}
