//! Candidate search for a single table cell.
//!
//! This is a heuristic: the upward scan stops early, so the knapsack it
//! returns is not guaranteed to be the cheapest possible extension. See
//! [`crate::composer::exhaustive`] for the exact (slow) alternative.

use super::knapsack::Knapsack;
use super::table::CompositionTable;
use crate::cost::{gap_cost, BigramCostTable};
use crate::error::CompositionError;
use crate::vocabulary::WordMetric;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Attachment {
    pub knapsack: Knapsack,
    /// The chosen boundary cost nothing; no other leftover can beat that gap.
    pub zero_gap: bool,
}

/// Puts `word` in front of or behind `leftover`, whichever boundary is cheaper.
/// Ties go to the back.
pub fn attach(
    costs: &BigramCostTable,
    leftover: &Knapsack,
    word: &Arc<WordMetric>,
) -> Result<Attachment, CompositionError> {
    let front = gap_cost(costs, word.word(), leftover.first_word())?;
    let back = gap_cost(costs, leftover.last_word(), word.word())?;

    Ok(if front < back {
        Attachment {
            knapsack: leftover.prepended(word, front),
            zero_gap: front == 0,
        }
    } else {
        Attachment {
            knapsack: leftover.appended(word, back),
            zero_gap: back == 0,
        }
    })
}

/// Best `count + 1` word knapsack that adds the word of row `row` to a
/// `count` word knapsack fitting `budget`.
///
/// Starts from row `row - 1` and walks up the column. The walk ends at the
/// first absent entry, at the first leftover shorter than the starting one,
/// or once a zero-gap attachment is found. Leftovers whose description equals
/// the starting one are skipped.
pub fn extend_leftover(
    kt: &CompositionTable,
    costs: &BigramCostTable,
    row: usize,
    budget: usize,
    count: usize,
    word: &Arc<WordMetric>,
) -> Result<Option<Knapsack>, CompositionError> {
    let Some(first) = kt.get(row - 1, budget, count) else {
        return Ok(None);
    };

    let Attachment {
        knapsack: mut best,
        zero_gap: mut stop,
    } = attach(costs, first, word)?;

    for upper in (1..row.saturating_sub(1)).rev() {
        if stop {
            break;
        }
        let Some(leftover) = kt.get(upper, budget, count) else {
            break;
        };
        if leftover.len() < first.len() {
            break;
        }
        if leftover.same_description(first) {
            continue;
        }

        let next = attach(costs, leftover, word)?;
        stop = next.zero_gap;
        if next.knapsack.cost() < best.cost() {
            best = next.knapsack;
        }
    }

    Ok(Some(best))
}
