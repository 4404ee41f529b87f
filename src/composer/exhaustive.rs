//! Exact minimum-effort search.
//!
//! Enumerates every ordered selection of `word_count` distinct vocabulary
//! entries with branch-and-bound pruning. Exponential in the word count, so
//! only practical for small vocabularies; the diagonal sweep in
//! [`crate::composer::Composer`] is the default.

use super::knapsack::Knapsack;
use super::Constraints;
use crate::cost::BigramCostTable;
use crate::error::CompositionError;
use crate::vocabulary::WordMetric;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

struct Search<'a> {
    costs: &'a BigramCostTable,
    words: &'a [Arc<WordMetric>],
    constraints: &'a Constraints,
    used: Vec<bool>,
    best: Option<Knapsack>,
}

impl Search<'_> {
    fn descend(&mut self, current: Knapsack) -> Result<(), CompositionError> {
        // Costs only grow as words are added.
        if let Some(best) = &self.best {
            if current.cost() >= best.cost() {
                return Ok(());
            }
        }

        if current.word_count() == self.constraints.word_count {
            if current.len() >= self.constraints.min_len {
                self.best = Some(current);
            }
            return Ok(());
        }

        for idx in 0..self.words.len() {
            let word = &self.words[idx];
            if self.used[idx] || current.len() + word.len() > self.constraints.max_len {
                continue;
            }
            self.used[idx] = true;
            let next = current.extend_back(word, self.costs)?;
            self.descend(next)?;
            self.used[idx] = false;
        }
        Ok(())
    }
}

/// Cheapest passphrase over all orderings, or `NoFeasibleSolution`.
///
/// Ties resolve to the first ordering found when the vocabulary is walked in
/// order, so results are deterministic despite the parallel split on the
/// first word.
pub fn exhaustive_best(
    costs: &BigramCostTable,
    words: &[Arc<WordMetric>],
    constraints: &Constraints,
) -> Result<Knapsack, CompositionError> {
    let start = Instant::now();

    let per_first: Vec<Result<Option<Knapsack>, CompositionError>> = (0..words.len())
        .into_par_iter()
        .map(|first| {
            if words[first].len() > constraints.max_len {
                return Ok(None);
            }
            let mut search = Search {
                costs,
                words,
                constraints,
                used: vec![false; words.len()],
                best: None,
            };
            search.used[first] = true;
            search.descend(Knapsack::single(Arc::clone(&words[first])))?;
            Ok(search.best)
        })
        .collect();

    let mut best: Option<Knapsack> = None;
    for found in per_first {
        if let Some(k) = found? {
            if best.as_ref().map_or(true, |b| k.cost() < b.cost()) {
                best = Some(k);
            }
        }
    }

    let best = best.ok_or_else(|| constraints.infeasible())?;
    info!(
        "🔬 Exhaustive search over {} words: '{}' (cost {}) in {:.2?}",
        words.len(),
        best.spaced_description(),
        best.cost(),
        start.elapsed()
    );
    Ok(best)
}
