pub mod exact;
pub mod exhaustive;
pub mod knapsack;
pub mod merge;
pub mod search;
pub mod table;

pub use self::knapsack::Knapsack;
pub use self::table::{CompositionTable, Slot};

use crate::cost::BigramCostTable;
use crate::error::CompositionError;
use crate::vocabulary::{Vocabulary, WordMetric};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Length window and exact word count of the passphrase.
///
/// Only [`Constraints::new`] builds one, so a value in hand is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    min_len: usize,
    max_len: usize,
    word_count: usize,
}

impl Constraints {
    pub fn new(min_len: usize, max_len: usize, word_count: usize) -> Result<Self, CompositionError> {
        if word_count == 0 {
            return Err(CompositionError::InvalidConstraints(
                "word count must be at least 1".to_string(),
            ));
        }
        if min_len > max_len {
            return Err(CompositionError::InvalidConstraints(format!(
                "min length {} exceeds max length {}",
                min_len, max_len
            )));
        }
        Ok(Self {
            min_len,
            max_len,
            word_count,
        })
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn infeasible(&self) -> CompositionError {
        CompositionError::NoFeasibleSolution {
            word_count: self.word_count,
            min_len: self.min_len,
            max_len: self.max_len,
        }
    }

    pub fn admits(&self, knapsack: &Knapsack) -> bool {
        knapsack.word_count() == self.word_count
            && knapsack.len() >= self.min_len
            && knapsack.len() <= self.max_len
    }
}

/// Dynamic-programming passphrase composer.
///
/// Fills a [`CompositionTable`] one anti-diagonal (`i + j = d`) at a time.
/// Cells on a diagonal only read cells from earlier diagonals, so each
/// diagonal is evaluated in parallel and joined before the next starts.
pub struct Composer<'a> {
    costs: &'a BigramCostTable,
    constraints: Constraints,
    abort: Option<Arc<AtomicBool>>,
}

impl<'a> Composer<'a> {
    pub fn new(costs: &'a BigramCostTable, constraints: Constraints) -> Self {
        Self {
            costs,
            constraints,
            abort: None,
        }
    }

    /// The sweep checks `flag` between diagonals and stops with `Aborted` once it is set.
    pub fn with_abort_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.abort = Some(flag);
        self
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn is_aborted(&self) -> bool {
        self.abort
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Builds and scans the table for the lowest-cost admissible passphrase.
    pub fn compose(&self, vocab: &Vocabulary) -> Result<Knapsack, CompositionError> {
        if !vocab.is_sorted_by_length() {
            warn!("⚠️  Vocabulary is not sorted by length; results may be worse");
        }

        let start = Instant::now();
        let kt = self.build_table(vocab.words())?;
        let best = self.select_best(&kt)?;

        info!(
            "🏁 Composed '{}' (cost {}) in {:.2?}",
            best.spaced_description(),
            best.cost(),
            start.elapsed()
        );
        Ok(best)
    }

    pub fn build_table(&self, words: &[Arc<WordMetric>]) -> Result<CompositionTable, CompositionError> {
        let n = words.len();
        let max_len = self.constraints.max_len;
        let mut kt = CompositionTable::new(n, max_len, self.constraints.word_count);

        info!(
            "🧮 Table {} words x {} letters x {} counts",
            n, max_len, self.constraints.word_count
        );
        if n == 0 || max_len == 0 {
            return Ok(kt);
        }

        for diagonal in 2..=n + max_len {
            if self.is_aborted() {
                warn!("Composition aborted at diagonal {}", diagonal);
                return Err(CompositionError::Aborted { diagonal });
            }

            let first = diagonal.saturating_sub(max_len).max(1);
            let last = (diagonal - 1).min(n);

            // Every cell of the diagonal finishes before any error is raised.
            let results: Vec<(usize, Result<Vec<Slot>, CompositionError>)> = (first..=last)
                .into_par_iter()
                .map(|i| (i, self.compute_cell(&kt, i, diagonal - i, &words[i - 1])))
                .collect();

            let cells = results
                .into_iter()
                .map(|(i, res)| res.map(|cell| (i, cell)))
                .collect::<Result<Vec<_>, _>>()?;

            for (i, cell) in cells {
                kt.set_cell(i, diagonal - i, cell);
            }

            if diagonal % 64 == 0 {
                debug!("Diagonal {}/{} done", diagonal, n + max_len);
            }
        }

        Ok(kt)
    }

    /// Transition for `T[i][j]`, where `word` is the i-th vocabulary word.
    fn compute_cell(
        &self,
        kt: &CompositionTable,
        i: usize,
        j: usize,
        word: &Arc<WordMetric>,
    ) -> Result<Vec<Slot>, CompositionError> {
        let up = kt.cell(i - 1, j);
        if word.len() > j {
            return Ok(up.to_vec());
        }

        let counts = kt.counts();
        let mut candidates: Vec<Slot> = vec![None; counts];
        candidates[0] = up[0].clone();
        candidates[1] = Some(Arc::new(Knapsack::single(Arc::clone(word))));

        let leftover = j - word.len();
        if leftover > 0 {
            for count in 1..counts - 1 {
                if let Some(k) = search::extend_leftover(kt, self.costs, i, leftover, count, word)? {
                    candidates[count + 1] = Some(Arc::new(k));
                }
            }
        }

        Ok(merge::choose_candidates(candidates, up, kt.cell(i, j - 1)))
    }

    /// Lowest-cost knapsack with the target word count in the last row whose
    /// budget and description length both lie in `[min_len, max_len]`.
    pub fn select_best(&self, kt: &CompositionTable) -> Result<Knapsack, CompositionError> {
        let Constraints {
            min_len,
            max_len,
            word_count,
        } = self.constraints;

        let mut best: Option<&Arc<Knapsack>> = None;
        for (j, k) in kt.last_row(word_count) {
            if j < min_len || j > max_len || k.len() < min_len {
                continue;
            }
            if best.map_or(true, |b| k.cost() < b.cost()) {
                best = Some(k);
            }
        }

        best.map(|k| Knapsack::clone(k))
            .ok_or_else(|| self.constraints.infeasible())
    }
}
