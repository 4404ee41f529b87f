use super::knapsack::Knapsack;
use std::sync::Arc;

/// One entry of a cell: the best knapsack for an exact word count, or `None`
/// when no combination of that many words exists.
pub type Slot = Option<Arc<Knapsack>>;

/// 3-D table `T[i][j][c]`: words considered x length budget x word count.
///
/// Row 0 and column 0 hold the base cell (the empty knapsack at count 0,
/// absent everywhere else). Cells are replaced whole, one writer per cell.
#[derive(Debug, Clone)]
pub struct CompositionTable {
    rows: usize,
    cols: usize,
    counts: usize,
    cells: Vec<Vec<Slot>>,
}

impl CompositionTable {
    /// Pre-sizes the table for `word_total` words, budgets `0..=max_len`,
    /// and counts `0..=word_count`.
    pub fn new(word_total: usize, max_len: usize, word_count: usize) -> Self {
        let rows = word_total + 1;
        let cols = max_len + 1;
        let counts = word_count + 1;
        let base = Self::base_cell(counts);
        Self {
            rows,
            cols,
            counts,
            cells: vec![base; rows * cols],
        }
    }

    fn base_cell(counts: usize) -> Vec<Slot> {
        let mut cell = vec![None; counts];
        cell[0] = Some(Arc::new(Knapsack::empty()));
        cell
    }

    /// Number of rows (`word_total + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of budget columns (`max_len + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of count slots per cell (`word_count + 1`).
    pub fn counts(&self) -> usize {
        self.counts
    }

    pub fn cell(&self, i: usize, j: usize) -> &[Slot] {
        &self.cells[i * self.cols + j]
    }

    pub fn get(&self, i: usize, j: usize, count: usize) -> Option<&Arc<Knapsack>> {
        self.cell(i, j).get(count).and_then(|slot| slot.as_ref())
    }

    pub(crate) fn set_cell(&mut self, i: usize, j: usize, cell: Vec<Slot>) {
        debug_assert_eq!(cell.len(), self.counts);
        self.cells[i * self.cols + j] = cell;
    }

    /// Present knapsacks in the last row for `count` words, by budget.
    pub fn last_row(&self, count: usize) -> impl Iterator<Item = (usize, &Arc<Knapsack>)> + '_ {
        let i = self.rows - 1;
        (0..self.cols).filter_map(move |j| self.get(i, j, count).map(|k| (j, k)))
    }
}
