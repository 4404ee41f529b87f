use crate::cost::{gap_cost, BigramCostTable};
use crate::error::CompositionError;
use crate::vocabulary::WordMetric;
use std::sync::Arc;

/// A candidate passphrase: an ordered word sequence with its aggregate cost.
///
/// `cost` always equals the bigram walk over the concatenated words. Extending
/// a knapsack builds a fresh item list, so knapsacks already stored in the
/// composition table are never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knapsack {
    items: Vec<Arc<WordMetric>>,
    cost: u32,
    length: usize,
}

impl Knapsack {
    /// The legitimate zero-word knapsack.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(word: Arc<WordMetric>) -> Self {
        Self {
            cost: word.cost(),
            length: word.len(),
            items: vec![word],
        }
    }

    pub fn items(&self) -> &[Arc<WordMetric>] {
        &self.items
    }

    pub fn word_count(&self) -> usize {
        self.items.len()
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Length of the plain description.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first_word(&self) -> &str {
        self.items.first().map(|w| w.word()).unwrap_or("")
    }

    pub fn last_word(&self) -> &str {
        self.items.last().map(|w| w.word()).unwrap_or("")
    }

    pub fn words(&self) -> Vec<&str> {
        self.items.iter().map(|w| w.word()).collect()
    }

    /// Plain concatenation of the words.
    pub fn description(&self) -> String {
        self.items.iter().map(|w| w.word()).collect()
    }

    pub fn spaced_description(&self) -> String {
        self.words().join(" ")
    }

    /// Compares the concatenated descriptions without allocating them.
    pub fn same_description(&self, other: &Knapsack) -> bool {
        self.length == other.length
            && self
                .items
                .iter()
                .flat_map(|w| w.word().bytes())
                .eq(other.items.iter().flat_map(|w| w.word().bytes()))
    }

    /// Longer description wins; on equal length the strictly cheaper one wins.
    pub fn is_better_than(&self, other: &Knapsack) -> bool {
        self.length > other.length || (self.length == other.length && self.cost < other.cost)
    }

    pub(crate) fn prepended(&self, word: &Arc<WordMetric>, gap: u32) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(Arc::clone(word));
        items.extend(self.items.iter().cloned());
        Self {
            items,
            cost: word.cost() + gap + self.cost,
            length: self.length + word.len(),
        }
    }

    pub(crate) fn appended(&self, word: &Arc<WordMetric>, gap: u32) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(Arc::clone(word));
        Self {
            items,
            cost: self.cost + gap + word.cost(),
            length: self.length + word.len(),
        }
    }

    /// Adds `word` after the last word, paying the boundary gap.
    pub fn extend_back(
        &self,
        word: &Arc<WordMetric>,
        table: &BigramCostTable,
    ) -> Result<Self, CompositionError> {
        let gap = gap_cost(table, self.last_word(), word.word())?;
        Ok(self.appended(word, gap))
    }

    /// Adds `word` before the first word, paying the boundary gap.
    pub fn extend_front(
        &self,
        word: &Arc<WordMetric>,
        table: &BigramCostTable,
    ) -> Result<Self, CompositionError> {
        let gap = gap_cost(table, word.word(), self.first_word())?;
        Ok(self.prepended(word, gap))
    }
}
