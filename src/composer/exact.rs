use super::knapsack::Knapsack;
use crate::vocabulary::WordMetric;
use std::sync::Arc;
use tracing::debug;

/// Classic 0/1 knapsack over a single length capacity.
///
/// Maximises the summed intrinsic cost of the chosen words,
/// `T[i][j] = max(T[i-1][j], T[i-1][j - len(w)] + cost(w))`. There is no word
/// count target and no gap costs, so the returned knapsack's `cost` is the
/// summed value rather than the typing cost of its description. Only a
/// strictly greater value replaces the cell above.
pub fn maximize_value(words: &[Arc<WordMetric>], capacity: usize) -> Knapsack {
    let empty = Arc::new(Knapsack::empty());
    let mut prev: Vec<Arc<Knapsack>> = vec![empty; capacity + 1];

    for word in words {
        let mut row = prev.clone();
        for j in word.len()..=capacity {
            let base = &prev[j - word.len()];
            if base.cost() + word.cost() > prev[j].cost() {
                row[j] = Arc::new(base.appended(word, 0));
            }
        }
        prev = row;
    }

    let best = Knapsack::clone(&prev[capacity]);
    debug!(
        "Max-value knapsack '{}' = {} (capacity {})",
        best.description(),
        best.cost(),
        capacity
    );
    best
}
