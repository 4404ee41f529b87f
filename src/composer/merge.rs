use super::table::Slot;
use std::sync::Arc;

/// Merges fresh candidates with the cell above (word excluded) and the cell
/// to the left (one letter less budget).
///
/// Per word count the longer description wins, then the strictly lower cost.
/// Candidates are considered first, so they win exact ties. An absent entry
/// never replaces a present one.
pub fn choose_candidates(mut candidates: Vec<Slot>, up: &[Slot], left: &[Slot]) -> Vec<Slot> {
    for (count, slot) in candidates.iter_mut().enumerate() {
        let neighbours = [up.get(count), left.get(count)];
        for other in neighbours.into_iter().flatten().flatten() {
            let replace = match slot.as_ref() {
                Some(best) => other.is_better_than(best),
                None => true,
            };
            if replace {
                *slot = Some(Arc::clone(other));
            }
        }
    }
    candidates
}
