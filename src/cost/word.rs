use super::table::BigramCostTable;
use crate::error::CompositionError;

/// Names the first unknown symbol, or failing that the second letter of the
/// first pair the table has no cost for.
fn invalid_word(word: &str, table: &BigramCostTable) -> CompositionError {
    let symbol = word
        .chars()
        .find(|&c| !c.is_ascii() || !table.is_registered(c as u8))
        .or_else(|| {
            word.as_bytes()
                .windows(2)
                .find(|pair| table.cost(pair[0], pair[1]).is_none())
                .map(|pair| char::from(pair[1]))
        })
        .or_else(|| word.chars().next())
        .unwrap_or_default();
    CompositionError::InvalidWord {
        word: word.to_string(),
        symbol,
    }
}

/// Fails with `InvalidWord` on the first symbol the table does not know.
pub fn validate_word(table: &BigramCostTable, word: &str) -> Result<(), CompositionError> {
    if word
        .chars()
        .all(|c| c.is_ascii() && table.is_registered(c as u8))
    {
        Ok(())
    } else {
        Err(invalid_word(word, table))
    }
}

/// Sum of travel costs over consecutive letters; 0 for words of length 0 or 1.
pub fn intrinsic_cost(table: &BigramCostTable, word: &str) -> Result<u32, CompositionError> {
    word.as_bytes().windows(2).try_fold(0u32, |sum, pair| {
        table
            .cost(pair[0], pair[1])
            .map(|c| sum + c)
            .ok_or_else(|| invalid_word(word, table))
    })
}

/// Cost of moving from the last letter of `left` to the first letter of `right`.
///
/// Either side may be empty (start or end of a passphrase), which costs nothing.
pub fn gap_cost(
    table: &BigramCostTable,
    left: &str,
    right: &str,
) -> Result<u32, CompositionError> {
    match (left.as_bytes().last(), right.as_bytes().first()) {
        (Some(&a), Some(&b)) => table.cost(a, b).ok_or_else(|| {
            let joined = format!("{}{}", left, right);
            invalid_word(&joined, table)
        }),
        _ => Ok(0),
    }
}

/// Total typing cost of words typed back to back, recomputed from scratch.
pub fn phrase_cost(table: &BigramCostTable, words: &[&str]) -> Result<u32, CompositionError> {
    let mut total = 0;
    for (idx, word) in words.iter().enumerate() {
        total += intrinsic_cost(table, word)?;
        if idx > 0 {
            total += gap_cost(table, words[idx - 1], word)?;
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::Topology;

    fn grid() -> BigramCostTable {
        let g = Topology::Grid.build_graph().unwrap();
        BigramCostTable::from_distances(&g.all_pairs_shortest_path(20).unwrap()).unwrap()
    }

    #[test]
    fn test_intrinsic_cost() {
        let t = grid();
        assert_eq!(intrinsic_cost(&t, "").unwrap(), 0);
        assert_eq!(intrinsic_cost(&t, "a").unwrap(), 0);
        assert_eq!(intrinsic_cost(&t, "as").unwrap(), 1);
        // b-i 5, i-k 1, k-e 6
        assert_eq!(intrinsic_cost(&t, "bike").unwrap(), 12);
    }

    #[test]
    fn test_gap_cost_boundaries() {
        let t = grid();
        assert_eq!(gap_cost(&t, "", "the").unwrap(), 0);
        assert_eq!(gap_cost(&t, "the", "").unwrap(), 0);
        assert_eq!(gap_cost(&t, "of", "the").unwrap(), 2);
    }

    #[test]
    fn test_phrase_cost_matches_concatenation() {
        let t = grid();
        let words = ["a", "of", "the", "bike"];
        assert_eq!(
            phrase_cost(&t, &words).unwrap(),
            intrinsic_cost(&t, "aofthebike").unwrap()
        );
    }

    #[test]
    fn test_invalid_symbols() {
        let t = grid();
        let err = intrinsic_cost(&t, "b4").unwrap_err();
        assert_eq!(
            err,
            CompositionError::InvalidWord {
                word: "b4".to_string(),
                symbol: '4'
            }
        );
        assert!(validate_word(&t, "x").is_ok());
        assert!(validate_word(&t, "9").is_err());
        assert!(validate_word(&t, "café").is_err());
        assert!(gap_cost(&t, "a", " b").is_err());
    }

    #[test]
    fn test_unregistered_letter_named_in_gap_error() {
        let mut g = crate::keyboard::KeyboardGraph::new();
        for c in ['o', 'f', 'e'] {
            g.add_vertex(c).unwrap();
        }
        g.add_edge('o', 'f').unwrap();
        let t = BigramCostTable::from_distances(&g.all_pairs_shortest_path(20).unwrap()).unwrap();

        assert_eq!(gap_cost(&t, "of", "fe").unwrap(), 0);
        assert_eq!(
            gap_cost(&t, "of", "be").unwrap_err(),
            CompositionError::InvalidWord {
                word: "ofbe".to_string(),
                symbol: 'b'
            }
        );
    }
}
