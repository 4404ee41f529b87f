use crate::cost::{intrinsic_cost, validate_word, BigramCostTable};
use crate::error::{CompositionError, TpResult, VocabularyError};
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// A dictionary word with its precomputed length and typing cost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordMetric {
    word: String,
    length: usize,
    cost: u32,
}

impl WordMetric {
    /// Validates the alphabet and computes the intrinsic cost.
    pub fn new(word: &str, table: &BigramCostTable) -> Result<Self, CompositionError> {
        validate_word(table, word)?;
        Ok(Self {
            word: word.to_string(),
            length: word.len(),
            cost: intrinsic_cost(table, word)?,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Stable ascending sort by length, as the composer expects.
    pub sort_by_length: bool,
    pub dedup: bool,
    /// Keep a random subset of this many words.
    pub sample: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sort_by_length: true,
            dedup: false,
            sample: None,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<Arc<WordMetric>>,
}

impl Vocabulary {
    pub fn from_words<I, S>(words: I, table: &BigramCostTable, opts: &LoadOptions) -> TpResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut metrics = Vec::new();
        let mut seen = HashSet::new();

        for raw in words {
            let word = raw.as_ref().trim().to_ascii_lowercase();
            if word.is_empty() {
                continue;
            }
            if opts.dedup && !seen.insert(word.clone()) {
                continue;
            }
            metrics.push(Arc::new(WordMetric::new(&word, table)?));
        }

        if let Some(limit) = opts.sample {
            if limit < metrics.len() {
                let mut rng = match opts.seed {
                    Some(s) => fastrand::Rng::with_seed(s),
                    None => fastrand::Rng::new(),
                };
                rng.shuffle(&mut metrics);
                metrics.truncate(limit);
                debug!("Sampled {} words", limit);
            }
        }

        if opts.sort_by_length {
            metrics.sort_by_key(|w| w.len());
        }

        Ok(Self { words: metrics })
    }

    /// Reads whitespace separated words.
    pub fn from_reader<R: BufRead>(
        reader: R,
        table: &BigramCostTable,
        opts: &LoadOptions,
    ) -> TpResult<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(VocabularyError::ScanFailure)?;
            words.extend(line.split_whitespace().map(str::to_string));
        }
        Self::from_words(words, table, opts)
    }

    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
        table: &BigramCostTable,
        opts: &LoadOptions,
    ) -> TpResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| VocabularyError::FileUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let vocab = Self::from_reader(BufReader::new(file), table, opts)?;
        info!("📚 Loaded {} words from {:?}", vocab.len(), path);
        Ok(vocab)
    }

    pub fn words(&self) -> &[Arc<WordMetric>] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<WordMetric>> {
        self.words.iter()
    }

    pub fn max_word_len(&self) -> usize {
        self.words.iter().map(|w| w.len()).max().unwrap_or(0)
    }

    pub fn is_sorted_by_length(&self) -> bool {
        self.words.windows(2).all(|p| p[0].len() <= p[1].len())
    }
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
    fn test_sort_is_stable() {
        let v = Vocabulary::from_words(["bike", "of", "to", "a"], &grid(), &LoadOptions::default())
            .unwrap();
        let words: Vec<&str> = v.iter().map(|w| w.word()).collect();
        assert_eq!(words, vec!["a", "of", "to", "bike"]);
        assert!(v.is_sorted_by_length());
    }

    #[test]
    fn test_dedup_and_lowercase() {
        let opts = LoadOptions {
            dedup: true,
            ..Default::default()
        };
        let v = Vocabulary::from_words(["The", "the", "THE"], &grid(), &opts).unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(v.words()[0].word(), "the");
        assert_eq!(v.words()[0].cost(), 6);
    }

    #[test]
    fn test_sample_is_seeded() {
        let words: Vec<String> = (b'a'..=b'z').map(|b| (b as char).to_string()).collect();
        let opts = LoadOptions {
            sample: Some(5),
            seed: Some(42),
            ..Default::default()
        };
        let a = Vocabulary::from_words(&words, &grid(), &opts).unwrap();
        let b = Vocabulary::from_words(&words, &grid(), &opts).unwrap();
        assert_eq!(a.len(), 5);
        let wa: Vec<&str> = a.iter().map(|w| w.word()).collect();
        let wb: Vec<&str> = b.iter().map(|w| w.word()).collect();
        assert_eq!(wa, wb);
    }
}
