use crate::composer::exact::maximize_value;
use crate::composer::exhaustive::exhaustive_best;
use crate::composer::{Composer, Knapsack};
use crate::config::{ComposerParams, Objective};
use crate::cost::{cache, gap_cost, intrinsic_cost, validate_word, BigramCostTable};
use crate::error::{TpResult, TypePassError};
use crate::layouts::Topology;
use crate::vocabulary::{LoadOptions, Vocabulary};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Vocabularies larger than this make the exhaustive objective impractical.
pub const EXHAUSTIVE_WORD_LIMIT: usize = 64;

/// The selected passphrase, ready for display or JSON output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Passphrase {
    pub description: String,
    pub spaced: String,
    pub cost: u32,
    pub word_count: usize,
    pub length: usize,
    pub words: Vec<String>,
}

impl From<&Knapsack> for Passphrase {
    fn from(k: &Knapsack) -> Self {
        Self {
            description: k.description(),
            spaced: k.spaced_description(),
            cost: k.cost(),
            word_count: k.word_count(),
            length: k.len(),
            words: k.words().into_iter().map(str::to_string).collect(),
        }
    }
}

/// Cost breakdown of an arbitrary phrase.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhraseCost {
    pub phrase: String,
    pub words: Vec<String>,
    pub word_costs: Vec<u32>,
    /// Boundary costs between consecutive words; one fewer than `words`.
    pub gap_costs: Vec<u32>,
    pub total: u32,
}

/// Graph, shortest paths and flattening in one step.
pub fn build_cost_table(topology: Topology, path_cap: u32) -> TpResult<BigramCostTable> {
    let graph = topology.build_graph()?;
    let matrix = graph.all_pairs_shortest_path(path_cap)?;
    let table = BigramCostTable::from_distances(&matrix)?;
    info!(
        "⌨️  Built {} bigram table (max cost {})",
        topology,
        table.max_cost()
    );
    Ok(table)
}

/// Reads the table for `topology` and `path_cap` from `cache_dir` when it was
/// cached before, otherwise builds it and writes it there as JSON.
///
/// Each topology and cap has its own file (see [`Topology::cache_file_name`]),
/// so a cache never stands in for a table it was not built from.
pub fn load_or_build_cost_table(
    topology: Topology,
    path_cap: u32,
    cache_dir: Option<&Path>,
) -> TpResult<BigramCostTable> {
    let Some(dir) = cache_dir else {
        return build_cost_table(topology, path_cap);
    };
    let path = dir.join(topology.cache_file_name(path_cap));

    if path.exists() {
        info!("📂 Loading bigram table from {:?}", path);
        return cache::load_json(&path);
    }

    let table = build_cost_table(topology, path_cap)?;
    fs::create_dir_all(dir)?;
    cache::save_json(&table, &path)?;
    Ok(table)
}

/// Runs the configured objective over an already loaded vocabulary.
pub fn compose(
    params: &ComposerParams,
    table: &BigramCostTable,
    vocab: &Vocabulary,
) -> TpResult<Passphrase> {
    let constraints = params.constraints()?;

    let best = match params.objective {
        Objective::MinEffort => Composer::new(table, constraints).compose(vocab)?,
        Objective::Exhaustive => {
            if vocab.len() > EXHAUSTIVE_WORD_LIMIT {
                warn!(
                    "⚠️  Exhaustive search over {} words may take very long",
                    vocab.len()
                );
            }
            exhaustive_best(table, vocab.words(), &constraints)?
        }
        Objective::MaxValue => {
            let k = maximize_value(vocab.words(), params.max_len);
            if k.is_empty() {
                return Err(constraints.infeasible().into());
            }
            k
        }
    };

    Ok(Passphrase::from(&best))
}

/// Builds the table for `params.table` and composes from an in-memory word list.
pub fn compose_words<S: AsRef<str>>(params: &ComposerParams, words: &[S]) -> TpResult<Passphrase> {
    let table = build_cost_table(params.table.topology, params.table.path_cap)?;
    let vocab = Vocabulary::from_words(words, &table, &LoadOptions::default())?;
    compose(params, &table, &vocab)
}

/// Splits `phrase` on whitespace and prices every word and boundary.
pub fn phrase_cost(table: &BigramCostTable, phrase: &str) -> TpResult<PhraseCost> {
    let words: Vec<String> = phrase
        .split_whitespace()
        .map(|w| w.to_ascii_lowercase())
        .collect();
    if words.is_empty() {
        return Err(TypePassError::Validation("empty phrase".to_string()));
    }

    let mut word_costs = Vec::with_capacity(words.len());
    for w in &words {
        validate_word(table, w)?;
        word_costs.push(intrinsic_cost(table, w)?);
    }
    let gap_costs = words
        .windows(2)
        .map(|pair| gap_cost(table, &pair[0], &pair[1]))
        .collect::<Result<Vec<_>, _>>()?;

    let total = word_costs.iter().sum::<u32>() + gap_costs.iter().sum::<u32>();
    Ok(PhraseCost {
        phrase: words.join(" "),
        words,
        word_costs,
        gap_costs,
        total,
    })
}
