use crate::composer::Constraints;
use crate::error::{TpResult, TypePassError};
use crate::layouts::Topology;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// What the composer optimises for.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Objective {
    /// Lowest typing effort, diagonal-sweep heuristic.
    #[default]
    MinEffort,
    /// Lowest typing effort, exact search. Only for small vocabularies.
    Exhaustive,
    /// Highest summed word cost within `max_len` letters.
    MaxValue,
}

/// Which bigram table to build: the keyboard and its path cap.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableParams {
    #[arg(short, long, value_enum, default_value_t = Topology::Grid)]
    pub topology: Topology,
    /// Distance assigned to key pairs with no path. Must exceed every real path.
    #[arg(long, default_value_t = 20)]
    pub path_cap: u32,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            topology: Topology::Grid,
            path_cap: 20,
        }
    }
}

impl TableParams {
    pub fn merge_from_cli(&mut self, cli_params: &TableParams, matches: &ArgMatches) {
        if matches.value_source("topology") == Some(ValueSource::CommandLine) {
            self.topology = cli_params.topology;
        }
        if matches.value_source("path_cap") == Some(ValueSource::CommandLine) {
            self.path_cap = cli_params.path_cap;
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerParams {
    /// Shortest acceptable passphrase, in letters.
    #[arg(long, default_value_t = 20)]
    pub min_len: usize,
    /// Longest acceptable passphrase, in letters.
    #[arg(long, default_value_t = 24)]
    pub max_len: usize,
    /// Exact number of words.
    #[arg(short = 'w', long, default_value_t = 4)]
    pub word_count: usize,
    #[command(flatten)]
    #[serde(flatten)]
    pub table: TableParams,
    #[arg(long, value_enum, default_value_t = Objective::MinEffort)]
    pub objective: Objective,
}

impl Default for ComposerParams {
    fn default() -> Self {
        Self {
            min_len: 20,
            max_len: 24,
            word_count: 4,
            table: TableParams::default(),
            objective: Objective::MinEffort,
        }
    }
}

impl ComposerParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TpResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TypePassError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            TypePassError::Config(format!("Failed to parse config JSON {:?}: {}", path, e))
        })
    }

    /// Copies every value the user typed on the command line over `self`.
    pub fn merge_from_cli(&mut self, cli_params: &ComposerParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field.clone();
                }
            };
        }

        update_if_present!(min_len);
        update_if_present!(max_len);
        update_if_present!(word_count);
        update_if_present!(objective);
        self.table.merge_from_cli(&cli_params.table, matches);
    }

    pub fn constraints(&self) -> TpResult<Constraints> {
        Ok(Constraints::new(self.min_len, self.max_len, self.word_count)?)
    }
}
