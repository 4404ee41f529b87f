use crate::error::GraphError;
use crate::keyboard::KeyboardGraph;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Letter rows of the physical keyboard, top to bottom.
pub const LETTER_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

// Straight up/down neighbours only.
const GRID_COLUMNS: [(char, char); 16] = [
    ('q', 'a'),
    ('a', 'z'),
    ('w', 's'),
    ('s', 'x'),
    ('e', 'd'),
    ('d', 'c'),
    ('r', 'f'),
    ('f', 'v'),
    ('t', 'g'),
    ('g', 'b'),
    ('y', 'h'),
    ('h', 'n'),
    ('u', 'j'),
    ('j', 'm'),
    ('i', 'k'),
    ('o', 'l'),
];

// Every key touches the two keys below it, following the row stagger.
const NATURAL_DIAGONALS: [(char, char); 32] = [
    ('q', 'a'),
    ('w', 'a'),
    ('w', 's'),
    ('e', 's'),
    ('e', 'd'),
    ('r', 'd'),
    ('r', 'f'),
    ('t', 'f'),
    ('t', 'g'),
    ('y', 'g'),
    ('y', 'h'),
    ('u', 'h'),
    ('u', 'j'),
    ('i', 'j'),
    ('i', 'k'),
    ('o', 'k'),
    ('o', 'l'),
    ('p', 'l'),
    ('a', 'z'),
    ('s', 'z'),
    ('s', 'x'),
    ('d', 'x'),
    ('d', 'c'),
    ('f', 'c'),
    ('f', 'v'),
    ('g', 'v'),
    ('g', 'b'),
    ('h', 'b'),
    ('h', 'n'),
    ('j', 'n'),
    ('j', 'm'),
    ('k', 'm'),
];

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Horizontal neighbours within a row plus straight vertical neighbours.
    #[default]
    Grid,
    /// Horizontal neighbours plus the two staggered keys below each key,
    /// the moves a single finger makes naturally.
    Natural,
}

impl Topology {
    pub fn edges(&self) -> Vec<(char, char)> {
        let mut edges = row_edges();
        match self {
            Self::Grid => edges.extend_from_slice(&GRID_COLUMNS),
            Self::Natural => edges.extend_from_slice(&NATURAL_DIAGONALS),
        }
        edges
    }

    /// Builds the adjacency graph for this topology over all 26 letters.
    pub fn build_graph(&self) -> Result<KeyboardGraph, GraphError> {
        let mut graph = KeyboardGraph::new();
        for letter in 'a'..='z' {
            graph.add_vertex(letter)?;
        }
        for (a, b) in self.edges() {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Cache file name for this topology's bigram table under `path_cap`.
    pub fn cache_file_name(&self, path_cap: u32) -> String {
        format!("bigram_costs_{}_cap{}.json", self, path_cap)
    }
}

fn row_edges() -> Vec<(char, char)> {
    LETTER_ROWS
        .iter()
        .flat_map(|row| {
            let keys: Vec<char> = row.chars().collect();
            keys.windows(2)
                .map(|pair| (pair[0], pair[1]))
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn get_all_topologies() -> Vec<Topology> {
    Topology::iter().collect()
}
