use std::path::PathBuf;
use thiserror::Error;

/// Failures while assembling the key adjacency graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex '{0}' not found")]
    VertexNotFound(char),

    #[error("vertex '{0}' already exists")]
    VertexAlreadyExists(char),

    #[error("edge '{0}'-'{1}' already exists")]
    EdgeAlreadyExists(char, char),

    #[error("edge '{0}'-'{1}' not found")]
    EdgeNotFound(char, char),

    #[error("graph has no vertices")]
    NoVertices,
}

#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("can not open vocabulary file {path:?}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can not scan vocabulary: {0}")]
    ScanFailure(#[source] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    #[error(
        "no combination of {word_count} words fits a length between {min_len} and {max_len}"
    )]
    NoFeasibleSolution {
        word_count: usize,
        min_len: usize,
        max_len: usize,
    },

    #[error("word '{word}' contains symbol '{symbol}' missing from the cost table")]
    InvalidWord { word: String, symbol: char },

    #[error("invalid constraints: {0}")]
    InvalidConstraints(String),

    #[error("composition aborted before diagonal {diagonal}")]
    Aborted { diagonal: usize },
}

#[derive(Error, Debug)]
pub enum TypePassError {
    #[error("Graph Error: {0}")]
    Graph(#[from] GraphError),

    #[error("Vocabulary Error: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("Composition Error: {0}")]
    Composition(#[from] CompositionError),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type TpResult<T> = Result<T, TypePassError>;
