use crate::reports;
use clap::{ArgGroup, Args};
use std::path::PathBuf;
use tracing::info;
use typepass::api;
use typepass::config::ComposerParams;
use typepass::cost::BigramCostTable;
use typepass::error::TpResult;
use typepass::vocabulary::{LoadOptions, Vocabulary};

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["vocabulary", "words"])))]
pub struct GenerateArgs {
    #[command(flatten)]
    pub params: ComposerParams,

    /// Word list file, whitespace separated.
    #[arg(short = 'f', long)]
    pub vocabulary: Option<PathBuf>,

    /// Inline comma separated words instead of a file.
    #[arg(long, value_delimiter = ',')]
    pub words: Vec<String>,

    /// Keep a random subset of this many words.
    #[arg(long)]
    pub sample: Option<usize>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub dedup: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &GenerateArgs, params: &ComposerParams, table: &BigramCostTable) -> TpResult<()> {
    let opts = LoadOptions {
        sort_by_length: true,
        dedup: args.dedup,
        sample: args.sample,
        seed: args.seed,
    };

    let vocab = match &args.vocabulary {
        Some(path) => Vocabulary::load_from_file(path, table, &opts)?,
        None => Vocabulary::from_words(&args.words, table, &opts)?,
    };

    info!(
        "🧩 {} words | {} words per phrase | length {}..={} | {} on {}",
        vocab.len(),
        params.word_count,
        params.min_len,
        params.max_len,
        params.objective,
        params.table.topology
    );

    let passphrase = api::compose(params, table, &vocab)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&passphrase)?);
    } else {
        reports::print_passphrase(&passphrase, params);
    }
    Ok(())
}
