use crate::reports;
use clap::Args;
use typepass::api::{self, PhraseCost};
use typepass::config::TableParams;
use typepass::cost::BigramCostTable;
use typepass::error::TpResult;

#[derive(Args, Debug, Clone)]
pub struct CostArgs {
    #[command(flatten)]
    pub table: TableParams,

    /// Phrases to price; quote multi-word phrases.
    #[arg(required = true)]
    pub phrases: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &CostArgs, table: &BigramCostTable) -> TpResult<()> {
    let mut costs: Vec<PhraseCost> = args
        .phrases
        .iter()
        .map(|p| api::phrase_cost(table, p))
        .collect::<TpResult<_>>()?;

    costs.sort_by_key(|c| c.total);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&costs)?);
    } else {
        reports::print_phrase_costs(&costs);
    }
    Ok(())
}
