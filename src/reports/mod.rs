mod grid;
mod tables;

pub use self::grid::print_cost_matrix;
pub use self::tables::{passphrase as print_passphrase, phrase_costs as print_phrase_costs};
