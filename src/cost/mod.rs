pub mod cache;
pub mod table;
pub mod word;

pub use self::table::{bigram_index, BigramCostTable, TABLE_SIZE, UNREGISTERED};
pub use self::word::{gap_cost, intrinsic_cost, phrase_cost, validate_word};
