pub mod cost;
pub mod generate;
pub mod table;
