pub mod knapsack;
pub use knapsack::{solve, table_cells, verify_selection};
