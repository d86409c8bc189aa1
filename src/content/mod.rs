pub mod elements;

pub use elements::{by_number, by_symbol, catalogue};
