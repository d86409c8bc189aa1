pub mod generator;

pub use generator::{element_pool, generate, QuizConfig};
