pub mod leitner;

pub use leitner::{interval_days, is_due, schedule_next_review, LeitnerResult};
