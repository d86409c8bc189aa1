use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completion state of today's study session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
  Active,
  Complete,
}

/// The single authoritative daily-progress record. Exactly one is
/// current at a time; a stale record is overwritten on day rollover,
/// never archived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyProgress {
  /// Local calendar day this record belongs to
  pub date: NaiveDate,
  /// Distinct elements to study today
  pub target: u32,
  /// Elements already shown today (set semantics)
  pub shown_elements: BTreeSet<u32>,
}

impl DailyProgress {
  pub fn new(date: NaiveDate, target: u32) -> Self {
    Self {
      date,
      target,
      shown_elements: BTreeSet::new(),
    }
  }

  pub fn completed_count(&self) -> u32 {
    self.shown_elements.len() as u32
  }

  /// Target reached. Overshoot past a lowered target is tolerated, so
  /// this stays true once the count passes the target within the day.
  pub fn state(&self) -> SessionState {
    if self.completed_count() >= self.target {
      SessionState::Complete
    } else {
      SessionState::Active
    }
  }
}

/// Lifetime study statistics, accumulated across days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyStats {
  /// Every element ever shown in a study session (distinct)
  pub studied_elements: BTreeSet<u32>,
  /// Days on which the daily target was met
  pub days_completed: u32,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
  }

  #[test]
  fn test_fresh_session_is_active() {
    let progress = DailyProgress::new(day("2026-03-01"), 5);
    assert_eq!(progress.state(), SessionState::Active);
    assert_eq!(progress.completed_count(), 0);
  }

  #[test]
  fn test_zero_target_starts_complete() {
    let progress = DailyProgress::new(day("2026-03-01"), 0);
    assert_eq!(progress.state(), SessionState::Complete);
  }

  #[test]
  fn test_overshoot_tolerated() {
    let mut progress = DailyProgress::new(day("2026-03-01"), 2);
    progress.shown_elements.extend([1, 2, 3, 4]);
    assert_eq!(progress.completed_count(), 4);
    assert_eq!(progress.state(), SessionState::Complete);
  }
}
