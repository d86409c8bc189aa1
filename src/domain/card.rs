use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A user-created flashcard scheduled with the Leitner system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashCard {
  pub id: i64,
  pub front: String,
  pub back: String,
  /// Atomic number of the linked element, if any
  pub element: Option<u32>,
  /// Leitner box 1..=5
  pub leitner_box: u8,
  /// Calendar day this card becomes due again
  pub next_review: NaiveDate,
  pub correct_reviews: i64,
  pub incorrect_reviews: i64,
  pub created_at: DateTime<Utc>,
}

impl FlashCard {
  pub fn new(id: i64, front: String, back: String, element: Option<u32>, today: NaiveDate) -> Self {
    Self {
      id,
      front,
      back,
      element,
      leitner_box: 1,
      // New cards are due immediately
      next_review: today,
      correct_reviews: 0,
      incorrect_reviews: 0,
      created_at: Utc::now(),
    }
  }

  /// A card is due when its scheduled review day has arrived
  pub fn is_due(&self, today: NaiveDate) -> bool {
    self.next_review <= today
  }

  pub fn total_reviews(&self) -> i64 {
    self.correct_reviews + self.incorrect_reviews
  }

  /// A card counts as mastered once it sits in the top box
  pub fn is_mastered(&self) -> bool {
    self.leitner_box >= 5
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
  }

  #[test]
  fn test_new_card_defaults() {
    let card = FlashCard::new(1, "Fe".into(), "Iron".into(), Some(26), day("2026-03-01"));
    assert_eq!(card.leitner_box, 1);
    assert_eq!(card.next_review, day("2026-03-01"));
    assert_eq!(card.correct_reviews, 0);
    assert_eq!(card.incorrect_reviews, 0);
    assert_eq!(card.element, Some(26));
  }

  #[test]
  fn test_new_card_is_due_today() {
    let card = FlashCard::new(1, "Fe".into(), "Iron".into(), None, day("2026-03-01"));
    assert!(card.is_due(day("2026-03-01")));
    assert!(card.is_due(day("2026-03-02")));
    assert!(!card.is_due(day("2026-02-28")));
  }

  #[test]
  fn test_mastered() {
    let mut card = FlashCard::new(1, "Fe".into(), "Iron".into(), None, day("2026-03-01"));
    assert!(!card.is_mastered());
    card.leitner_box = 5;
    assert!(card.is_mastered());
  }
}
