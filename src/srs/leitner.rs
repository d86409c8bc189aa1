use chrono::{Days, NaiveDate};

/// Lowest and highest Leitner boxes
pub const MIN_BOX: u8 = 1;
pub const MAX_BOX: u8 = 5;

/// Review interval in whole days for each box
const INTERVALS: [u64; 5] = [1, 2, 4, 7, 14];

pub struct LeitnerResult {
  pub leitner_box: u8,
  pub next_review: NaiveDate,
}

/// Days until the next review for a box. Out-of-range boxes fall back
/// to the longest interval.
pub fn interval_days(leitner_box: u8) -> u64 {
  match leitner_box {
    1..=5 => INTERVALS[(leitner_box - 1) as usize],
    _ => INTERVALS[(MAX_BOX - 1) as usize],
  }
}

/// Move a card through the Leitner ladder after a review.
///
/// A correct answer promotes one box (capped at 5); a wrong answer
/// drops the card back to box 1 unconditionally. The next review date
/// is computed in whole calendar days so the due time never drifts
/// with the time of day a review happens.
pub fn schedule_next_review(current_box: u8, was_correct: bool, today: NaiveDate) -> LeitnerResult {
  let new_box = if was_correct {
    (current_box + 1).min(MAX_BOX)
  } else {
    MIN_BOX
  };

  let next_review = today
    .checked_add_days(Days::new(interval_days(new_box)))
    .unwrap_or(today);

  LeitnerResult {
    leitner_box: new_box,
    next_review,
  }
}

/// A card is due once its scheduled day has arrived
pub fn is_due(next_review: NaiveDate, today: NaiveDate) -> bool {
  next_review <= today
}

#[cfg(test)]
mod tests {
  use super::*;

  fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
  }

  #[test]
  fn test_correct_promotes_one_box() {
    let today = day("2026-03-01");
    for b in 1..=4u8 {
      let result = schedule_next_review(b, true, today);
      assert_eq!(result.leitner_box, b + 1);
    }
  }

  #[test]
  fn test_correct_caps_at_top_box() {
    let result = schedule_next_review(5, true, day("2026-03-01"));
    assert_eq!(result.leitner_box, 5);
  }

  #[test]
  fn test_incorrect_resets_to_box_one() {
    let today = day("2026-03-01");
    for b in 1..=5u8 {
      let result = schedule_next_review(b, false, today);
      assert_eq!(result.leitner_box, 1);
    }
  }

  #[test]
  fn test_interval_table() {
    assert_eq!(interval_days(1), 1);
    assert_eq!(interval_days(2), 2);
    assert_eq!(interval_days(3), 4);
    assert_eq!(interval_days(4), 7);
    assert_eq!(interval_days(5), 14);
  }

  #[test]
  fn test_interval_out_of_range_defaults_to_longest() {
    assert_eq!(interval_days(0), 14);
    assert_eq!(interval_days(6), 14);
    assert_eq!(interval_days(255), 14);
  }

  #[test]
  fn test_next_review_whole_days() {
    let today = day("2026-03-01");

    // Box 1 failed -> box 1 -> +1 day
    let result = schedule_next_review(1, false, today);
    assert_eq!(result.next_review, day("2026-03-02"));

    // Box 1 correct -> box 2 -> +2 days
    let result = schedule_next_review(1, true, today);
    assert_eq!(result.next_review, day("2026-03-03"));

    // Box 2 correct -> box 3 -> +4 days
    let result = schedule_next_review(2, true, today);
    assert_eq!(result.next_review, day("2026-03-05"));

    // Box 3 correct -> box 4 -> +7 days
    let result = schedule_next_review(3, true, today);
    assert_eq!(result.next_review, day("2026-03-08"));

    // Box 4 correct -> box 5 -> +14 days
    let result = schedule_next_review(4, true, today);
    assert_eq!(result.next_review, day("2026-03-15"));
  }

  #[test]
  fn test_next_review_crosses_month_boundary() {
    let result = schedule_next_review(4, true, day("2026-02-20"));
    assert_eq!(result.leitner_box, 5);
    assert_eq!(result.next_review, day("2026-03-06"));
  }

  #[test]
  fn test_is_due() {
    let today = day("2026-03-10");
    assert!(is_due(day("2026-03-09"), today));
    assert!(is_due(day("2026-03-10"), today));
    assert!(!is_due(day("2026-03-11"), today));
  }
}
