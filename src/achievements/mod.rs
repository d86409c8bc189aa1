//! Achievement evaluation.
//!
//! Definitions are static data; per-achievement state lives in the
//! persisted blob. `evaluate` recomputes every definition against the
//! full data snapshot. Unlocking is sticky and newly unlocked ids are
//! appended to a FIFO notification queue the UI drains one at a time.

pub mod definitions;

use chrono::{DateTime, Utc};

use crate::domain::{
  AchievementDef, AchievementKind, AchievementNotification, AchievementState, UnlockRecord,
};
use crate::store::AppData;

pub use definitions::{find, ACHIEVEMENTS};

/// Measure the current value for a non-meta achievement kind.
fn measure(kind: AchievementKind, data: &AppData) -> u64 {
  match kind {
    AchievementKind::FlashcardsCreated => data.flashcards.len() as u64,
    AchievementKind::ReviewsCompleted => {
      data.flashcards.iter().map(|c| c.total_reviews() as u64).sum()
    }
    AchievementKind::CorrectReviews => {
      data.flashcards.iter().map(|c| c.correct_reviews as u64).sum()
    }
    AchievementKind::CardsMastered => {
      data.flashcards.iter().filter(|c| c.is_mastered()).count() as u64
    }
    AchievementKind::NotesCreated => data.notes.len() as u64,
    AchievementKind::QuizzesCompleted => data.quiz_sessions.len() as u64,
    AchievementKind::PerfectQuizzes => {
      data.quiz_sessions.iter().filter(|s| s.score == 100).count() as u64
    }
    AchievementKind::ElementsStudied => data.stats.studied_elements.len() as u64,
    AchievementKind::FavoritesSaved => data.favorites.total() as u64,
    AchievementKind::DailyGoalsMet => data.stats.days_completed as u64,
    // Meta kinds are computed from the unlocked set in the second pass
    AchievementKind::UnlockedAchievements => 0,
  }
}

fn progress_pct(current: u64, target: u64) -> u8 {
  if target == 0 {
    return 100;
  }
  ((current as f64 / target as f64) * 100.0).min(100.0) as u8
}

/// Apply one measured value to an achievement's state. Unlock is
/// monotonic: a lower value on a later pass never re-locks. Returns
/// true when the achievement transitioned to unlocked.
fn apply_measure(state: &mut AchievementState, current: u64, target: u64, now: DateTime<Utc>) -> bool {
  state.current_value = current;
  if state.unlocked {
    state.progress = 100;
    return false;
  }

  state.progress = progress_pct(current, target);
  if state.progress >= 100 {
    state.unlocked = true;
    state.unlocked_at = Some(now);
    return true;
  }
  false
}

/// Recompute every achievement against the full snapshot.
///
/// Non-meta kinds are evaluated first, then meta kinds against the
/// resulting unlocked set, so a run that unlocks the last prerequisite
/// also unlocks the meta badge in the same pass. Idempotent: a second
/// run with unchanged data queues nothing new.
pub fn evaluate(data: &mut AppData, now: DateTime<Utc>) -> Vec<&'static AchievementDef> {
  let mut newly_unlocked = Vec::new();

  // Backfill states for definitions added after the blob was written
  for def in ACHIEVEMENTS {
    if !data.achievements.iter().any(|s| s.id == def.id) {
      data.achievements.push(AchievementState::new(def.id));
    }
  }

  // Pass 1: everything except meta kinds
  for def in ACHIEVEMENTS.iter().filter(|d| !d.kind.is_meta()) {
    let current = measure(def.kind, data);
    if let Some(state) = data.achievements.iter_mut().find(|s| s.id == def.id) {
      if apply_measure(state, current, def.target, now) {
        newly_unlocked.push(def);
      }
    }
  }

  // Pass 2: meta kinds see the unlocked set produced by pass 1
  for def in ACHIEVEMENTS.iter().filter(|d| d.kind.is_meta()) {
    let current = data
      .achievements
      .iter()
      .filter(|s| s.unlocked && s.id != def.id)
      .count() as u64;
    if let Some(state) = data.achievements.iter_mut().find(|s| s.id == def.id) {
      if apply_measure(state, current, def.target, now) {
        newly_unlocked.push(def);
      }
    }
  }

  for def in &newly_unlocked {
    enqueue(data, def.id, now);
  }

  newly_unlocked
}

/// Append to the notification queue unless the id is already queued or
/// already permanently recorded.
fn enqueue(data: &mut AppData, id: &str, now: DateTime<Utc>) {
  let already_queued = data.notifications.iter().any(|n| n.id == id);
  let already_recorded = data.unlocked.iter().any(|u| u.id == id);
  if already_queued || already_recorded {
    return;
  }
  data.notifications.push(AchievementNotification {
    id: id.to_string(),
    queued_at: now,
  });
}

/// Oldest pending notification, if any, without consuming it.
pub fn peek_notification(data: &AppData) -> Option<&AchievementNotification> {
  data.notifications.first()
}

/// Drain the oldest notification: remove it from the queue and write
/// the permanent unlock record. Irreversible.
pub fn drain_notification(data: &mut AppData) -> Option<UnlockRecord> {
  if data.notifications.is_empty() {
    return None;
  }
  let notification = data.notifications.remove(0);
  let record = UnlockRecord {
    id: notification.id,
    unlocked_at: notification.queued_at,
  };
  data.unlocked.push(record.clone());
  Some(record)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::FlashCard;
  use chrono::NaiveDate;

  fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
  }

  fn state<'a>(data: &'a AppData, id: &str) -> &'a AchievementState {
    data.achievements.iter().find(|s| s.id == id).unwrap()
  }

  #[test]
  fn test_evaluate_backfills_states() {
    let mut data = AppData::default();
    assert!(data.achievements.is_empty());
    evaluate(&mut data, Utc::now());
    assert_eq!(data.achievements.len(), ACHIEVEMENTS.len());
  }

  #[test]
  fn test_first_card_unlocks() {
    let mut data = AppData::default();
    data
      .flashcards
      .push(FlashCard::new(1, "H".into(), "Hydrogen".into(), Some(1), day("2026-03-01")));

    let newly = evaluate(&mut data, Utc::now());
    assert!(newly.iter().any(|d| d.id == "first-card"));
    assert!(state(&data, "first-card").unlocked);
    assert_eq!(state(&data, "first-card").progress, 100);
    // 1 of 25 towards card-collector
    assert_eq!(state(&data, "card-collector").current_value, 1);
    assert_eq!(state(&data, "card-collector").progress, 4);
    assert!(!state(&data, "card-collector").unlocked);
  }

  #[test]
  fn test_evaluate_idempotent() {
    let mut data = AppData::default();
    data
      .flashcards
      .push(FlashCard::new(1, "H".into(), "Hydrogen".into(), Some(1), day("2026-03-01")));

    let first = evaluate(&mut data, Utc::now());
    assert!(!first.is_empty());
    let queue_len = data.notifications.len();

    let second = evaluate(&mut data, Utc::now());
    assert!(second.is_empty());
    assert_eq!(data.notifications.len(), queue_len);
  }

  #[test]
  fn test_unlock_is_sticky() {
    let mut data = AppData::default();
    data
      .flashcards
      .push(FlashCard::new(1, "H".into(), "Hydrogen".into(), Some(1), day("2026-03-01")));
    evaluate(&mut data, Utc::now());
    assert!(state(&data, "first-card").unlocked);

    // Deleting the card drops the measured value back to zero
    data.flashcards.clear();
    evaluate(&mut data, Utc::now());
    let s = state(&data, "first-card");
    assert!(s.unlocked);
    assert_eq!(s.progress, 100);
    assert_eq!(s.current_value, 0);
  }

  #[test]
  fn test_meta_unlocks_in_same_pass() {
    let mut data = AppData::default();
    let meta = find("chemist-badge").unwrap();

    // Pre-unlock every non-meta achievement except one, then satisfy
    // the last one with data; meta must fire in the same evaluate call
    evaluate(&mut data, Utc::now());
    let mut remaining = 0;
    for s in data.achievements.iter_mut() {
      if s.id == "first-card" || s.id == meta.id {
        remaining += 1;
        continue;
      }
      s.unlocked = true;
      s.unlocked_at = Some(Utc::now());
    }
    assert_eq!(remaining, 2);

    data
      .flashcards
      .push(FlashCard::new(1, "H".into(), "Hydrogen".into(), Some(1), day("2026-03-01")));
    let newly = evaluate(&mut data, Utc::now());

    assert!(newly.iter().any(|d| d.id == "first-card"));
    assert!(newly.iter().any(|d| d.id == meta.id));
    assert_eq!(state(&data, meta.id).current_value, 15);
  }

  #[test]
  fn test_notification_queue_fifo_drain() {
    let mut data = AppData::default();
    data
      .flashcards
      .push(FlashCard::new(1, "H".into(), "Hydrogen".into(), Some(1), day("2026-03-01")));
    data.notes.push(crate::domain::Note::new(1, "t".into(), "c".into(), None, vec![]));
    evaluate(&mut data, Utc::now());

    // first-card is defined before first-note, so it queues first
    assert!(data.notifications.len() >= 2);
    let first_id = data.notifications[0].id.clone();
    assert_eq!(first_id, "first-card");

    let drained = drain_notification(&mut data).unwrap();
    assert_eq!(drained.id, "first-card");
    assert_eq!(data.unlocked.len(), 1);
    assert_eq!(data.notifications[0].id, "first-note");

    // A drained id never re-queues
    evaluate(&mut data, Utc::now());
    assert!(!data.notifications.iter().any(|n| n.id == "first-card"));
  }

  #[test]
  fn test_drain_empty_queue() {
    let mut data = AppData::default();
    assert!(drain_notification(&mut data).is_none());
  }

  #[test]
  fn test_progress_pct_clamped() {
    assert_eq!(progress_pct(0, 10), 0);
    assert_eq!(progress_pct(5, 10), 50);
    assert_eq!(progress_pct(10, 10), 100);
    assert_eq!(progress_pct(25, 10), 100);
  }
}
