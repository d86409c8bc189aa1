use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What an achievement measures. A closed set of evaluation kinds keeps
/// achievement definitions plain data that can be serialized and tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
  FlashcardsCreated,
  ReviewsCompleted,
  CorrectReviews,
  CardsMastered,
  NotesCreated,
  QuizzesCompleted,
  PerfectQuizzes,
  ElementsStudied,
  FavoritesSaved,
  DailyGoalsMet,
  /// Counts other unlocked achievements; evaluated after all other kinds
  UnlockedAchievements,
}

impl AchievementKind {
  pub fn is_meta(&self) -> bool {
    matches!(self, Self::UnlockedAchievements)
  }
}

/// Static achievement definition: id, targets and the measured kind.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
  pub id: &'static str,
  pub name_en: &'static str,
  pub name_tr: &'static str,
  pub kind: AchievementKind,
  pub target: u64,
}

/// Mutable per-achievement state persisted in the blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementState {
  pub id: String,
  pub unlocked: bool,
  pub unlocked_at: Option<DateTime<Utc>>,
  /// Most recent measured value
  pub current_value: u64,
  /// min(current/target * 100, 100)
  pub progress: u8,
}

impl AchievementState {
  pub fn new(id: &str) -> Self {
    Self {
      id: id.to_string(),
      unlocked: false,
      unlocked_at: None,
      current_value: 0,
      progress: 0,
    }
  }
}

/// Entry in the FIFO notification queue, waiting for the UI to drain it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementNotification {
  pub id: String,
  pub queued_at: DateTime<Utc>,
}

/// Permanent record written when a notification is drained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockRecord {
  pub id: String,
  pub unlocked_at: DateTime<Utc>,
}
