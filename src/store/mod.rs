//! Whole-blob JSON persistence.
//!
//! All mutable app state lives in a single `AppData` value. Every
//! mutation is a synchronous read-modify-write of that value behind one
//! mutex (there is only one logical writer), followed by a rewrite of
//! the backing file. A failed write is logged and swallowed: the worst
//! failure mode is "state did not persist", never a crashed request.

pub mod import;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::domain::{
  AchievementNotification, AchievementState, DailyProgress, Favorites, FlashCard, Note,
  QuizSession, StudyStats, UnlockRecord, UserSettings,
};

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),
  #[error("invalid import: {0}")]
  InvalidImport(String),
}

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
  /// Log the error at warn level and return None
  fn log_warn(self, context: &str) -> Option<T>;
  /// Log the error at warn level and return the default
  fn log_warn_default(self, context: &str) -> T
  where
    T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
  fn log_warn(self, context: &str) -> Option<T> {
    match self {
      Ok(v) => Some(v),
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        None
      }
    }
  }

  fn log_warn_default(self, context: &str) -> T
  where
    T: Default,
  {
    match self {
      Ok(v) => v,
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        T::default()
      }
    }
  }
}

/// The persisted blob. Every field carries a serde default so a blob
/// written by an older version (or with missing keys) always
/// deserializes to a structurally complete value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppData {
  pub flashcards: Vec<FlashCard>,
  pub notes: Vec<Note>,
  pub quiz_sessions: Vec<QuizSession>,
  pub favorites: Favorites,
  pub achievements: Vec<AchievementState>,
  /// FIFO queue of unlock notifications awaiting UI display
  pub notifications: Vec<AchievementNotification>,
  /// Permanent record of drained notifications
  pub unlocked: Vec<UnlockRecord>,
  pub settings: UserSettings,
  /// The single current daily session; None before the first study
  pub progress: Option<DailyProgress>,
  pub stats: StudyStats,
}

impl AppData {
  pub fn next_flashcard_id(&self) -> i64 {
    self.flashcards.iter().map(|c| c.id).max().unwrap_or(0) + 1
  }

  pub fn next_note_id(&self) -> i64 {
    self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1
  }

  pub fn next_quiz_id(&self) -> i64 {
    self.quiz_sessions.iter().map(|s| s.id).max().unwrap_or(0) + 1
  }

  pub fn next_question_id(&self) -> i64 {
    self
      .quiz_sessions
      .iter()
      .flat_map(|s| s.questions.iter().map(|q| q.id))
      .max()
      .unwrap_or(0)
      + 1
  }
}

/// Handle to the persisted blob, cheap to clone into handlers.
#[derive(Clone)]
pub struct Store {
  path: Arc<PathBuf>,
  data: Arc<Mutex<AppData>>,
  save_epoch: Arc<AtomicU64>,
}

impl Store {
  /// Open (or create) the store at `path`. An unreadable or corrupt
  /// blob never blocks startup: the broken file is set aside and the
  /// app continues from defaults.
  pub fn open(path: &Path) -> Result<Self, StoreError> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).ok();
    }

    // Keep a backup of the previous blob before this run touches it
    if path.exists() {
      let backup_path = path.with_extension("json.backup");
      if let Err(e) = std::fs::copy(path, &backup_path) {
        tracing::warn!("Could not create store backup: {}", e);
      }
    }

    let data = match std::fs::read_to_string(path) {
      Ok(contents) => match serde_json::from_str::<AppData>(&contents) {
        Ok(data) => data,
        Err(e) => {
          tracing::error!("Store blob is corrupt, starting from defaults: {}", e);
          let corrupt_path = path.with_extension("json.corrupt");
          std::fs::copy(path, &corrupt_path).log_warn("Could not preserve corrupt blob");
          AppData::default()
        }
      },
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppData::default(),
      Err(e) => return Err(e.into()),
    };

    Ok(Self {
      path: Arc::new(path.to_path_buf()),
      data: Arc::new(Mutex::new(data)),
      save_epoch: Arc::new(AtomicU64::new(0)),
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Run a closure against the current snapshot
  pub fn read<T>(&self, f: impl FnOnce(&AppData) -> T) -> T {
    let data = self.data.lock().expect("Store lock poisoned");
    f(&data)
  }

  /// Mutate the blob and persist immediately. Write failures are
  /// logged, never surfaced to the caller.
  pub fn update<T>(&self, f: impl FnOnce(&mut AppData) -> T) -> T {
    let result = {
      let mut data = self.data.lock().expect("Store lock poisoned");
      f(&mut data)
    };
    // A manual save supersedes any scheduled debounced one
    self.save_epoch.fetch_add(1, Ordering::SeqCst);
    self.save().log_warn("Failed to persist store");
    result
  }

  /// Mutate the blob but delay the disk write, coalescing bursts of
  /// rapid updates into one write. Used on the study-progress path;
  /// provides write-count reduction only, no atomicity.
  pub fn update_debounced<T>(&self, f: impl FnOnce(&mut AppData) -> T) -> T {
    let result = {
      let mut data = self.data.lock().expect("Store lock poisoned");
      f(&mut data)
    };

    let epoch = self.save_epoch.fetch_add(1, Ordering::SeqCst) + 1;
    if tokio::runtime::Handle::try_current().is_ok() {
      let store = self.clone();
      tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(config::SAVE_DEBOUNCE_MS)).await;
        // A newer mutation owns the write now
        if store.save_epoch.load(Ordering::SeqCst) == epoch {
          store.save().log_warn("Failed to persist store (debounced)");
        }
      });
    } else {
      self.save().log_warn("Failed to persist store");
    }
    result
  }

  /// Serialize the current snapshot and rewrite the backing file
  pub fn save(&self) -> Result<(), StoreError> {
    let json = self.read(|data| serde_json::to_string_pretty(data))?;
    std::fs::write(self.path.as_ref(), json)?;
    Ok(())
  }

  /// Swap in a whole new blob (import path) and persist it
  pub fn replace(&self, new_data: AppData) -> Result<(), StoreError> {
    {
      let mut data = self.data.lock().expect("Store lock poisoned");
      *data = new_data;
    }
    self.save_epoch.fetch_add(1, Ordering::SeqCst);
    self.save()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Language;
  use crate::testing::TestEnv;
  use chrono::NaiveDate;

  fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
  }

  #[test]
  fn test_open_missing_file_starts_empty() {
    let env = TestEnv::new();
    env.store.read(|data| {
      assert!(data.flashcards.is_empty());
      assert!(data.notes.is_empty());
      assert_eq!(data.settings.language, Language::En);
    });
  }

  #[test]
  fn test_update_persists_and_reloads() {
    let env = TestEnv::new();
    env.store.update(|data| {
      let id = data.next_flashcard_id();
      data
        .flashcards
        .push(FlashCard::new(id, "Na".into(), "Sodium".into(), Some(11), day("2026-03-01")));
    });

    let reopened = Store::open(env.store.path()).unwrap();
    reopened.read(|data| {
      assert_eq!(data.flashcards.len(), 1);
      assert_eq!(data.flashcards[0].front, "Na");
      assert_eq!(data.flashcards[0].next_review, day("2026-03-01"));
    });
  }

  #[test]
  fn test_corrupt_blob_falls_back_to_defaults() {
    let env = TestEnv::new();
    std::fs::write(env.store.path(), "{not json").unwrap();

    let reopened = Store::open(env.store.path()).unwrap();
    reopened.read(|data| assert!(data.flashcards.is_empty()));

    // The broken file is preserved for inspection
    assert!(env.store.path().with_extension("json.corrupt").exists());
  }

  #[test]
  fn test_partial_blob_backfills_defaults() {
    let env = TestEnv::new();
    std::fs::write(env.store.path(), r#"{"notes":[]}"#).unwrap();

    let reopened = Store::open(env.store.path()).unwrap();
    reopened.read(|data| {
      assert!(data.flashcards.is_empty());
      assert!(data.achievements.is_empty());
      assert!(data.progress.is_none());
      assert_eq!(data.settings.daily_flashcard_target, config::DEFAULT_DAILY_TARGET);
    });
  }

  #[test]
  fn test_next_ids() {
    let env = TestEnv::new();
    env.store.update(|data| {
      assert_eq!(data.next_flashcard_id(), 1);
      data
        .flashcards
        .push(FlashCard::new(5, "K".into(), "Potassium".into(), None, day("2026-03-01")));
      assert_eq!(data.next_flashcard_id(), 6);
      assert_eq!(data.next_note_id(), 1);
    });
  }

  #[tokio::test]
  async fn test_debounced_write_coalesces() {
    let env = TestEnv::new();
    for i in 1..=5 {
      env.store.update_debounced(move |data| {
        data
          .flashcards
          .push(FlashCard::new(i, "H".into(), "Hydrogen".into(), None, day("2026-03-01")));
      });
    }

    tokio::time::sleep(std::time::Duration::from_millis(config::SAVE_DEBOUNCE_MS * 3)).await;

    let reopened = Store::open(env.store.path()).unwrap();
    reopened.read(|data| assert_eq!(data.flashcards.len(), 5));
  }

  #[test]
  fn test_open_backs_up_existing_blob() {
    let env = TestEnv::new();
    env.store.update(|data| {
      data.notes.push(Note::new(1, "t".into(), "c".into(), None, vec![]));
    });

    let _reopened = Store::open(env.store.path()).unwrap();
    assert!(env.store.path().with_extension("json.backup").exists());
  }
}
