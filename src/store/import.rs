//! Blob export and import.
//!
//! Export hands out the serialized blob verbatim. Import validates the
//! uploaded document structurally before anything is replaced, and a
//! backup of the current blob is taken first so a failed import leaves
//! prior state untouched.

use serde::Serialize;

use super::{AppData, Store, StoreError};

/// Top-level keys an imported document must carry
pub const REQUIRED_KEYS: &[&str] = &["flashcards", "notes", "settings"];

#[derive(Debug, Serialize)]
pub struct ImportSummary {
  pub flashcards: usize,
  pub notes: usize,
  pub quiz_sessions: usize,
}

/// Parse and structurally validate an uploaded blob. Checks the
/// required top-level keys before the full deserialization so an
/// unrelated JSON document is rejected with a useful message.
pub fn validate_import(bytes: &[u8]) -> Result<AppData, StoreError> {
  let value: serde_json::Value = serde_json::from_slice(bytes)
    .map_err(|e| StoreError::InvalidImport(format!("not valid JSON: {}", e)))?;

  let object = value
    .as_object()
    .ok_or_else(|| StoreError::InvalidImport("top level is not an object".to_string()))?;

  for key in REQUIRED_KEYS {
    if !object.contains_key(*key) {
      return Err(StoreError::InvalidImport(format!("missing required key '{}'", key)));
    }
  }

  serde_json::from_value(value)
    .map_err(|e| StoreError::InvalidImport(format!("unexpected document shape: {}", e)))
}

/// Serialize the current blob for download
pub fn export_data(store: &Store) -> Result<Vec<u8>, StoreError> {
  let json = store.read(|data| serde_json::to_string_pretty(data))?;
  Ok(json.into_bytes())
}

/// Validate and apply an uploaded blob. The previous blob file is kept
/// as `.json.old`; on validation failure nothing changes.
pub fn import_data(store: &Store, bytes: &[u8]) -> Result<ImportSummary, StoreError> {
  let data = validate_import(bytes)?;

  // Backup current state before overwriting
  let path = store.path();
  if path.exists() {
    let backup_path = path.with_extension("json.old");
    if let Err(e) = std::fs::copy(path, &backup_path) {
      tracing::error!("Failed to back up store before import: {}", e);
      return Err(e.into());
    }
  }

  let summary = ImportSummary {
    flashcards: data.flashcards.len(),
    notes: data.notes.len(),
    quiz_sessions: data.quiz_sessions.len(),
  };

  store.replace(data)?;
  tracing::info!(
    "Imported blob: {} flashcards, {} notes, {} quiz sessions",
    summary.flashcards,
    summary.notes,
    summary.quiz_sessions
  );
  Ok(summary)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::TestEnv;

  fn minimal_blob() -> String {
    r#"{"flashcards":[],"notes":[],"settings":{}}"#.to_string()
  }

  #[test]
  fn test_validate_accepts_minimal_blob() {
    let data = validate_import(minimal_blob().as_bytes()).unwrap();
    assert!(data.flashcards.is_empty());
  }

  #[test]
  fn test_validate_rejects_non_json() {
    let err = validate_import(b"hello").unwrap_err();
    assert!(matches!(err, StoreError::InvalidImport(_)));
  }

  #[test]
  fn test_validate_rejects_non_object() {
    let err = validate_import(b"[1, 2, 3]").unwrap_err();
    assert!(matches!(err, StoreError::InvalidImport(_)));
  }

  #[test]
  fn test_validate_rejects_missing_keys() {
    let err = validate_import(br#"{"flashcards":[]}"#).unwrap_err();
    match err {
      StoreError::InvalidImport(msg) => assert!(msg.contains("notes")),
      other => panic!("unexpected error: {}", other),
    }
  }

  #[test]
  fn test_failed_import_leaves_state_untouched() {
    let env = TestEnv::new();
    env.store.update(|data| {
      data
        .notes
        .push(crate::domain::Note::new(1, "keep me".into(), "body".into(), None, vec![]));
    });

    let result = import_data(&env.store, b"{\"bogus\": true}");
    assert!(result.is_err());
    env.store.read(|data| {
      assert_eq!(data.notes.len(), 1);
      assert_eq!(data.notes[0].title, "keep me");
    });
  }

  #[test]
  fn test_import_replaces_state_and_backs_up() {
    let env = TestEnv::new();
    env.store.update(|data| {
      data
        .notes
        .push(crate::domain::Note::new(1, "old".into(), "body".into(), None, vec![]));
    });

    let summary = import_data(&env.store, minimal_blob().as_bytes()).unwrap();
    assert_eq!(summary.notes, 0);
    env.store.read(|data| assert!(data.notes.is_empty()));
    assert!(env.store.path().with_extension("json.old").exists());
  }

  #[test]
  fn test_export_roundtrip() {
    let env = TestEnv::new();
    env.store.update(|data| {
      data
        .notes
        .push(crate::domain::Note::new(1, "note".into(), "body".into(), None, vec![]));
    });

    let bytes = export_data(&env.store).unwrap();
    let data = validate_import(&bytes).unwrap();
    assert_eq!(data.notes.len(), 1);
  }
}
