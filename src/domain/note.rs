use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-form study note, optionally linked to an element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
  pub id: i64,
  pub title: String,
  pub content: String,
  /// Atomic number of the linked element, if any
  pub element: Option<u32>,
  #[serde(default)]
  pub tags: Vec<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Note {
  pub fn new(id: i64, title: String, content: String, element: Option<u32>, tags: Vec<String>) -> Self {
    let now = Utc::now();
    Self {
      id,
      title,
      content,
      element,
      tags,
      created_at: now,
      updated_at: now,
    }
  }

  /// Apply an edit, refreshing the updated timestamp
  pub fn update(&mut self, title: String, content: String, element: Option<u32>, tags: Vec<String>) {
    self.title = title;
    self.content = content;
    self.element = element;
    self.tags = tags;
    self.updated_at = Utc::now();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_note_timestamps_match() {
    let note = Note::new(1, "Oxides".into(), "FeO, Fe2O3".into(), Some(26), vec![]);
    assert_eq!(note.created_at, note.updated_at);
  }

  #[test]
  fn test_update_refreshes_timestamp() {
    let mut note = Note::new(1, "Oxides".into(), "FeO".into(), None, vec![]);
    let created = note.created_at;
    note.update("Oxides".into(), "FeO, Fe2O3".into(), Some(26), vec!["redox".into()]);
    assert_eq!(note.created_at, created);
    assert!(note.updated_at >= created);
    assert_eq!(note.tags, vec!["redox".to_string()]);
    assert_eq!(note.element, Some(26));
  }
}
