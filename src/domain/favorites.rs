use serde::{Deserialize, Serialize};

/// Membership-only favorite lists, one per entity kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Favorites {
  pub elements: Vec<u32>,
  pub flashcards: Vec<i64>,
  pub notes: Vec<i64>,
  pub questions: Vec<i64>,
}

impl Favorites {
  pub fn total(&self) -> usize {
    self.elements.len() + self.flashcards.len() + self.notes.len() + self.questions.len()
  }
}

/// Toggle membership in a favorite list. Returns true when the id was
/// added, false when it was removed.
pub fn toggle<T: PartialEq + Copy>(list: &mut Vec<T>, id: T) -> bool {
  if let Some(pos) = list.iter().position(|x| *x == id) {
    list.remove(pos);
    false
  } else {
    list.push(id);
    true
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_toggle_adds_then_removes() {
    let mut favorites = Favorites::default();
    assert!(toggle(&mut favorites.elements, 26));
    assert_eq!(favorites.elements, vec![26]);
    assert!(!toggle(&mut favorites.elements, 26));
    assert!(favorites.elements.is_empty());
  }

  #[test]
  fn test_total_counts_all_lists() {
    let mut favorites = Favorites::default();
    toggle(&mut favorites.elements, 1);
    toggle(&mut favorites.flashcards, 2i64);
    toggle(&mut favorites.notes, 3i64);
    assert_eq!(favorites.total(), 3);
  }
}
