//! Static achievement definitions.

use crate::domain::{AchievementDef, AchievementKind};

use AchievementKind::*;

/// All achievement definitions. The meta achievement (`chemist-badge`)
/// must stay last-evaluated; the evaluator handles that by kind, not by
/// position, so ordering here is display order only.
#[rustfmt::skip]
pub static ACHIEVEMENTS: &[AchievementDef] = &[
  AchievementDef { id: "first-card", name_en: "First Card", name_tr: "İlk Kart", kind: FlashcardsCreated, target: 1 },
  AchievementDef { id: "card-collector", name_en: "Card Collector", name_tr: "Kart Koleksiyoncusu", kind: FlashcardsCreated, target: 25 },
  AchievementDef { id: "first-review", name_en: "First Review", name_tr: "İlk Tekrar", kind: ReviewsCompleted, target: 1 },
  AchievementDef { id: "century-reviewer", name_en: "Hundred Reviews", name_tr: "Yüz Tekrar", kind: ReviewsCompleted, target: 100 },
  AchievementDef { id: "sharp-memory", name_en: "Sharp Memory", name_tr: "Keskin Hafıza", kind: CorrectReviews, target: 50 },
  AchievementDef { id: "box-five", name_en: "Top of the Ladder", name_tr: "Merdivenin Zirvesi", kind: CardsMastered, target: 10 },
  AchievementDef { id: "first-note", name_en: "First Note", name_tr: "İlk Not", kind: NotesCreated, target: 1 },
  AchievementDef { id: "lab-journal", name_en: "Lab Journal", name_tr: "Laboratuvar Defteri", kind: NotesCreated, target: 10 },
  AchievementDef { id: "first-quiz", name_en: "First Quiz", name_tr: "İlk Sınav", kind: QuizzesCompleted, target: 1 },
  AchievementDef { id: "quiz-master", name_en: "Quiz Master", name_tr: "Sınav Ustası", kind: QuizzesCompleted, target: 20 },
  AchievementDef { id: "perfect-score", name_en: "Perfect Score", name_tr: "Tam Puan", kind: PerfectQuizzes, target: 1 },
  AchievementDef { id: "element-explorer", name_en: "Element Explorer", name_tr: "Element Kaşifi", kind: ElementsStudied, target: 30 },
  AchievementDef { id: "full-table", name_en: "The Whole Table", name_tr: "Tüm Tablo", kind: ElementsStudied, target: 118 },
  AchievementDef { id: "collector", name_en: "Collector", name_tr: "Koleksiyoncu", kind: FavoritesSaved, target: 10 },
  AchievementDef { id: "goal-getter", name_en: "Goal Getter", name_tr: "Hedef Avcısı", kind: DailyGoalsMet, target: 7 },
  AchievementDef { id: "chemist-badge", name_en: "Chemist", name_tr: "Kimyager", kind: UnlockedAchievements, target: 15 },
];

pub fn find(id: &str) -> Option<&'static AchievementDef> {
  ACHIEVEMENTS.iter().find(|def| def.id == id)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ids_unique() {
    let mut ids: Vec<&str> = ACHIEVEMENTS.iter().map(|d| d.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), ACHIEVEMENTS.len());
  }

  #[test]
  fn test_exactly_one_meta() {
    let meta_count = ACHIEVEMENTS.iter().filter(|d| d.kind.is_meta()).count();
    assert_eq!(meta_count, 1);
    assert_eq!(find("chemist-badge").unwrap().kind, AchievementKind::UnlockedAchievements);
  }

  #[test]
  fn test_meta_target_reachable() {
    let meta = find("chemist-badge").unwrap();
    let non_meta = ACHIEVEMENTS.iter().filter(|d| !d.kind.is_meta()).count() as u64;
    assert!(meta.target <= non_meta);
  }

  #[test]
  fn test_find_unknown() {
    assert!(find("nobel-prize").is_none());
  }
}
