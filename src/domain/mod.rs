pub mod achievement;
pub mod card;
pub mod element;
pub mod favorites;
pub mod note;
pub mod progress;
pub mod quiz;
pub mod settings;

pub use achievement::{
  AchievementDef, AchievementKind, AchievementNotification, AchievementState, UnlockRecord,
};
pub use card::FlashCard;
pub use element::{Element, ElementCategory};
pub use favorites::Favorites;
pub use note::Note;
pub use progress::{DailyProgress, SessionState, StudyStats};
pub use quiz::{QuestionType, QuizDifficulty, QuizMode, QuizQuestion, QuizSession};
pub use settings::{FontSize, Language, SoundEffects, Theme, UserSettings};
