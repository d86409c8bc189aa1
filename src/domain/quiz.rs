use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Question archetypes the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
  /// "What is the name of the element with symbol X?"
  SymbolToName,
  /// "What is the symbol of element X?"
  NameToSymbol,
  /// "Which element has atomic number N?"
  NumberToName,
  /// "What is the atomic number of X?"
  NameToNumber,
  /// "Which category does X belong to?"
  NameToCategory,
}

impl QuestionType {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::SymbolToName => "symbol_to_name",
      Self::NameToSymbol => "name_to_symbol",
      Self::NumberToName => "number_to_name",
      Self::NameToNumber => "name_to_number",
      Self::NameToCategory => "name_to_category",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "symbol_to_name" => Some(Self::SymbolToName),
      "name_to_symbol" => Some(Self::NameToSymbol),
      "number_to_name" => Some(Self::NumberToName),
      "name_to_number" => Some(Self::NameToNumber),
      "name_to_category" => Some(Self::NameToCategory),
      _ => None,
    }
  }

  pub fn all() -> [QuestionType; 5] {
    [
      Self::SymbolToName,
      Self::NameToSymbol,
      Self::NumberToName,
      Self::NameToNumber,
      Self::NameToCategory,
    ]
  }
}

/// Quiz difficulty bounds the element pool questions draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizDifficulty {
  Easy,
  #[default]
  Medium,
  Hard,
}

impl QuizDifficulty {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Easy => "easy",
      Self::Medium => "medium",
      Self::Hard => "hard",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "easy" => Some(Self::Easy),
      "medium" => Some(Self::Medium),
      "hard" => Some(Self::Hard),
      _ => None,
    }
  }
}

/// How a quiz was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
  /// Free practice, no countdown
  #[default]
  Practice,
  /// Countdown quiz; hitting zero forces submission
  Timed,
}

/// A self-contained multiple-choice question. Embeds its own answer key
/// and explanation so grading never consults mutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
  pub id: i64,
  pub question_type: QuestionType,
  pub prompt: String,
  /// Shuffled options, exactly one of which equals `correct_answer`
  pub options: Vec<String>,
  pub correct_answer: String,
  pub explanation: String,
  /// Atomic number of the element the question is about
  pub element: u32,
}

impl QuizQuestion {
  /// Grade an answer. Pure equality against the stored key;
  /// an absent answer is incorrect (forced submission on timeout).
  pub fn grade(&self, answer: Option<&str>) -> bool {
    answer == Some(self.correct_answer.as_str())
  }
}

/// A finished quiz. Append-only history record, immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
  pub id: i64,
  pub questions: Vec<QuizQuestion>,
  /// One slot per question; None means unanswered
  pub answers: Vec<Option<String>>,
  /// 0..=100
  pub score: u8,
  pub difficulty: QuizDifficulty,
  pub mode: QuizMode,
  pub started_at: DateTime<Utc>,
  pub finished_at: DateTime<Utc>,
}

impl QuizSession {
  pub fn correct_count(&self) -> usize {
    self
      .questions
      .iter()
      .zip(self.answers.iter())
      .filter(|(q, a)| q.grade(a.as_deref()))
      .count()
  }

  /// Score as a 0-100 percentage, rounded to nearest
  pub fn compute_score(questions: &[QuizQuestion], answers: &[Option<String>]) -> u8 {
    if questions.is_empty() {
      return 0;
    }
    let correct = questions
      .iter()
      .zip(answers.iter())
      .filter(|(q, a)| q.grade(a.as_deref()))
      .count();
    ((correct as f64 / questions.len() as f64) * 100.0).round() as u8
  }
}
