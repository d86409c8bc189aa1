//! Quiz question generation.
//!
//! A question type is drawn from a weighted distribution over the
//! selected types, then bound to randomly chosen elements. Questions
//! embed their own answer key and explanation, so grading later never
//! touches reference data.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Deserialize;

use crate::config;
use crate::content;
use crate::domain::{Element, ElementCategory, Language, QuestionType, QuizDifficulty, QuizQuestion};

/// Relative selection weight per question type. When only a subset of
/// types is requested the weights are renormalized over that subset.
static TYPE_WEIGHTS: &[(QuestionType, f64)] = &[
  (QuestionType::SymbolToName, 3.0),
  (QuestionType::NameToSymbol, 3.0),
  (QuestionType::NumberToName, 2.0),
  (QuestionType::NameToNumber, 2.0),
  (QuestionType::NameToCategory, 1.5),
];

fn weight_of(question_type: QuestionType) -> f64 {
  TYPE_WEIGHTS
    .iter()
    .find(|(qt, _)| *qt == question_type)
    .map(|(_, w)| *w)
    .unwrap_or(1.0)
}

/// Generation request
#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
  #[serde(default)]
  pub difficulty: QuizDifficulty,
  #[serde(default = "default_question_count")]
  pub question_count: usize,
  /// Empty means all types
  #[serde(default)]
  pub question_types: Vec<QuestionType>,
  /// Countdown for timed mode; expiry forces submission client-side
  #[serde(default)]
  pub time_limit_secs: Option<u64>,
}

fn default_question_count() -> usize {
  config::DEFAULT_QUESTION_COUNT
}

impl Default for QuizConfig {
  fn default() -> Self {
    Self {
      difficulty: QuizDifficulty::default(),
      question_count: config::DEFAULT_QUESTION_COUNT,
      question_types: Vec::new(),
      time_limit_secs: None,
    }
  }
}

/// Slice of the catalogue a difficulty draws questions from. Harder
/// quizzes reach further down the table.
pub fn element_pool(difficulty: QuizDifficulty) -> &'static [Element] {
  let catalogue = content::catalogue();
  match difficulty {
    QuizDifficulty::Easy => &catalogue[..20],
    QuizDifficulty::Medium => &catalogue[..56],
    QuizDifficulty::Hard => catalogue,
  }
}

/// Sample a question type via cumulative weights over the selected
/// subset (uniform draw against the running sum).
fn pick_type<R: Rng>(types: &[QuestionType], rng: &mut R) -> QuestionType {
  if types.len() == 1 {
    return types[0];
  }

  let total: f64 = types.iter().map(|qt| weight_of(*qt)).sum();
  let mut target = rng.random_range(0.0..total);
  for qt in types {
    target -= weight_of(*qt);
    if target <= 0.0 {
      return *qt;
    }
  }
  // Floating point slack lands on the last type
  *types.last().expect("type list is never empty here")
}

/// The option text an element contributes under a question type
fn option_text(question_type: QuestionType, element: &Element, language: Language) -> String {
  match question_type {
    QuestionType::SymbolToName | QuestionType::NumberToName => element.name(language).to_string(),
    QuestionType::NameToSymbol => element.symbol.to_string(),
    QuestionType::NameToNumber => element.number.to_string(),
    QuestionType::NameToCategory => element.category.name(language).to_string(),
  }
}

fn prompt_text(question_type: QuestionType, element: &Element, language: Language) -> String {
  let name = element.name(language);
  match (question_type, language) {
    (QuestionType::SymbolToName, Language::En) => {
      format!("What is the name of the element with symbol '{}'?", element.symbol)
    }
    (QuestionType::SymbolToName, Language::Tr) => {
      format!("Sembolü '{}' olan elementin adı nedir?", element.symbol)
    }
    (QuestionType::NameToSymbol, Language::En) => {
      format!("What is the symbol of {}?", name)
    }
    (QuestionType::NameToSymbol, Language::Tr) => {
      format!("{} elementinin sembolü nedir?", name)
    }
    (QuestionType::NumberToName, Language::En) => {
      format!("Which element has atomic number {}?", element.number)
    }
    (QuestionType::NumberToName, Language::Tr) => {
      format!("Atom numarası {} olan element hangisidir?", element.number)
    }
    (QuestionType::NameToNumber, Language::En) => {
      format!("What is the atomic number of {}?", name)
    }
    (QuestionType::NameToNumber, Language::Tr) => {
      format!("{} elementinin atom numarası kaçtır?", name)
    }
    (QuestionType::NameToCategory, Language::En) => {
      format!("Which category does {} belong to?", name)
    }
    (QuestionType::NameToCategory, Language::Tr) => {
      format!("{} hangi element grubuna aittir?", name)
    }
  }
}

fn explanation_text(element: &Element, language: Language) -> String {
  match language {
    Language::En => format!(
      "{} ({}) is element {}, a {}.",
      element.name_en,
      element.symbol,
      element.number,
      element.category.name(Language::En).to_lowercase()
    ),
    Language::Tr => format!(
      "{} ({}), {} numaralı elementtir ve {} grubundadır.",
      element.name_tr,
      element.symbol,
      element.number,
      element.category.name(Language::Tr).to_lowercase()
    ),
  }
}

/// Distractor options for a category question: other category names.
fn category_distractors<R: Rng>(
  correct: ElementCategory,
  language: Language,
  rng: &mut R,
) -> Vec<String> {
  let mut others: Vec<String> = [
    ElementCategory::AlkaliMetal,
    ElementCategory::AlkalineEarthMetal,
    ElementCategory::TransitionMetal,
    ElementCategory::PostTransitionMetal,
    ElementCategory::Metalloid,
    ElementCategory::Nonmetal,
    ElementCategory::Halogen,
    ElementCategory::NobleGas,
    ElementCategory::Lanthanide,
    ElementCategory::Actinide,
  ]
  .iter()
  .filter(|c| **c != correct)
  .map(|c| c.name(language).to_string())
  .collect();

  others.shuffle(rng);
  others.truncate(config::DISTRACTOR_COUNT);
  others
}

/// Distractor options drawn from other elements, without replacement.
/// Degrades to fewer options when the pool cannot supply three
/// distinct texts.
fn element_distractors<R: Rng>(
  question_type: QuestionType,
  correct: &Element,
  language: Language,
  rng: &mut R,
) -> Vec<String> {
  let correct_text = option_text(question_type, correct, language);
  let candidates: Vec<&Element> = content::catalogue()
    .iter()
    .filter(|e| e.number != correct.number)
    .collect();

  let mut options: Vec<String> = Vec::new();
  for element in candidates.choose_multiple(rng, candidates.len()).copied() {
    if options.len() == config::DISTRACTOR_COUNT {
      break;
    }
    let text = option_text(question_type, element, language);
    if text != correct_text && !options.contains(&text) {
      options.push(text);
    }
  }
  options
}

fn build_question<R: Rng>(
  id: i64,
  question_type: QuestionType,
  pool: &[Element],
  language: Language,
  rng: &mut R,
) -> QuizQuestion {
  let element = pool.choose(rng).expect("element pool is never empty");
  let correct_answer = option_text(question_type, element, language);

  let mut options = match question_type {
    QuestionType::NameToCategory => category_distractors(element.category, language, rng),
    _ => element_distractors(question_type, element, language, rng),
  };
  options.push(correct_answer.clone());
  options.shuffle(rng);

  QuizQuestion {
    id,
    question_type,
    prompt: prompt_text(question_type, element, language),
    options,
    correct_answer,
    explanation: explanation_text(element, language),
    element: element.number,
  }
}

/// Generate a quiz. Question ids are assigned sequentially from
/// `start_id` so they stay unique across the stored history.
pub fn generate(config: &QuizConfig, language: Language, start_id: i64) -> Vec<QuizQuestion> {
  let types: Vec<QuestionType> = if config.question_types.is_empty() {
    QuestionType::all().to_vec()
  } else {
    config.question_types.clone()
  };

  let count = config.question_count.min(crate::config::MAX_QUESTION_COUNT);
  let pool = element_pool(config.difficulty);
  let mut rng = rand::rng();

  (0..count)
    .map(|i| {
      let question_type = pick_type(&types, &mut rng);
      build_question(start_id + i as i64, question_type, pool, language, &mut rng)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_pool_sizes() {
    assert_eq!(element_pool(QuizDifficulty::Easy).len(), 20);
    assert_eq!(element_pool(QuizDifficulty::Medium).len(), 56);
    assert_eq!(element_pool(QuizDifficulty::Hard).len(), 118);
  }

  #[test]
  fn test_pick_type_respects_subset() {
    let types = vec![QuestionType::SymbolToName, QuestionType::NameToNumber];
    let mut rng = rand::rng();
    for _ in 0..100 {
      let picked = pick_type(&types, &mut rng);
      assert!(types.contains(&picked));
    }
  }

  #[test]
  fn test_pick_type_single() {
    let mut rng = rand::rng();
    assert_eq!(
      pick_type(&[QuestionType::NameToCategory], &mut rng),
      QuestionType::NameToCategory
    );
  }

  #[test]
  fn test_generated_count() {
    let config = QuizConfig {
      question_count: 7,
      ..QuizConfig::default()
    };
    let questions = generate(&config, Language::En, 1);
    assert_eq!(questions.len(), 7);
  }

  #[test]
  fn test_question_count_capped() {
    let config = QuizConfig {
      question_count: 10_000,
      ..QuizConfig::default()
    };
    let questions = generate(&config, Language::En, 1);
    assert_eq!(questions.len(), crate::config::MAX_QUESTION_COUNT);
  }

  #[test]
  fn test_question_ids_sequential() {
    let config = QuizConfig {
      question_count: 5,
      ..QuizConfig::default()
    };
    let questions = generate(&config, Language::En, 42);
    let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![42, 43, 44, 45, 46]);
  }

  #[test]
  fn test_options_distinct_with_one_correct() {
    let config = QuizConfig {
      question_count: 40,
      difficulty: QuizDifficulty::Hard,
      ..QuizConfig::default()
    };
    for question in generate(&config, Language::En, 1) {
      assert_eq!(question.options.len(), 4);

      let mut sorted = question.options.clone();
      sorted.sort();
      sorted.dedup();
      assert_eq!(sorted.len(), 4, "options must be pairwise distinct");

      let correct_matches = question
        .options
        .iter()
        .filter(|o| **o == question.correct_answer)
        .count();
      assert_eq!(correct_matches, 1);
    }
  }

  #[test]
  fn test_questions_limited_to_difficulty_pool() {
    let config = QuizConfig {
      question_count: 30,
      difficulty: QuizDifficulty::Easy,
      ..QuizConfig::default()
    };
    for question in generate(&config, Language::En, 1) {
      assert!(question.element <= 20);
    }
  }

  #[test]
  fn test_requested_types_only() {
    let config = QuizConfig {
      question_count: 20,
      question_types: vec![QuestionType::NameToSymbol],
      ..QuizConfig::default()
    };
    for question in generate(&config, Language::En, 1) {
      assert_eq!(question.question_type, QuestionType::NameToSymbol);
    }
  }

  #[test]
  fn test_localized_prompts() {
    let config = QuizConfig {
      question_count: 5,
      question_types: vec![QuestionType::SymbolToName],
      ..QuizConfig::default()
    };
    for question in generate(&config, Language::Tr, 1) {
      assert!(question.prompt.contains("elementin adı nedir"));
    }
  }

  #[test]
  fn test_grading_is_self_contained() {
    let config = QuizConfig {
      question_count: 10,
      ..QuizConfig::default()
    };
    for question in generate(&config, Language::En, 1) {
      assert!(question.grade(Some(&question.correct_answer)));
      for option in &question.options {
        if *option != question.correct_answer {
          assert!(!question.grade(Some(option)));
        }
      }
    }
  }
}
