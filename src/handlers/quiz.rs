//! Quiz generation, submission and history.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{QuizDifficulty, QuizMode, QuizQuestion, QuizSession};
use crate::quiz::{self, QuizConfig};
use crate::state::AppState;
use crate::achievements;

use super::error;

#[derive(Serialize)]
pub struct GeneratedQuiz {
  pub questions: Vec<QuizQuestion>,
  pub difficulty: QuizDifficulty,
  pub time_limit_secs: Option<u64>,
  pub started_at: DateTime<Utc>,
}

/// Generate a fresh set of questions. Questions embed their own answer
/// keys; the client runs the quiz (including any countdown) and posts
/// everything back to /quiz/submit.
pub async fn generate_quiz(
  State(state): State<AppState>,
  Json(config): Json<QuizConfig>,
) -> Response {
  if config.question_count == 0 {
    return error(StatusCode::BAD_REQUEST, "Question count must be at least 1");
  }

  let (language, start_id) = state
    .store
    .read(|data| (data.settings.language, data.next_question_id()));
  let questions = quiz::generate(&config, language, start_id);

  Json(GeneratedQuiz {
    questions,
    difficulty: config.difficulty,
    time_limit_secs: config.time_limit_secs,
    started_at: Utc::now(),
  })
  .into_response()
}

#[derive(Deserialize)]
pub struct SubmitQuizForm {
  pub questions: Vec<QuizQuestion>,
  /// One entry per question; missing tail entries count as unanswered
  /// (forced submission when the countdown expires)
  #[serde(default)]
  pub answers: Vec<Option<String>>,
  #[serde(default)]
  pub difficulty: QuizDifficulty,
  #[serde(default)]
  pub mode: QuizMode,
  #[serde(default)]
  pub started_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct QuizResult {
  pub session: QuizSession,
  pub correct_count: usize,
  pub newly_unlocked: Vec<String>,
}

/// Grade a finished quiz and append it to the immutable history.
pub async fn submit_quiz(
  State(state): State<AppState>,
  Json(form): Json<SubmitQuizForm>,
) -> Response {
  if form.questions.is_empty() {
    return error(StatusCode::BAD_REQUEST, "Quiz has no questions");
  }
  if form.answers.len() > form.questions.len() {
    return error(StatusCode::BAD_REQUEST, "More answers than questions");
  }

  let mut answers = form.answers;
  answers.resize(form.questions.len(), None);

  let now = Utc::now();
  let score = QuizSession::compute_score(&form.questions, &answers);
  let result = state.store.update(|data| {
    let session = QuizSession {
      id: data.next_quiz_id(),
      questions: form.questions,
      answers,
      score,
      difficulty: form.difficulty,
      mode: form.mode,
      started_at: form.started_at.unwrap_or(now),
      finished_at: now,
    };
    data.quiz_sessions.push(session.clone());
    let newly = achievements::evaluate(data, now);
    QuizResult {
      correct_count: session.correct_count(),
      session,
      newly_unlocked: newly.iter().map(|d| d.id.to_string()).collect(),
    }
  });

  for id in &result.newly_unlocked {
    tracing::info!("Achievement unlocked: {}", id);
  }
  (StatusCode::CREATED, Json(result)).into_response()
}

#[derive(Serialize)]
pub struct QuizHistory {
  pub sessions: Vec<QuizSession>,
  pub count: usize,
  pub average_score: f64,
  pub best_score: u8,
}

pub async fn quiz_history(State(state): State<AppState>) -> Json<QuizHistory> {
  let history = state.store.read(|data| {
    let sessions = data.quiz_sessions.clone();
    let count = sessions.len();
    let average_score = if count > 0 {
      sessions.iter().map(|s| s.score as f64).sum::<f64>() / count as f64
    } else {
      0.0
    };
    let best_score = sessions.iter().map(|s| s.score).max().unwrap_or(0);
    QuizHistory {
      sessions,
      count,
      average_score,
      best_score,
    }
  });
  Json(history)
}
