//! JSON API handlers. The UI is an external client; every endpoint
//! speaks JSON and all state flows through the shared [`Store`].

pub mod achievements;
pub mod data;
pub mod elements;
pub mod flashcards;
pub mod favorites;
pub mod notes;
pub mod progress;
pub mod quiz;
pub mod settings;
pub mod study;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{extract::State, Json, Router};
use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::domain::SessionState;
use crate::state::AppState;
use crate::{session, srs};

/// Today's date at the local day boundary; sessions and due checks are
/// keyed by local calendar day, not UTC.
pub(crate) fn today() -> NaiveDate {
  Local::now().date_naive()
}

/// JSON error body with the given status
pub(crate) fn error(status: StatusCode, message: &str) -> Response {
  (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn format_due_in(next_review: NaiveDate, today: NaiveDate) -> String {
  let days = (next_review - today).num_days();
  if days <= 0 {
    "today".to_string()
  } else if days == 1 {
    "tomorrow".to_string()
  } else {
    format!("in {} days", days)
  }
}

#[derive(Serialize)]
pub struct IndexSummary {
  pub due_cards: usize,
  pub total_cards: usize,
  pub mastered_cards: usize,
  pub unlocked_achievements: usize,
  pub pending_notifications: usize,
  pub daily_target: u32,
  pub daily_completed: u32,
  pub daily_state: SessionState,
  /// Relative description of the next scheduled review when nothing is
  /// due right now
  pub next_review: Option<String>,
}

/// Overview numbers for the home screen
pub async fn index(State(state): State<AppState>) -> Json<IndexSummary> {
  let today = today();
  let summary = state.store.update(|data| {
    let daily = session::current(data, today).clone();
    let due_cards = data
      .flashcards
      .iter()
      .filter(|c| srs::is_due(c.next_review, today))
      .count();
    let next_review = if due_cards == 0 {
      data
        .flashcards
        .iter()
        .map(|c| c.next_review)
        .min()
        .map(|next| format_due_in(next, today))
    } else {
      None
    };

    IndexSummary {
      due_cards,
      total_cards: data.flashcards.len(),
      mastered_cards: data.flashcards.iter().filter(|c| c.is_mastered()).count(),
      unlocked_achievements: data.achievements.iter().filter(|a| a.unlocked).count(),
      pending_notifications: data.notifications.len(),
      daily_target: daily.target,
      daily_completed: daily.completed_count(),
      daily_state: daily.state(),
      next_review,
    }
  });
  Json(summary)
}

/// The full application router
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/elements", get(elements::list_elements))
    .route("/elements/{number}", get(elements::get_element))
    .route("/flashcards", get(flashcards::list_cards).post(flashcards::create_card))
    .route("/flashcards/due", get(flashcards::due_cards))
    .route("/flashcards/{id}", delete(flashcards::delete_card))
    .route("/flashcards/{id}/review", post(flashcards::submit_review))
    .route("/study/session", get(study::session_status))
    .route("/study/next", get(study::next_element))
    .route("/study/shown", post(study::mark_shown))
    .route("/notes", get(notes::list_notes).post(notes::create_note))
    .route("/notes/{id}", put(notes::update_note).delete(notes::delete_note))
    .route("/quiz/generate", post(quiz::generate_quiz))
    .route("/quiz/submit", post(quiz::submit_quiz))
    .route("/quiz/history", get(quiz::quiz_history))
    .route("/achievements", get(achievements::list_achievements))
    .route("/achievements/notifications", get(achievements::peek_notification))
    .route("/achievements/notifications/drain", post(achievements::drain_notification))
    .route("/favorites", get(favorites::list_favorites))
    .route("/favorites/toggle", post(favorites::toggle_favorite))
    .route("/settings", get(settings::get_settings).put(settings::update_settings))
    .route("/progress", get(progress::progress_summary))
    .route("/data/export", get(data::export_data))
    .route("/data/import", post(data::import_data))
    .with_state(state)
}
