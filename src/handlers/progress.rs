//! Combined daily and lifetime progress view.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;
use crate::{session, srs};

use super::study::{session_view, SessionView};
use super::today;

#[derive(Serialize)]
pub struct ProgressSummary {
  pub today: SessionView,
  pub elements_studied: usize,
  /// Share of the catalogue studied at least once, 0-100
  pub catalogue_percent: u8,
  pub days_completed: u32,
  pub total_reviews: i64,
  pub correct_reviews: i64,
  pub mastered_cards: usize,
  pub due_cards: usize,
}

pub async fn progress_summary(State(state): State<AppState>) -> Json<ProgressSummary> {
  let today = today();
  let summary = state.store.update(|data| {
    let today_view = session_view(session::current(data, today));

    let studied = data.stats.studied_elements.len();
    ProgressSummary {
      today: today_view,
      elements_studied: studied,
      catalogue_percent: ((studied as f64 / crate::content::catalogue().len() as f64) * 100.0)
        .round() as u8,
      days_completed: data.stats.days_completed,
      total_reviews: data.flashcards.iter().map(|c| c.total_reviews()).sum(),
      correct_reviews: data.flashcards.iter().map(|c| c.correct_reviews).sum(),
      mastered_cards: data.flashcards.iter().filter(|c| c.is_mastered()).count(),
      due_cards: data
        .flashcards
        .iter()
        .filter(|c| srs::is_due(c.next_review, today))
        .count(),
    }
  });
  Json(summary)
}
