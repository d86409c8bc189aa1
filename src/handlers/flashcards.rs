//! Flashcard CRUD and review submission.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::{FlashCard, SessionState};
use crate::state::AppState;
use crate::{achievements, content, session, srs};

use super::{error, today};

pub async fn list_cards(State(state): State<AppState>) -> Json<Vec<FlashCard>> {
  Json(state.store.read(|data| data.flashcards.clone()))
}

pub async fn due_cards(State(state): State<AppState>) -> Json<Vec<FlashCard>> {
  let today = today();
  let due = state.store.read(|data| {
    data
      .flashcards
      .iter()
      .filter(|c| srs::is_due(c.next_review, today))
      .cloned()
      .collect()
  });
  Json(due)
}

#[derive(Deserialize)]
pub struct CreateCardForm {
  pub front: String,
  pub back: String,
  #[serde(default)]
  pub element: Option<u32>,
}

pub async fn create_card(
  State(state): State<AppState>,
  Json(form): Json<CreateCardForm>,
) -> Response {
  let front = form.front.trim().to_string();
  let back = form.back.trim().to_string();
  if front.is_empty() || back.is_empty() {
    return error(StatusCode::BAD_REQUEST, "Front and back text are required");
  }
  if let Some(number) = form.element {
    if content::by_number(number).is_none() {
      return error(StatusCode::BAD_REQUEST, "Unknown element");
    }
  }

  let card = state.store.update(|data| {
    let card = FlashCard::new(data.next_flashcard_id(), front, back, form.element, today());
    data.flashcards.push(card.clone());
    let newly = achievements::evaluate(data, Utc::now());
    for def in newly {
      tracing::info!("Achievement unlocked: {}", def.id);
    }
    card
  });

  (StatusCode::CREATED, Json(card)).into_response()
}

pub async fn delete_card(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
  let removed = state.store.update(|data| {
    let before = data.flashcards.len();
    data.flashcards.retain(|c| c.id != id);
    data.favorites.flashcards.retain(|f| *f != id);
    data.flashcards.len() < before
  });

  if removed {
    StatusCode::NO_CONTENT.into_response()
  } else {
    error(StatusCode::NOT_FOUND, "Flashcard not found")
  }
}

#[derive(Deserialize)]
pub struct ReviewForm {
  pub correct: bool,
}

#[derive(Serialize)]
pub struct ReviewOutcome {
  pub card: FlashCard,
  pub session_state: SessionState,
  pub newly_unlocked: Vec<String>,
}

/// Apply a review: move the card through the Leitner ladder, count the
/// answer, mark the linked element as studied today and re-run the
/// achievement evaluator.
pub async fn submit_review(
  State(state): State<AppState>,
  Path(id): Path<i64>,
  Json(form): Json<ReviewForm>,
) -> Response {
  let today = today();
  let outcome = state.store.update(|data| {
    let element = {
      let Some(card) = data.flashcards.iter_mut().find(|c| c.id == id) else {
        return None;
      };

      let result = srs::schedule_next_review(card.leitner_box, form.correct, today);
      card.leitner_box = result.leitner_box;
      card.next_review = result.next_review;
      if form.correct {
        card.correct_reviews += 1;
      } else {
        card.incorrect_reviews += 1;
      }
      card.element
    };

    // Reviewing a linked card counts toward today's study session
    match element {
      Some(number) => {
        session::mark_element_shown(data, today, number);
      }
      None => {
        session::current(data, today);
      }
    }

    let newly = achievements::evaluate(data, Utc::now());
    let newly_unlocked: Vec<String> = newly.iter().map(|d| d.id.to_string()).collect();

    let card = data.flashcards.iter().find(|c| c.id == id).cloned();
    let session_state = data
      .progress
      .as_ref()
      .map(|p| p.state())
      .unwrap_or(SessionState::Active);
    card.map(|card| ReviewOutcome {
      card,
      session_state,
      newly_unlocked,
    })
  });

  match outcome {
    Some(outcome) => {
      for id in &outcome.newly_unlocked {
        tracing::info!("Achievement unlocked: {}", id);
      }
      Json(outcome).into_response()
    }
    None => error(StatusCode::NOT_FOUND, "Flashcard not found"),
  }
}
