//! Favorite toggles for elements, flashcards, notes and quiz questions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::{favorites, Favorites};
use crate::state::AppState;
use crate::{achievements, content};

use super::error;

pub async fn list_favorites(State(state): State<AppState>) -> Json<Favorites> {
  Json(state.store.read(|data| data.favorites.clone()))
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteKind {
  Element,
  Flashcard,
  Note,
  Question,
}

#[derive(Deserialize)]
pub struct ToggleForm {
  pub kind: FavoriteKind,
  pub id: i64,
}

#[derive(Serialize)]
pub struct ToggleResponse {
  pub favorited: bool,
}

/// Flip membership in the matching favorite list. Unknown ids are
/// rejected so the lists only ever reference real entities.
pub async fn toggle_favorite(State(state): State<AppState>, Json(form): Json<ToggleForm>) -> Response {
  let outcome = state.store.update(|data| {
    let favorited = match form.kind {
      FavoriteKind::Element => {
        let number = u32::try_from(form.id).ok();
        match number.and_then(content::by_number) {
          Some(element) => favorites::toggle(&mut data.favorites.elements, element.number),
          None => return Err("Unknown element"),
        }
      }
      FavoriteKind::Flashcard => {
        if !data.flashcards.iter().any(|c| c.id == form.id) {
          return Err("Flashcard not found");
        }
        favorites::toggle(&mut data.favorites.flashcards, form.id)
      }
      FavoriteKind::Note => {
        if !data.notes.iter().any(|n| n.id == form.id) {
          return Err("Note not found");
        }
        favorites::toggle(&mut data.favorites.notes, form.id)
      }
      FavoriteKind::Question => {
        let known = data
          .quiz_sessions
          .iter()
          .flat_map(|s| s.questions.iter())
          .any(|q| q.id == form.id);
        if !known {
          return Err("Question not found");
        }
        favorites::toggle(&mut data.favorites.questions, form.id)
      }
    };

    achievements::evaluate(data, Utc::now());
    Ok(favorited)
  });

  match outcome {
    Ok(favorited) => Json(ToggleResponse { favorited }).into_response(),
    Err(message) => error(StatusCode::NOT_FOUND, message),
  }
}
