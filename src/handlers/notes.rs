//! Note-taking endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::domain::Note;
use crate::state::AppState;
use crate::{achievements, content};

use super::error;

pub async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
  Json(state.store.read(|data| data.notes.clone()))
}

#[derive(Deserialize)]
pub struct NoteForm {
  pub title: String,
  pub content: String,
  #[serde(default)]
  pub element: Option<u32>,
  #[serde(default)]
  pub tags: Vec<String>,
}

/// Shared guard for create and update. Returns the cleaned fields or a
/// rejection message.
fn validate_note(form: &NoteForm) -> Result<(String, String, Vec<String>), &'static str> {
  let title = form.title.trim().to_string();
  let body = form.content.trim().to_string();
  if title.is_empty() || body.is_empty() {
    return Err("Title and content are required");
  }
  if let Some(number) = form.element {
    if content::by_number(number).is_none() {
      return Err("Unknown element");
    }
  }
  let tags: Vec<String> = form
    .tags
    .iter()
    .map(|t| t.trim().to_string())
    .filter(|t| !t.is_empty())
    .collect();
  Ok((title, body, tags))
}

pub async fn create_note(State(state): State<AppState>, Json(form): Json<NoteForm>) -> Response {
  let (title, body, tags) = match validate_note(&form) {
    Ok(fields) => fields,
    Err(message) => return error(StatusCode::BAD_REQUEST, message),
  };

  let note = state.store.update(|data| {
    let note = Note::new(data.next_note_id(), title, body, form.element, tags);
    data.notes.push(note.clone());
    let newly = achievements::evaluate(data, Utc::now());
    for def in newly {
      tracing::info!("Achievement unlocked: {}", def.id);
    }
    note
  });

  (StatusCode::CREATED, Json(note)).into_response()
}

pub async fn update_note(
  State(state): State<AppState>,
  Path(id): Path<i64>,
  Json(form): Json<NoteForm>,
) -> Response {
  let (title, body, tags) = match validate_note(&form) {
    Ok(fields) => fields,
    Err(message) => return error(StatusCode::BAD_REQUEST, message),
  };

  let updated = state.store.update(|data| {
    data.notes.iter_mut().find(|n| n.id == id).map(|note| {
      note.update(title, body, form.element, tags);
      note.clone()
    })
  });

  match updated {
    Some(note) => Json(note).into_response(),
    None => error(StatusCode::NOT_FOUND, "Note not found"),
  }
}

pub async fn delete_note(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
  let removed = state.store.update(|data| {
    let before = data.notes.len();
    data.notes.retain(|n| n.id != id);
    data.favorites.notes.retain(|f| *f != id);
    data.notes.len() < before
  });

  if removed {
    StatusCode::NO_CONTENT.into_response()
  } else {
    error(StatusCode::NOT_FOUND, "Note not found")
  }
}
