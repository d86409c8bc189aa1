//! User settings.

use axum::extract::State;
use axum::Json;

use crate::domain::UserSettings;
use crate::state::AppState;

pub async fn get_settings(State(state): State<AppState>) -> Json<UserSettings> {
  Json(state.store.read(|data| data.settings.clone()))
}

/// Replace the settings wholesale. Missing fields fall back to their
/// defaults through serde, so partial clients stay compatible. A
/// changed daily target applies to the current session on its next
/// access without resetting progress.
pub async fn update_settings(
  State(state): State<AppState>,
  Json(mut settings): Json<UserSettings>,
) -> Json<UserSettings> {
  // Keep the daily target inside the catalogue's bounds
  settings.daily_flashcard_target = settings.daily_flashcard_target.clamp(1, 118);

  let saved = state.store.update(|data| {
    data.settings = settings;
    data.settings.clone()
  });
  Json(saved)
}
