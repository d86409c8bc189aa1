//! Achievement listing and the unlock notification queue.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::achievements::{self, ACHIEVEMENTS};
use crate::domain::Language;
use crate::state::AppState;

use super::error;

#[derive(Serialize)]
pub struct AchievementView {
  pub id: &'static str,
  pub name: &'static str,
  pub kind: &'static str,
  pub target: u64,
  pub current_value: u64,
  pub progress: u8,
  pub unlocked: bool,
  pub unlocked_at: Option<DateTime<Utc>>,
}

/// All achievements with fresh progress numbers. Evaluation is
/// idempotent, so recomputing here is safe and keeps the list current
/// without a separate refresh endpoint.
pub async fn list_achievements(State(state): State<AppState>) -> Json<Vec<AchievementView>> {
  let views = state.store.update(|data| {
    achievements::evaluate(data, Utc::now());
    let language = data.settings.language;
    ACHIEVEMENTS
      .iter()
      .map(|def| {
        let state = data
          .achievements
          .iter()
          .find(|s| s.id == def.id)
          .expect("evaluate backfills every definition");
        AchievementView {
          id: def.id,
          name: match language {
            Language::En => def.name_en,
            Language::Tr => def.name_tr,
          },
          kind: if def.kind.is_meta() { "meta" } else { "standard" },
          target: def.target,
          current_value: state.current_value,
          progress: state.progress,
          unlocked: state.unlocked,
          unlocked_at: state.unlocked_at,
        }
      })
      .collect()
  });
  Json(views)
}

#[derive(Serialize)]
pub struct NotificationView {
  pub id: String,
  pub name: &'static str,
  pub queued_at: DateTime<Utc>,
  pub pending: usize,
}

/// Oldest pending notification without consuming it
pub async fn peek_notification(State(state): State<AppState>) -> Response {
  let peeked = state.store.read(|data| {
    achievements::peek_notification(data).map(|n| (n.clone(), data.notifications.len()))
  });

  match peeked {
    Some((notification, pending)) => {
      let language = state.store.read(|data| data.settings.language);
      let name = notification_name(&notification.id, language);
      Json(NotificationView {
        id: notification.id,
        name,
        queued_at: notification.queued_at,
        pending,
      })
      .into_response()
    }
    None => error(StatusCode::NOT_FOUND, "No pending notifications"),
  }
}

/// Consume the oldest notification, moving it to the permanent unlock
/// record. The UI calls this once the toast has been displayed.
pub async fn drain_notification(State(state): State<AppState>) -> Response {
  let drained = state.store.update(achievements::drain_notification);

  match drained {
    Some(record) => Json(record).into_response(),
    None => error(StatusCode::NOT_FOUND, "No pending notifications"),
  }
}

fn notification_name(id: &str, language: Language) -> &'static str {
  achievements::find(id)
    .map(|def| match language {
      Language::En => def.name_en,
      Language::Tr => def.name_tr,
    })
    .unwrap_or("")
}
