//! Daily study session endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::SessionState;
use crate::state::AppState;
use crate::{achievements, content, session};

use super::elements::ElementView;
use super::{error, today};

#[derive(Serialize)]
pub struct SessionView {
  pub date: NaiveDate,
  pub target: u32,
  pub completed_count: u32,
  pub state: SessionState,
  pub shown_elements: Vec<u32>,
}

pub(crate) fn session_view(daily: &crate::domain::DailyProgress) -> SessionView {
  SessionView {
    date: daily.date,
    target: daily.target,
    completed_count: daily.completed_count(),
    state: daily.state(),
    shown_elements: daily.shown_elements.iter().copied().collect(),
  }
}

/// Today's session, rolled over if the stored one is stale
pub async fn session_status(State(state): State<AppState>) -> Json<SessionView> {
  let today = today();
  let view = state
    .store
    .update(|data| session_view(session::current(data, today)));
  Json(view)
}

#[derive(Serialize)]
pub struct NextElementResponse {
  pub element: Option<ElementView>,
  /// Every catalogue element was shown today
  pub pool_exhausted: bool,
  pub target_met: bool,
}

/// A random element not yet shown today. Both completion signals are
/// reported separately: the numeric target and pool exhaustion.
pub async fn next_element(State(state): State<AppState>) -> Json<NextElementResponse> {
  let today = today();
  let response = state.store.update(|data| {
    let daily = session::current(data, today).clone();
    let element = session::random_unshown(&daily, content::catalogue())
      .map(|e| ElementView::build(e, &data.settings, &data.favorites.elements));
    NextElementResponse {
      pool_exhausted: element.is_none(),
      target_met: daily.state() == SessionState::Complete,
      element,
    }
  });
  Json(response)
}

#[derive(Deserialize)]
pub struct MarkShownForm {
  pub element: u32,
}

#[derive(Serialize)]
pub struct MarkShownResponse {
  pub newly_shown: bool,
  pub session: SessionView,
  pub newly_unlocked: Vec<String>,
}

/// Record an element as shown. Idempotent; persisted on every call,
/// with the disk write debounced to coalesce rapid taps.
pub async fn mark_shown(
  State(state): State<AppState>,
  Json(form): Json<MarkShownForm>,
) -> Response {
  if content::by_number(form.element).is_none() {
    return error(StatusCode::BAD_REQUEST, "Unknown element");
  }

  let today = today();
  let response = state.store.update_debounced(|data| {
    let newly_shown = session::mark_element_shown(data, today, form.element);
    let newly = achievements::evaluate(data, Utc::now());
    MarkShownResponse {
      newly_shown,
      session: session_view(data.progress.as_ref().expect("session was just rolled over")),
      newly_unlocked: newly.iter().map(|d| d.id.to_string()).collect(),
    }
  });

  for id in &response.newly_unlocked {
    tracing::info!("Achievement unlocked: {}", id);
  }
  Json(response).into_response()
}
