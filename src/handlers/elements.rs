//! Periodic table explorer endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::content;
use crate::domain::{Element, UserSettings};
use crate::state::AppState;

use super::error;

/// Element payload with names resolved for the active language
#[derive(Serialize)]
pub struct ElementView {
  pub number: u32,
  pub symbol: &'static str,
  pub name: &'static str,
  pub name_en: &'static str,
  pub name_tr: &'static str,
  pub category: &'static str,
  pub category_name: &'static str,
  pub atomic_weight: f64,
  pub favorite: bool,
}

impl ElementView {
  pub fn build(element: &Element, settings: &UserSettings, favorites: &[u32]) -> Self {
    let language = settings.language;
    Self {
      number: element.number,
      symbol: element.symbol,
      name: element.name(language),
      name_en: element.name_en,
      name_tr: element.name_tr,
      category: element.category.as_str(),
      category_name: element.category.name(language),
      atomic_weight: element.atomic_weight,
      favorite: favorites.contains(&element.number),
    }
  }
}

pub async fn list_elements(State(state): State<AppState>) -> Json<Vec<ElementView>> {
  let views = state.store.read(|data| {
    content::catalogue()
      .iter()
      .map(|e| ElementView::build(e, &data.settings, &data.favorites.elements))
      .collect()
  });
  Json(views)
}

pub async fn get_element(State(state): State<AppState>, Path(number): Path<u32>) -> Response {
  match content::by_number(number) {
    Some(element) => {
      let view = state
        .store
        .read(|data| ElementView::build(element, &data.settings, &data.favorites.elements));
      Json(view).into_response()
    }
    None => error(StatusCode::NOT_FOUND, "Unknown element"),
  }
}
