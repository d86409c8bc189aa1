//! Blob export and import endpoints.

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::state::AppState;
use crate::store::import;
use crate::store::StoreError;

use super::error;

/// Download the whole blob as a JSON attachment
pub async fn export_data(State(state): State<AppState>) -> Response {
  let bytes = match import::export_data(&state.store) {
    Ok(bytes) => bytes,
    Err(e) => {
      tracing::error!("Failed to export data: {}", e);
      return error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to export data");
    }
  };

  let date = Utc::now().format("%Y%m%d");
  let filename = format!("chem_notebook_{}.json", date);

  (
    [
      (header::CONTENT_TYPE, "application/json".to_string()),
      (
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", filename),
      ),
    ],
    bytes,
  )
    .into_response()
}

/// Replace the blob with an uploaded document. Validation happens
/// before anything is touched and the prior blob is backed up, so a
/// rejected upload leaves state exactly as it was.
pub async fn import_data(State(state): State<AppState>, mut multipart: Multipart) -> Response {
  let bytes = match extract_uploaded_file(&mut multipart).await {
    Ok(bytes) => bytes,
    Err(message) => {
      tracing::warn!("Import failed: {}", message);
      return error(StatusCode::BAD_REQUEST, &message);
    }
  };

  match import::import_data(&state.store, &bytes) {
    Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
    Err(StoreError::InvalidImport(message)) => {
      tracing::warn!("Import validation failed: {}", message);
      error(StatusCode::BAD_REQUEST, &message)
    }
    Err(e) => {
      tracing::error!("Import failed: {}", e);
      error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to import data")
    }
  }
}

/// Extract file bytes from the multipart upload
async fn extract_uploaded_file(multipart: &mut Multipart) -> Result<Vec<u8>, String> {
  while let Ok(Some(field)) = multipart.next_field().await {
    let name = field.name().unwrap_or_default().to_string();
    if name == "data" {
      return field
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| format!("Failed to read upload: {}", e));
    }
  }
  Err("No data file uploaded".to_string())
}
