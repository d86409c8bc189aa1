//! Application configuration constants.
//!
//! Server-side knobs live here; everything user-facing is part of
//! `UserSettings` in the persisted blob.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Storage Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    storage: Option<StorageConfig>,
}

#[derive(Debug, Deserialize)]
struct StorageConfig {
    path: Option<String>,
}

/// Load the blob path with priority: config.toml > .env > default
pub fn load_store_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(storage) = config.storage {
                if let Some(path) = storage.path {
                    tracing::info!("Using store path from config.toml: {}", path);
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 2: .env STORE_PATH
    if let Ok(path) = std::env::var("STORE_PATH") {
        tracing::info!("Using store path from STORE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    // Default
    let default = PathBuf::from("data/chem_notebook.json");
    tracing::info!("Using default store path: {}", default.display());
    default
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

// ==================== Study Configuration ====================

/// Default daily flashcard target (distinct elements per day)
pub const DEFAULT_DAILY_TARGET: u32 = 5;

/// Number of distractor choices in a multiple choice question
pub const DISTRACTOR_COUNT: usize = 3;

/// Default number of questions in a generated quiz
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Hard cap on questions per quiz
pub const MAX_QUESTION_COUNT: usize = 50;

// ==================== Persistence Configuration ====================

/// Delay before a debounced store write hits disk. Coalesces rapid
/// successive study-progress updates; provides no atomicity guarantee.
pub const SAVE_DEBOUNCE_MS: u64 = 200;
