use serde::{Deserialize, Serialize};

use crate::config;

/// App display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  Tr,
  #[default]
  En,
}

impl Language {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Tr => "tr",
      Self::En => "en",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "tr" => Some(Self::Tr),
      "en" => Some(Self::En),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
  Small,
  #[default]
  Medium,
  Large,
}

/// Per-event sound toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundEffects {
  pub enabled: bool,
  pub correct_answer: bool,
  pub wrong_answer: bool,
  pub achievement: bool,
}

impl Default for SoundEffects {
  fn default() -> Self {
    Self {
      enabled: true,
      correct_answer: true,
      wrong_answer: true,
      achievement: true,
    }
  }
}

/// User-facing application settings, all stored in the blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
  pub language: Language,
  pub theme: Theme,
  pub font_size: FontSize,
  pub daily_flashcard_target: u32,
  pub notifications_enabled: bool,
  pub sound_effects: SoundEffects,
}

impl Default for UserSettings {
  fn default() -> Self {
    Self {
      language: Language::default(),
      theme: Theme::default(),
      font_size: FontSize::default(),
      daily_flashcard_target: config::DEFAULT_DAILY_TARGET,
      notifications_enabled: true,
      sound_effects: SoundEffects::default(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_language_roundtrip() {
    assert_eq!(Language::from_str("tr"), Some(Language::Tr));
    assert_eq!(Language::from_str("en"), Some(Language::En));
    assert_eq!(Language::from_str("de"), None);
    assert_eq!(Language::Tr.as_str(), "tr");
  }

  #[test]
  fn test_settings_defaults() {
    let settings = UserSettings::default();
    assert_eq!(settings.language, Language::En);
    assert_eq!(settings.theme, Theme::Light);
    assert_eq!(settings.daily_flashcard_target, config::DEFAULT_DAILY_TARGET);
    assert!(settings.notifications_enabled);
    assert!(settings.sound_effects.enabled);
  }

  #[test]
  fn test_settings_deserialize_partial_blob() {
    // Older blobs may miss fields entirely; defaults must backfill
    let settings: UserSettings = serde_json::from_str(r#"{"language":"tr"}"#).unwrap();
    assert_eq!(settings.language, Language::Tr);
    assert_eq!(settings.font_size, FontSize::Medium);
  }
}
