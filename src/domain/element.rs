use serde::{Deserialize, Serialize};

use super::Language;

/// Periodic table category of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
  AlkaliMetal,
  AlkalineEarthMetal,
  TransitionMetal,
  PostTransitionMetal,
  Metalloid,
  Nonmetal,
  Halogen,
  NobleGas,
  Lanthanide,
  Actinide,
}

impl ElementCategory {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "alkali_metal" => Some(Self::AlkaliMetal),
      "alkaline_earth_metal" => Some(Self::AlkalineEarthMetal),
      "transition_metal" => Some(Self::TransitionMetal),
      "post_transition_metal" => Some(Self::PostTransitionMetal),
      "metalloid" => Some(Self::Metalloid),
      "nonmetal" => Some(Self::Nonmetal),
      "halogen" => Some(Self::Halogen),
      "noble_gas" => Some(Self::NobleGas),
      "lanthanide" => Some(Self::Lanthanide),
      "actinide" => Some(Self::Actinide),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::AlkaliMetal => "alkali_metal",
      Self::AlkalineEarthMetal => "alkaline_earth_metal",
      Self::TransitionMetal => "transition_metal",
      Self::PostTransitionMetal => "post_transition_metal",
      Self::Metalloid => "metalloid",
      Self::Nonmetal => "nonmetal",
      Self::Halogen => "halogen",
      Self::NobleGas => "noble_gas",
      Self::Lanthanide => "lanthanide",
      Self::Actinide => "actinide",
    }
  }

  /// Display name in the given app language
  pub fn name(&self, language: Language) -> &'static str {
    match language {
      Language::En => match self {
        Self::AlkaliMetal => "Alkali metal",
        Self::AlkalineEarthMetal => "Alkaline earth metal",
        Self::TransitionMetal => "Transition metal",
        Self::PostTransitionMetal => "Post-transition metal",
        Self::Metalloid => "Metalloid",
        Self::Nonmetal => "Nonmetal",
        Self::Halogen => "Halogen",
        Self::NobleGas => "Noble gas",
        Self::Lanthanide => "Lanthanide",
        Self::Actinide => "Actinide",
      },
      Language::Tr => match self {
        Self::AlkaliMetal => "Alkali metal",
        Self::AlkalineEarthMetal => "Toprak alkali metal",
        Self::TransitionMetal => "Geçiş metali",
        Self::PostTransitionMetal => "Zayıf metal",
        Self::Metalloid => "Yarı metal",
        Self::Nonmetal => "Ametal",
        Self::Halogen => "Halojen",
        Self::NobleGas => "Soy gaz",
        Self::Lanthanide => "Lantanit",
        Self::Actinide => "Aktinit",
      },
    }
  }
}

/// A periodic table element. Static reference data shipped with the app,
/// never persisted or mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Element {
  /// Atomic number, the unique key
  pub number: u32,
  pub symbol: &'static str,
  pub name_en: &'static str,
  pub name_tr: &'static str,
  pub category: ElementCategory,
  pub atomic_weight: f64,
}

impl Element {
  /// Localized element name
  pub fn name(&self, language: Language) -> &'static str {
    match language {
      Language::En => self.name_en,
      Language::Tr => self.name_tr,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_category_roundtrip() {
    let categories = [
      ElementCategory::AlkaliMetal,
      ElementCategory::AlkalineEarthMetal,
      ElementCategory::TransitionMetal,
      ElementCategory::PostTransitionMetal,
      ElementCategory::Metalloid,
      ElementCategory::Nonmetal,
      ElementCategory::Halogen,
      ElementCategory::NobleGas,
      ElementCategory::Lanthanide,
      ElementCategory::Actinide,
    ];

    for cat in categories {
      assert_eq!(ElementCategory::from_str(cat.as_str()), Some(cat));
    }
  }

  #[test]
  fn test_category_from_str_invalid() {
    assert_eq!(ElementCategory::from_str("plasma"), None);
    assert_eq!(ElementCategory::from_str(""), None);
  }

  #[test]
  fn test_localized_names() {
    assert_eq!(ElementCategory::NobleGas.name(Language::En), "Noble gas");
    assert_eq!(ElementCategory::NobleGas.name(Language::Tr), "Soy gaz");
  }
}
