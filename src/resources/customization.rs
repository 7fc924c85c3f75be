//! Cat customization record.
//!
//! Selected in the menu before a session starts and consumed read-only by
//! the render collaborator for appearance. The simulation never mutates it;
//! it lives in the world so the renderer and demo runner can reach it.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Coat patterns offered by the customization menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CoatPattern {
    #[default]
    Solid,
    Tabby,
    Spotted,
    Tuxedo,
}

/// Breeds offered by the customization menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CatBreed {
    #[default]
    Shorthair,
    Siamese,
    Persian,
    MaineCoon,
}

/// Appearance selection for the player's cat.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatCustomization {
    /// Coat color as a CSS-style hex string.
    pub color: String,
    pub pattern: CoatPattern,
    pub breed: CatBreed,
}

impl Default for CatCustomization {
    fn default() -> Self {
        Self {
            color: "#d97706".to_string(),
            pattern: CoatPattern::Solid,
            breed: CatBreed::Shorthair,
        }
    }
}

impl CatCustomization {
    /// Load a customization record from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read customization file: {e}"))?;
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse customization: {e}"))
    }
}
