//! Player preferences
//!
//! Persisted separately from the qualification cookie, in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    Medium,
    #[default]
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Next preset in Low → Medium → High → Low order
    pub fn next(&self) -> Self {
        match self {
            QualityPreset::Low => QualityPreset::Medium,
            QualityPreset::Medium => QualityPreset::High,
            QualityPreset::High => QualityPreset::Low,
        }
    }

    /// Starfield size for this preset
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 300,
            QualityPreset::Medium => 1000,
            QualityPreset::High => 2000,
        }
    }

    /// Whether stars get a glow halo
    pub fn star_glow(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Reduced motion (no twinkling, no background pulse)
    pub reduced_motion: bool,
}

impl Settings {
    /// Cap the starfield in `tuning` to what the preset allows
    pub fn apply_to(&self, tuning: &mut Tuning) {
        tuning.star_count = tuning.star_count.min(self.quality.star_count());
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "planet_dodger_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_cycle() {
        let mut preset = QualityPreset::Low;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(preset.as_str());
            preset = preset.next();
        }
        assert_eq!(seen, ["Low", "Medium", "High"]);
        assert_eq!(preset, QualityPreset::Low);
        assert!(!QualityPreset::Low.star_glow());
    }

    fn with_quality(quality: QualityPreset) -> Settings {
        Settings {
            quality,
            ..Default::default()
        }
    }

    #[test]
    fn test_preset_caps_starfield() {
        let mut tuning = Tuning::default();
        with_quality(QualityPreset::Low).apply_to(&mut tuning);
        assert_eq!(tuning.star_count, 300);

        // Never raises a smaller configured count
        let mut tuning = Tuning {
            star_count: 50,
            ..Default::default()
        };
        with_quality(QualityPreset::High).apply_to(&mut tuning);
        assert_eq!(tuning.star_count, 50);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "reduced_motion": true }"#)
            .expect("valid settings json");
        assert!(settings.reduced_motion);
        assert_eq!(settings.quality, QualityPreset::High);
    }
}
