//! Resource manifest and the load phase
//!
//! `resources.json` names the craft, meteor, and planet sprites, plus optional
//! tuning overrides. Loading is all-or-nothing: any failure aborts startup.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_PLANET_SIZE;
use crate::tuning::Tuning;

/// Default manifest location, relative to the page or working directory
pub const MANIFEST_PATH: &str = "resources.json";

/// Resource loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    /// Manifest file could not be read (native)
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Request never produced a response
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Response arrived with a non-2xx status
    #[error("Failed to load {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// Manifest is not valid JSON or is missing fields
    #[error("Invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// Manifest parsed but lists no planet sprites
    #[error("Manifest lists no planet images")]
    NoPlanets,

    /// A sprite failed to decode
    #[error("Failed to load image: {0}")]
    Image(String),
}

/// Parsed `resources.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceManifest {
    /// Craft sprite URL
    pub spaceship: String,
    /// Meteor sprite URL
    pub meteor: String,
    /// One URL per planet variant
    pub planets: Vec<String>,
    /// Gameplay overrides (absent fields keep their defaults)
    #[serde(default)]
    pub tuning: Option<Tuning>,
}

impl ResourceManifest {
    /// Parse and validate manifest JSON
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let manifest: ResourceManifest = serde_json::from_str(json)?;
        if manifest.planets.is_empty() {
            return Err(LoadError::NoPlanets);
        }
        Ok(manifest)
    }

    /// Read a manifest from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manifest = Self::from_json(&json)?;
        log::info!(
            "Loaded manifest {} ({} planet variants)",
            path.display(),
            manifest.planets.len()
        );
        Ok(manifest)
    }

    /// Tuning from the manifest, or defaults
    pub fn tuning(&self) -> Tuning {
        self.tuning.clone().unwrap_or_default()
    }

    /// Placeholder sprite sizes for hosts that never decode the images
    pub fn nominal_planet_sizes(&self) -> Vec<Vec2> {
        vec![Vec2::splat(DEFAULT_PLANET_SIZE); self.planets.len()]
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{LoadedAssets, load};

#[cfg(target_arch = "wasm32")]
mod web {
    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlImageElement, Response};

    use super::{LoadError, ResourceManifest};

    /// Everything the game needs before the loop may start
    pub struct LoadedAssets {
        pub manifest: ResourceManifest,
        pub craft: HtmlImageElement,
        pub meteor: HtmlImageElement,
        pub planets: Vec<HtmlImageElement>,
    }

    impl LoadedAssets {
        /// Natural size of each planet sprite, in variant order
        pub fn planet_sizes(&self) -> Vec<Vec2> {
            self.planets
                .iter()
                .map(|img| Vec2::new(img.natural_width() as f32, img.natural_height() as f32))
                .collect()
        }
    }

    /// Fetch the manifest, then decode every sprite it lists
    pub async fn load(url: &str) -> Result<LoadedAssets, LoadError> {
        let json = fetch_text(url).await?;
        let manifest = ResourceManifest::from_json(&json)?;

        let craft = load_image(&manifest.spaceship).await?;
        let meteor = load_image(&manifest.meteor).await?;
        let mut planets = Vec::with_capacity(manifest.planets.len());
        for src in &manifest.planets {
            planets.push(load_image(src).await?);
        }

        log::info!("Loaded {} planet sprites", planets.len());
        Ok(LoadedAssets {
            manifest,
            craft,
            meteor,
            planets,
        })
    }

    async fn fetch_text(url: &str) -> Result<String, LoadError> {
        let fetch_err = |reason: String| LoadError::Fetch {
            url: url.to_string(),
            reason,
        };

        let window = web_sys::window().ok_or_else(|| fetch_err("no window".into()))?;
        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| fetch_err(format!("{e:?}")))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| fetch_err("not a Response".into()))?;

        if !response.ok() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let body = response.text().map_err(|e| fetch_err(format!("{e:?}")))?;
        let text = JsFuture::from(body)
            .await
            .map_err(|e| fetch_err(format!("{e:?}")))?;
        text.as_string()
            .ok_or_else(|| fetch_err("body is not text".into()))
    }

    async fn load_image(src: &str) -> Result<HtmlImageElement, LoadError> {
        let image = HtmlImageElement::new().map_err(|_| LoadError::Image(src.to_string()))?;

        let decoded = js_sys::Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        });
        image.set_src(src);

        let result = JsFuture::from(decoded).await;
        image.set_onload(None);
        image.set_onerror(None);
        result.map_err(|_| LoadError::Image(src.to_string()))?;

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "spaceship": "img/ship.png",
        "meteor": "img/meteor.png",
        "planets": ["img/p1.png", "img/p2.png", "img/p3.png"]
    }"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = ResourceManifest::from_json(MANIFEST).expect("valid manifest");
        assert_eq!(manifest.spaceship, "img/ship.png");
        assert_eq!(manifest.planets.len(), 3);
        assert!(manifest.tuning.is_none());
        assert_eq!(manifest.tuning(), Tuning::default());
        assert_eq!(manifest.nominal_planet_sizes().len(), 3);
    }

    #[test]
    fn test_manifest_tuning_override() {
        let json = r#"{
            "spaceship": "a", "meteor": "b", "planets": ["c"],
            "tuning": { "planet_speed": 4.5 }
        }"#;
        let manifest = ResourceManifest::from_json(json).expect("valid manifest");
        let tuning = manifest.tuning();
        assert_eq!(tuning.planet_speed, 4.5);
        assert_eq!(tuning.meteor_count, Tuning::default().meteor_count);
    }

    #[test]
    fn test_empty_planet_list_rejected() {
        let json = r#"{ "spaceship": "a", "meteor": "b", "planets": [] }"#;
        assert!(matches!(
            ResourceManifest::from_json(json),
            Err(LoadError::NoPlanets)
        ));
    }

    #[test]
    fn test_malformed_manifest_rejected() {
        let err = ResourceManifest::from_json(r#"{ "spaceship": "a" }"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid manifest"));

        assert!(matches!(
            ResourceManifest::from_json("not json"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ResourceManifest::from_path("definitely/not/here/resources.json").unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert!(path.ends_with("resources.json")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
