// Viewer settings, read once from localStorage at startup.
use serde::Deserialize;

use crate::model::ScaleBounds;
use crate::state::affordance::DEFAULT_EXIT_CONTROL_MS;
use crate::util::cwarn;

pub const CONFIG_STORAGE_KEY: &str = "iv_viewer_config";
pub const DEFAULT_INITIAL_IMAGE: &str = "images/sample1.jpg";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub exit_control_ms: u32,
    pub initial_image: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let bounds = ScaleBounds::default();
        Self {
            min_scale: bounds.min(),
            max_scale: bounds.max(),
            exit_control_ms: DEFAULT_EXIT_CONTROL_MS,
            initial_image: DEFAULT_INITIAL_IMAGE.to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(raw).map(Self::validated)
    }

    /// Repairs bounds that would make the identity transform unreachable.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        let bounds = self.scale_bounds();
        self.min_scale = bounds.min();
        self.max_scale = bounds.max();
        if self.exit_control_ms == 0 {
            self.exit_control_ms = defaults.exit_control_ms;
        }
        if self.initial_image.trim().is_empty() {
            self.initial_image = defaults.initial_image;
        }
        self
    }

    pub fn scale_bounds(&self) -> ScaleBounds {
        ScaleBounds::new(self.min_scale, self.max_scale)
    }

    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(CONFIG_STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|err| {
                cwarn(&format!("ignoring {}: {}", CONFIG_STORAGE_KEY, err));
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg = ViewerConfig::from_json(r#"{"max_scale": 3.0}"#).unwrap();
        assert_eq!(cfg.min_scale, 0.5);
        assert_eq!(cfg.max_scale, 3.0);
        assert_eq!(cfg.exit_control_ms, 2000);
        assert_eq!(cfg.initial_image, DEFAULT_INITIAL_IMAGE);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ViewerConfig::from_json("{max_scale:").is_err());
        assert!(ViewerConfig::from_json(r#"{"max_scale": "big"}"#).is_err());
    }

    #[test]
    fn swapped_and_invalid_bounds_are_repaired() {
        let cfg = ViewerConfig::from_json(r#"{"min_scale": 3.0, "max_scale": 0.25}"#).unwrap();
        let bounds = cfg.scale_bounds();
        assert_eq!((bounds.min(), bounds.max()), (0.25, 3.0));

        let cfg = ViewerConfig::from_json(r#"{"min_scale": -1, "max_scale": 0, "exit_control_ms": 0}"#)
            .unwrap();
        assert_eq!(cfg.scale_bounds(), ScaleBounds::default());
        assert_eq!(cfg.exit_control_ms, 2000);
    }

    #[test]
    fn identity_scale_always_in_bounds() {
        let cfg = ViewerConfig::from_json(r#"{"min_scale": 1.5, "max_scale": 2.0, "initial_image": " "}"#)
            .unwrap();
        assert_eq!((cfg.min_scale, cfg.max_scale), (1.0, 2.0));
        assert_eq!(cfg.initial_image, DEFAULT_INITIAL_IMAGE);
    }
}
