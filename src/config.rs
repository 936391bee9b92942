use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::FlexResult;

/// Render-time settings. Every field has a default, so an empty YAML file or a
/// partial one is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub carousel: CarouselConfig,
    /// Rule color for separators without an explicit `color`
    pub separator_color: String,
    pub page: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Width of each bubble relative to the strip
    pub item_width: String,
    pub gap: String,
    /// Space before the first and after the last bubble
    pub inset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub title: String,
    pub background: String,
    /// Emit the built-in stylesheet (layout margins, resets) before the utilities
    pub base_styles: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            separator_color: "#d4d6da".to_string(),
            page: PageConfig::default(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width: "80%".to_string(),
            gap: "9px".to_string(),
            inset: "7px".to_string(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Flex Message".to_string(),
            background: "#849ebf".to_string(),
            base_styles: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(yaml: &str) -> FlexResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> FlexResult<Self> {
        let path = path.as_ref();
        log::debug!("loading render config from {}", path.display());
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }
}
