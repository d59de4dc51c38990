//! Storefront runtime configuration compiled in from `storefront.toml`.

use std::sync::OnceLock;

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::DiagnosticLevel;
use crate::model::{
    FontFamily, DEFAULT_FONT_SIZE, DEFAULT_PLAYBACK_POSITION, FONT_SIZE_MAX, FONT_SIZE_MIN,
};
use crate::shelf::DEFAULT_LOOP_THRESHOLD;

include!(concat!(env!("OUT_DIR"), "/storefront_config_generated.rs"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while decoding storefront configuration.
pub enum ConfigError {
    /// The payload is not valid configuration JSON.
    #[error("storefront config does not parse: {0}")]
    Parse(String),
    /// A value is outside its allowed range.
    #[error("storefront config value `{key}` is out of range: {value}")]
    OutOfRange {
        /// Dotted key path.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// What the work detail page does with an id the catalog does not know.
pub enum UnknownWorkPolicy {
    /// Render the catalog's fallback record.
    #[default]
    Fallback,
    /// Render the not-found screen.
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// `[diagnostics]` table.
pub struct DiagnosticsConfig {
    /// Minimum level that reaches the console.
    pub level: DiagnosticLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// `[catalog]` table.
pub struct CatalogConfig {
    /// Handling for unknown work ids.
    pub unknown_work: UnknownWorkPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// `[reader]` table. Values seed [`crate::model::ReaderSettings`] on every mount.
pub struct ReaderConfig {
    /// Initial font size in pixels.
    pub default_font_size: u16,
    /// Initial font family.
    pub default_font_family: FontFamily,
    /// Initial playback position in percent.
    pub default_playback_position: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            default_font_size: DEFAULT_FONT_SIZE,
            default_font_family: FontFamily::Serif,
            default_playback_position: DEFAULT_PLAYBACK_POSITION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// `[shelf]` table.
pub struct ShelfConfig {
    /// Shelves wrap around only when they hold more works than this.
    pub loop_threshold: usize,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            loop_threshold: DEFAULT_LOOP_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Complete storefront runtime configuration.
pub struct StorefrontConfig {
    /// Console diagnostics.
    pub diagnostics: DiagnosticsConfig,
    /// Catalog lookups.
    pub catalog: CatalogConfig,
    /// Reader session defaults.
    pub reader: ReaderConfig,
    /// Shelf navigation.
    pub shelf: ShelfConfig,
}

impl StorefrontConfig {
    /// Decodes and validates configuration JSON in the generated layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `raw` does not decode or a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every ranged value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let font_size = self.reader.default_font_size;
        if !(FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&font_size) {
            return Err(ConfigError::OutOfRange {
                key: "reader.default_font_size",
                value: font_size.to_string(),
            });
        }
        if self.reader.default_playback_position > 100 {
            return Err(ConfigError::OutOfRange {
                key: "reader.default_playback_position",
                value: self.reader.default_playback_position.to_string(),
            });
        }
        if self.shelf.loop_threshold == 0 {
            return Err(ConfigError::OutOfRange {
                key: "shelf.loop_threshold",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Configuration compiled in from `storefront.toml`, parsed once.
    ///
    /// A payload that fails to decode is reported and replaced by defaults.
    pub fn builtin() -> &'static Self {
        static CONFIG: OnceLock<StorefrontConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            Self::from_json(STOREFRONT_CONFIG_JSON).unwrap_or_else(|err| {
                logging::warn!("[bibliotheca:config] using defaults: {err}");
                Self::default()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_config_matches_shipped_defaults() {
        let config = StorefrontConfig::builtin();

        assert_eq!(config.catalog.unknown_work, UnknownWorkPolicy::Fallback);
        assert_eq!(config.reader.default_font_size, 18);
        assert_eq!(config.reader.default_font_family, FontFamily::Serif);
        assert_eq!(config.reader.default_playback_position, 30);
        assert_eq!(config.shelf.loop_threshold, 5);
    }

    #[test]
    fn missing_tables_fall_back_to_defaults() {
        let config = StorefrontConfig::from_json(r#"{"catalog":{"unknown_work":"not-found"}}"#)
            .expect("parse");

        assert_eq!(config.catalog.unknown_work, UnknownWorkPolicy::NotFound);
        assert_eq!(config.reader, ReaderConfig::default());
        assert_eq!(config.diagnostics.level, DiagnosticLevel::Info);
    }

    #[test]
    fn out_of_range_font_size_is_rejected() {
        let err = StorefrontConfig::from_json(r#"{"reader":{"default_font_size":40}}"#)
            .expect_err("font size above ceiling");

        assert_eq!(
            err,
            ConfigError::OutOfRange {
                key: "reader.default_font_size",
                value: "40".to_string(),
            }
        );
    }

    #[test]
    fn unknown_policy_token_is_a_parse_error() {
        let err = StorefrontConfig::from_json(r#"{"catalog":{"unknown_work":"redirect"}}"#)
            .expect_err("unknown policy");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
