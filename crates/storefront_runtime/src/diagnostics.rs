//! Leveled console diagnostics.
//!
//! Records are rendered as `[bibliotheca:{scope}] {message} key=value ...` and emitted through
//! `leptos::logging`, which writes to the browser console on wasm and to stdout/stderr elsewhere.

use std::fmt::Write as _;

use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::config::StorefrontConfig;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Severity threshold. Records below the configured level are dropped.
pub enum DiagnosticLevel {
    /// Mount and data-load chatter.
    Debug,
    /// User-visible actions such as reported intents.
    #[default]
    Info,
    /// Recoverable problems, for example rejected reducer actions.
    Warn,
    /// Failures that leave a screen without data.
    Error,
    /// Nothing is emitted.
    Off,
}

impl DiagnosticLevel {
    /// Stable lowercase token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Off => "off",
        }
    }
}

/// Renders one record without emitting it.
pub fn format_record(scope: &str, message: &str, fields: &[(&str, &str)]) -> String {
    let mut line = format!("[bibliotheca:{scope}] {message}");
    for (key, value) in fields {
        let _ = write!(line, " {key}={value}");
    }
    line
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Diagnostics handle shared through the runtime context.
pub struct Diagnostics {
    threshold: DiagnosticLevel,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(DiagnosticLevel::default())
    }
}

impl Diagnostics {
    /// Handle emitting records at `threshold` and above.
    pub const fn new(threshold: DiagnosticLevel) -> Self {
        Self { threshold }
    }

    /// Handle using the configured threshold.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.diagnostics.level)
    }

    /// Configured threshold.
    pub fn threshold(self) -> DiagnosticLevel {
        self.threshold
    }

    /// Whether a record at `level` would be emitted.
    pub fn enabled(self, level: DiagnosticLevel) -> bool {
        level != DiagnosticLevel::Off
            && self.threshold != DiagnosticLevel::Off
            && level >= self.threshold
    }

    /// Emits a debug record.
    pub fn debug(self, scope: &str, message: &str, fields: &[(&str, &str)]) {
        self.emit(DiagnosticLevel::Debug, scope, message, fields);
    }

    /// Emits an info record.
    pub fn info(self, scope: &str, message: &str, fields: &[(&str, &str)]) {
        self.emit(DiagnosticLevel::Info, scope, message, fields);
    }

    /// Emits a warning.
    pub fn warn(self, scope: &str, message: &str, fields: &[(&str, &str)]) {
        self.emit(DiagnosticLevel::Warn, scope, message, fields);
    }

    /// Emits an error.
    pub fn error(self, scope: &str, message: &str, fields: &[(&str, &str)]) {
        self.emit(DiagnosticLevel::Error, scope, message, fields);
    }

    fn emit(self, level: DiagnosticLevel, scope: &str, message: &str, fields: &[(&str, &str)]) {
        if !self.enabled(level) {
            return;
        }
        let line = format_record(scope, message, fields);
        match level {
            DiagnosticLevel::Debug | DiagnosticLevel::Info => logging::log!("{line}"),
            DiagnosticLevel::Warn => logging::warn!("{line}"),
            DiagnosticLevel::Error => logging::error!("{line}"),
            DiagnosticLevel::Off => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn records_render_scope_message_and_fields() {
        assert_eq!(
            format_record("reader", "mounted", &[("work", "2"), ("font", "18")]),
            "[bibliotheca:reader] mounted work=2 font=18"
        );
        assert_eq!(format_record("home", "mounted", &[]), "[bibliotheca:home] mounted");
    }

    #[test]
    fn threshold_filters_lower_levels() {
        let diagnostics = Diagnostics::new(DiagnosticLevel::Warn);

        assert!(!diagnostics.enabled(DiagnosticLevel::Debug));
        assert!(!diagnostics.enabled(DiagnosticLevel::Info));
        assert!(diagnostics.enabled(DiagnosticLevel::Warn));
        assert!(diagnostics.enabled(DiagnosticLevel::Error));
    }

    #[test]
    fn off_silences_everything() {
        let diagnostics = Diagnostics::new(DiagnosticLevel::Off);
        assert!(!diagnostics.enabled(DiagnosticLevel::Error));
        assert!(!Diagnostics::new(DiagnosticLevel::Debug).enabled(DiagnosticLevel::Off));
    }

    #[test]
    fn level_tokens_round_trip_through_serde() {
        let level: DiagnosticLevel = serde_json::from_str("\"debug\"").expect("parse");
        assert_eq!(level, DiagnosticLevel::Debug);
        assert_eq!(level.token(), "debug");
    }
}
