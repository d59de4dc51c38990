//! Reader session state.

use catalog_host::{Character, Voice, VoiceAssignment};
use serde::{Deserialize, Serialize};

use crate::config::ReaderConfig;
use crate::voice_session::VoiceAssignmentSession;

/// Smallest reader font size in pixels.
pub const FONT_SIZE_MIN: u16 = 12;
/// Largest reader font size in pixels.
pub const FONT_SIZE_MAX: u16 = 32;
/// Font size used when configuration supplies none.
pub const DEFAULT_FONT_SIZE: u16 = 18;
/// Playback position used when configuration supplies none.
pub const DEFAULT_PLAYBACK_POSITION: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Typeface family for the reading surface.
pub enum FontFamily {
    /// Heading serif.
    #[default]
    Serif,
    /// Body sans-serif.
    Sans,
}

impl FontFamily {
    /// Stable DOM token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::Sans => "sans",
        }
    }

    /// Toggle label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Serif => "Serif",
            Self::Sans => "Sans",
        }
    }

    /// Accessible name for the toggle.
    pub const fn aria_label(self) -> &'static str {
        match self {
            Self::Serif => "Serif Font",
            Self::Sans => "Sans-serif Font",
        }
    }

    /// CSS `font-family` stack.
    pub const fn css_stack(self) -> &'static str {
        match self {
            Self::Serif => "var(--font-heading, Georgia, serif)",
            Self::Sans => "var(--font-body, system-ui, sans-serif)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Typography and playback settings. Session-local; rebuilt on every reader mount.
pub struct ReaderSettings {
    /// Font size in pixels, always within [`FONT_SIZE_MIN`]..=[`FONT_SIZE_MAX`].
    pub font_size: u16,
    pub font_family: FontFamily,
    /// Playback position in percent, 0..=100.
    pub playback_position: u8,
    /// Play/pause flag. No audio is produced.
    pub playing: bool,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self::from_config(&ReaderConfig::default())
    }
}

impl ReaderSettings {
    /// Settings seeded from the `[reader]` configuration table.
    pub fn from_config(config: &ReaderConfig) -> Self {
        Self {
            font_size: config
                .default_font_size
                .clamp(FONT_SIZE_MIN, FONT_SIZE_MAX),
            font_family: config.default_font_family,
            playback_position: config.default_playback_position.min(100),
            playing: false,
        }
    }

    pub fn can_decrease_font(&self) -> bool {
        self.font_size > FONT_SIZE_MIN
    }

    pub fn can_increase_font(&self) -> bool {
        self.font_size < FONT_SIZE_MAX
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Everything the reading surface reduces over.
pub struct ReaderState {
    pub settings: ReaderSettings,
    /// Committed character-to-voice mapping for this session.
    pub assignments: VoiceAssignment,
    /// Open voice editor, if any.
    pub voice_editor: Option<VoiceAssignmentSession>,
    /// Whether the typography popover is open.
    pub typography_open: bool,
    /// Characters eligible for voice assignment.
    pub roster: Vec<Character>,
    /// Voice catalog offered by the editor.
    pub voices: Vec<Voice>,
}

impl ReaderState {
    /// Fresh session state for one mount.
    pub fn new(
        settings: ReaderSettings,
        roster: Vec<Character>,
        voices: Vec<Voice>,
        assignments: VoiceAssignment,
    ) -> Self {
        Self {
            settings,
            assignments,
            voice_editor: None,
            typography_open: false,
            roster,
            voices,
        }
    }

    /// Whether the voice editor overlay is showing.
    pub fn voice_editor_open(&self) -> bool {
        self.voice_editor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn settings_clamp_configured_defaults() {
        let settings = ReaderSettings::from_config(&ReaderConfig {
            default_font_size: 64,
            default_font_family: FontFamily::Sans,
            default_playback_position: 200,
        });

        assert_eq!(settings.font_size, FONT_SIZE_MAX);
        assert_eq!(settings.playback_position, 100);
        assert!(!settings.can_increase_font());
        assert!(settings.can_decrease_font());
        assert!(!settings.playing);
    }

    #[test]
    fn default_settings_start_paused_at_thirty_percent() {
        let settings = ReaderSettings::default();
        assert_eq!(settings.font_size, 18);
        assert_eq!(settings.font_family, FontFamily::Serif);
        assert_eq!(settings.playback_position, 30);
    }
}
