//! Reducer actions, effects, and transition logic for the reading surface.

use catalog_host::{CharacterId, VoiceAssignment, VoiceId};
use thiserror::Error;

use crate::model::{FontFamily, ReaderState, FONT_SIZE_MAX, FONT_SIZE_MIN};
use crate::voice_session::{SessionEvent, VoiceAssignmentSession, VoiceSessionError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_reader`].
pub enum ReaderAction {
    /// Grow the font by one pixel, up to the ceiling.
    IncreaseFontSize,
    /// Shrink the font by one pixel, down to the floor.
    DecreaseFontSize,
    /// Select a font family. Selecting the current family is a no-op.
    SetFontFamily(FontFamily),
    /// Flip the play/pause flag.
    TogglePlayback,
    /// Move the playback slider. Values outside 0..=100 are clamped.
    SetPlaybackPosition(i32),
    /// Open or close the typography popover.
    ToggleTypographyPanel,
    /// Close the typography popover.
    CloseTypographyPanel,
    /// Open the voice assignment overlay over the committed mapping.
    OpenVoiceEditor,
    /// Change one character's draft voice.
    AssignVoice {
        /// Character to change.
        character: CharacterId,
        /// Newly selected voice.
        voice: VoiceId,
    },
    /// Commit the draft and close the overlay.
    SaveVoiceAssignment,
    /// Drop the draft and close the overlay.
    CancelVoiceAssignment,
    /// Replace the committed mapping from upstream, rebasing any open draft.
    ReplaceAssignments(VoiceAssignment),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Observable outcomes the surface may report or log.
pub enum ReaderEffect {
    /// A draft was committed; the mapping is kept for the rest of the session.
    VoiceAssignmentSaved(VoiceAssignment),
    /// A draft was dropped by cancel or rebase.
    VoiceDraftDiscarded {
        /// Characters whose edits were lost.
        changed: Vec<CharacterId>,
    },
    /// Playback flag flipped.
    PlaybackChanged {
        /// New flag value.
        playing: bool,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected reader actions. The state is left unchanged.
pub enum ReaderError {
    /// A voice editor action arrived while the overlay was closed.
    #[error("voice editor is not open")]
    VoiceEditorNotOpen,
    /// The voice session rejected the action.
    #[error(transparent)]
    Session(#[from] VoiceSessionError),
}

/// Applies `action` to `state`.
///
/// # Errors
///
/// Returns [`ReaderError`] for voice actions without an open editor and for ids outside the
/// session roster or voice catalog.
pub fn reduce_reader(
    state: &mut ReaderState,
    action: ReaderAction,
) -> Result<Vec<ReaderEffect>, ReaderError> {
    let mut effects = Vec::new();

    match action {
        ReaderAction::IncreaseFontSize => {
            state.settings.font_size = state
                .settings
                .font_size
                .saturating_add(1)
                .clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        }
        ReaderAction::DecreaseFontSize => {
            state.settings.font_size = state
                .settings
                .font_size
                .saturating_sub(1)
                .clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        }
        ReaderAction::SetFontFamily(family) => {
            state.settings.font_family = family;
        }
        ReaderAction::TogglePlayback => {
            state.settings.playing = !state.settings.playing;
            effects.push(ReaderEffect::PlaybackChanged {
                playing: state.settings.playing,
            });
        }
        ReaderAction::SetPlaybackPosition(position) => {
            state.settings.playback_position = position.clamp(0, 100) as u8;
        }
        ReaderAction::ToggleTypographyPanel => {
            state.typography_open = !state.typography_open;
        }
        ReaderAction::CloseTypographyPanel => {
            state.typography_open = false;
        }
        ReaderAction::OpenVoiceEditor => {
            state.typography_open = false;
            if state.voice_editor.is_none() {
                state.voice_editor = Some(VoiceAssignmentSession::open(
                    state.roster.clone(),
                    state.voices.clone(),
                    state.assignments.clone(),
                ));
            }
        }
        ReaderAction::AssignVoice { character, voice } => {
            let editor = state
                .voice_editor
                .as_mut()
                .ok_or(ReaderError::VoiceEditorNotOpen)?;
            editor.assign(&character, &voice)?;
        }
        ReaderAction::SaveVoiceAssignment => {
            let editor = state
                .voice_editor
                .as_ref()
                .ok_or(ReaderError::VoiceEditorNotOpen)?;
            // A rejected commit keeps the overlay open.
            let committed = editor.clone().commit()?;
            state.voice_editor = None;
            state.assignments = committed.clone();
            effects.push(ReaderEffect::VoiceAssignmentSaved(committed));
        }
        ReaderAction::CancelVoiceAssignment => {
            let editor = state
                .voice_editor
                .take()
                .ok_or(ReaderError::VoiceEditorNotOpen)?;
            let changed = editor.cancel();
            if !changed.is_empty() {
                effects.push(ReaderEffect::VoiceDraftDiscarded { changed });
            }
        }
        ReaderAction::ReplaceAssignments(assignments) => {
            if let Some(editor) = state.voice_editor.as_mut() {
                let event = editor.rebase(assignments.clone());
                if let SessionEvent::Invalidated { discarded } = event {
                    if !discarded.is_empty() {
                        effects.push(ReaderEffect::VoiceDraftDiscarded { changed: discarded });
                    }
                }
            }
            state.assignments = assignments;
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use catalog_host::{Character, Voice};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ReaderSettings;

    fn state() -> ReaderState {
        ReaderState::new(
            ReaderSettings::default(),
            vec![
                Character {
                    id: CharacterId::from("carton"),
                    name: "Sydney Carton".to_string(),
                },
                Character {
                    id: CharacterId::from("lucie"),
                    name: "Lucie Manette".to_string(),
                },
            ],
            vec![
                Voice {
                    id: VoiceId::from("deep"),
                    name: "Deep Baritone".to_string(),
                },
                Voice {
                    id: VoiceId::from("bright"),
                    name: "Bright Soprano".to_string(),
                },
            ],
            [(CharacterId::from("carton"), VoiceId::from("deep"))]
                .into_iter()
                .collect(),
        )
    }

    fn apply(state: &mut ReaderState, action: ReaderAction) -> Vec<ReaderEffect> {
        reduce_reader(state, action).expect("reduce")
    }

    #[test]
    fn font_size_sequences_stay_within_bounds() {
        let mut state = state();
        for _ in 0..40 {
            apply(&mut state, ReaderAction::IncreaseFontSize);
            assert!(state.settings.font_size <= FONT_SIZE_MAX);
        }
        assert_eq!(state.settings.font_size, 32);
        apply(&mut state, ReaderAction::IncreaseFontSize);
        assert_eq!(state.settings.font_size, 32);

        for _ in 0..40 {
            apply(&mut state, ReaderAction::DecreaseFontSize);
            assert!(state.settings.font_size >= FONT_SIZE_MIN);
        }
        assert_eq!(state.settings.font_size, 12);
        apply(&mut state, ReaderAction::DecreaseFontSize);
        assert_eq!(state.settings.font_size, 12);
    }

    #[test]
    fn font_steps_are_single_pixels() {
        let mut state = state();
        apply(&mut state, ReaderAction::IncreaseFontSize);
        assert_eq!(state.settings.font_size, 19);
        apply(&mut state, ReaderAction::DecreaseFontSize);
        apply(&mut state, ReaderAction::DecreaseFontSize);
        assert_eq!(state.settings.font_size, 17);
    }

    #[test]
    fn font_family_selection_is_idempotent() {
        let mut state = state();
        apply(&mut state, ReaderAction::SetFontFamily(FontFamily::Sans));
        let after_first = state.clone();
        apply(&mut state, ReaderAction::SetFontFamily(FontFamily::Sans));

        assert_eq!(state, after_first);
        assert_eq!(state.settings.font_family, FontFamily::Sans);
    }

    #[test]
    fn playback_toggle_only_flips_the_flag() {
        let mut state = state();
        let effects = apply(&mut state, ReaderAction::TogglePlayback);

        assert_eq!(effects, vec![ReaderEffect::PlaybackChanged { playing: true }]);
        assert_eq!(state.settings.playback_position, 30);
    }

    #[test]
    fn playback_position_is_clamped() {
        let mut state = state();
        apply(&mut state, ReaderAction::SetPlaybackPosition(150));
        assert_eq!(state.settings.playback_position, 100);
        apply(&mut state, ReaderAction::SetPlaybackPosition(-5));
        assert_eq!(state.settings.playback_position, 0);
        apply(&mut state, ReaderAction::SetPlaybackPosition(64));
        assert_eq!(state.settings.playback_position, 64);
    }

    #[test]
    fn saved_assignment_is_kept_for_the_session() {
        let mut state = state();
        apply(&mut state, ReaderAction::OpenVoiceEditor);
        apply(
            &mut state,
            ReaderAction::AssignVoice {
                character: CharacterId::from("lucie"),
                voice: VoiceId::from("bright"),
            },
        );
        let effects = apply(&mut state, ReaderAction::SaveVoiceAssignment);

        let expected: VoiceAssignment = [
            (CharacterId::from("carton"), VoiceId::from("deep")),
            (CharacterId::from("lucie"), VoiceId::from("bright")),
        ]
        .into_iter()
        .collect();
        assert_eq!(effects, vec![ReaderEffect::VoiceAssignmentSaved(expected.clone())]);
        assert_eq!(state.assignments, expected);
        assert!(!state.voice_editor_open());

        apply(&mut state, ReaderAction::OpenVoiceEditor);
        assert_eq!(
            state.voice_editor.as_ref().map(|editor| editor.draft().clone()),
            Some(expected)
        );
    }

    #[test]
    fn cancel_reports_nothing_and_keeps_committed_mapping() {
        let mut state = state();
        let committed = state.assignments.clone();
        apply(&mut state, ReaderAction::OpenVoiceEditor);
        apply(
            &mut state,
            ReaderAction::AssignVoice {
                character: CharacterId::from("carton"),
                voice: VoiceId::from("bright"),
            },
        );
        let effects = apply(&mut state, ReaderAction::CancelVoiceAssignment);

        assert!(!effects
            .iter()
            .any(|effect| matches!(effect, ReaderEffect::VoiceAssignmentSaved(_))));
        assert_eq!(state.assignments, committed);
        assert!(!state.voice_editor_open());
    }

    #[test]
    fn replacing_assignments_rebases_the_open_editor() {
        let mut state = state();
        apply(&mut state, ReaderAction::OpenVoiceEditor);
        apply(
            &mut state,
            ReaderAction::AssignVoice {
                character: CharacterId::from("lucie"),
                voice: VoiceId::from("deep"),
            },
        );
        let upstream: VoiceAssignment = [(CharacterId::from("carton"), VoiceId::from("bright"))]
            .into_iter()
            .collect();

        let effects = apply(&mut state, ReaderAction::ReplaceAssignments(upstream.clone()));

        assert_eq!(
            effects,
            vec![ReaderEffect::VoiceDraftDiscarded {
                changed: vec![CharacterId::from("lucie")]
            }]
        );
        assert_eq!(
            state.voice_editor.as_ref().map(|editor| editor.draft().clone()),
            Some(upstream.clone())
        );
        assert_eq!(state.assignments, upstream);
    }

    #[test]
    fn voice_actions_without_editor_are_rejected() {
        let mut state = state();
        let before = state.clone();

        assert_eq!(
            reduce_reader(&mut state, ReaderAction::SaveVoiceAssignment),
            Err(ReaderError::VoiceEditorNotOpen)
        );
        assert_eq!(
            reduce_reader(
                &mut state,
                ReaderAction::AssignVoice {
                    character: CharacterId::from("carton"),
                    voice: VoiceId::from("bright"),
                }
            ),
            Err(ReaderError::VoiceEditorNotOpen)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_voice_keeps_editor_open() {
        let mut state = state();
        apply(&mut state, ReaderAction::OpenVoiceEditor);

        let result = reduce_reader(
            &mut state,
            ReaderAction::AssignVoice {
                character: CharacterId::from("carton"),
                voice: VoiceId::from("whisper"),
            },
        );

        assert_eq!(
            result,
            Err(ReaderError::Session(VoiceSessionError::UnknownVoice(
                VoiceId::from("whisper")
            )))
        );
        assert!(state.voice_editor_open());
    }

    #[test]
    fn opening_voice_editor_closes_typography_panel() {
        let mut state = state();
        apply(&mut state, ReaderAction::ToggleTypographyPanel);
        assert!(state.typography_open);
        apply(&mut state, ReaderAction::OpenVoiceEditor);
        assert!(!state.typography_open);
        assert!(state.voice_editor_open());
    }
}
