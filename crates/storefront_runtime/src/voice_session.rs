//! Draft character-to-voice mapping edited in the voice assignment overlay.
//!
//! A session snapshots its inputs once in [`VoiceAssignmentSession::open`]. Edits touch only the
//! draft; [`VoiceAssignmentSession::commit`] hands back the full mapping and
//! [`VoiceAssignmentSession::cancel`] drops it. When the caller's mapping changes while a session
//! is open, [`VoiceAssignmentSession::rebase`] replaces the draft and reports what was lost.

use catalog_host::{Character, CharacterId, Voice, VoiceAssignment, VoiceId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected voice session operations.
pub enum VoiceSessionError {
    /// The character is not in the session roster.
    #[error("character `{0}` is not in the roster")]
    UnknownCharacter(CharacterId),
    /// The voice is not in the session voice catalog.
    #[error("voice `{0}` is not in the voice catalog")]
    UnknownVoice(VoiceId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of [`VoiceAssignmentSession::rebase`].
pub enum SessionEvent {
    /// The new mapping equals the snapshot; the draft was kept.
    Unchanged,
    /// The draft was replaced by the new mapping.
    Invalidated {
        /// Characters whose uncommitted edits were dropped.
        discarded: Vec<CharacterId>,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// One open voice assignment edit.
pub struct VoiceAssignmentSession {
    roster: Vec<Character>,
    voices: Vec<Voice>,
    initial: VoiceAssignment,
    draft: VoiceAssignment,
}

impl VoiceAssignmentSession {
    /// Opens a session whose draft starts as a copy of `initial`.
    pub fn open(roster: Vec<Character>, voices: Vec<Voice>, initial: VoiceAssignment) -> Self {
        Self {
            roster,
            voices,
            draft: initial.clone(),
            initial,
        }
    }

    pub fn roster(&self) -> &[Character] {
        &self.roster
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    /// Mapping the session was opened (or last rebased) with.
    pub fn initial(&self) -> &VoiceAssignment {
        &self.initial
    }

    pub fn draft(&self) -> &VoiceAssignment {
        &self.draft
    }

    /// Draft voice for one character; `None` means unset.
    pub fn voice_for(&self, character: &CharacterId) -> Option<&VoiceId> {
        self.draft.voice_for(character)
    }

    /// Sets one character's draft voice. Several characters may share a voice.
    ///
    /// # Errors
    ///
    /// Rejects characters outside the roster and voices outside the catalog; the draft is left
    /// untouched in that case.
    pub fn assign(
        &mut self,
        character: &CharacterId,
        voice: &VoiceId,
    ) -> Result<(), VoiceSessionError> {
        self.check_character(character)?;
        self.check_voice(voice)?;
        self.draft.assign(character.clone(), voice.clone());
        Ok(())
    }

    /// Whether the draft differs from the snapshot.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.initial
    }

    /// Whether every draft entry names a known character and voice.
    ///
    /// An empty roster with an empty draft is saveable.
    pub fn can_save(&self) -> bool {
        self.validate_draft().is_ok()
    }

    /// Closes the session and returns the full draft, unchanged entries included.
    ///
    /// # Errors
    ///
    /// Fails when a draft entry (typically one arriving through [`Self::rebase`]) references a
    /// character or voice this session does not know.
    pub fn commit(self) -> Result<VoiceAssignment, VoiceSessionError> {
        self.validate_draft()?;
        Ok(self.draft)
    }

    /// Closes the session without reporting. Returns the characters whose edits were dropped.
    pub fn cancel(self) -> Vec<CharacterId> {
        self.draft.changed_characters(&self.initial)
    }

    /// Replaces the snapshot and draft with a new upstream mapping.
    pub fn rebase(&mut self, new_initial: VoiceAssignment) -> SessionEvent {
        if new_initial == self.initial {
            return SessionEvent::Unchanged;
        }
        let discarded = self.draft.changed_characters(&self.initial);
        self.draft = new_initial.clone();
        self.initial = new_initial;
        SessionEvent::Invalidated { discarded }
    }

    fn validate_draft(&self) -> Result<(), VoiceSessionError> {
        for (character, voice) in self.draft.iter() {
            self.check_character(character)?;
            self.check_voice(voice)?;
        }
        Ok(())
    }

    fn check_character(&self, character: &CharacterId) -> Result<(), VoiceSessionError> {
        if self.roster.iter().any(|entry| &entry.id == character) {
            Ok(())
        } else {
            Err(VoiceSessionError::UnknownCharacter(character.clone()))
        }
    }

    fn check_voice(&self, voice: &VoiceId) -> Result<(), VoiceSessionError> {
        if self.voices.iter().any(|entry| &entry.id == voice) {
            Ok(())
        } else {
            Err(VoiceSessionError::UnknownVoice(voice.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn character(id: &str, name: &str) -> Character {
        Character {
            id: CharacterId::from(id),
            name: name.to_string(),
        }
    }

    fn voice(id: &str, name: &str) -> Voice {
        Voice {
            id: VoiceId::from(id),
            name: name.to_string(),
        }
    }

    fn mapping(pairs: &[(&str, &str)]) -> VoiceAssignment {
        pairs
            .iter()
            .map(|(c, v)| (CharacterId::from(*c), VoiceId::from(*v)))
            .collect()
    }

    fn session(initial: VoiceAssignment) -> VoiceAssignmentSession {
        VoiceAssignmentSession::open(
            vec![
                character("carton", "Sydney Carton"),
                character("lucie", "Lucie Manette"),
                character("defarge", "Madame Defarge"),
            ],
            vec![voice("deep", "Deep Baritone"), voice("bright", "Bright Soprano")],
            initial,
        )
    }

    #[test]
    fn commit_reports_full_mapping_including_untouched_entries() {
        let mut editor = session(mapping(&[("carton", "deep"), ("lucie", "bright")]));
        editor
            .assign(&CharacterId::from("defarge"), &VoiceId::from("deep"))
            .expect("assign");

        assert!(editor.is_dirty());
        assert_eq!(
            editor.commit().expect("commit"),
            mapping(&[("carton", "deep"), ("defarge", "deep"), ("lucie", "bright")])
        );
    }

    #[test]
    fn assign_only_changes_the_selected_character() {
        let mut editor = session(mapping(&[("carton", "deep"), ("lucie", "bright")]));
        editor
            .assign(&CharacterId::from("carton"), &VoiceId::from("bright"))
            .expect("assign");

        assert_eq!(
            editor.voice_for(&CharacterId::from("carton")),
            Some(&VoiceId::from("bright"))
        );
        assert_eq!(
            editor.voice_for(&CharacterId::from("lucie")),
            Some(&VoiceId::from("bright"))
        );
        assert_eq!(editor.voice_for(&CharacterId::from("defarge")), None);
    }

    #[test]
    fn cancel_leaves_the_callers_mapping_untouched() {
        let committed = mapping(&[("carton", "deep")]);
        let mut editor = session(committed.clone());
        editor
            .assign(&CharacterId::from("carton"), &VoiceId::from("bright"))
            .expect("assign");

        assert_eq!(editor.cancel(), vec![CharacterId::from("carton")]);
        assert_eq!(committed, mapping(&[("carton", "deep")]));
    }

    #[test]
    fn unknown_ids_are_rejected_without_touching_the_draft() {
        let mut editor = session(VoiceAssignment::new());

        assert_eq!(
            editor.assign(&CharacterId::from("marquis"), &VoiceId::from("deep")),
            Err(VoiceSessionError::UnknownCharacter(CharacterId::from("marquis")))
        );
        assert_eq!(
            editor.assign(&CharacterId::from("carton"), &VoiceId::from("whisper")),
            Err(VoiceSessionError::UnknownVoice(VoiceId::from("whisper")))
        );
        assert!(!editor.is_dirty());
    }

    #[test]
    fn rebase_discards_uncommitted_edits() {
        let mut editor = session(mapping(&[("carton", "deep")]));
        editor
            .assign(&CharacterId::from("lucie"), &VoiceId::from("bright"))
            .expect("assign");

        let event = editor.rebase(mapping(&[("carton", "bright")]));

        assert_eq!(
            event,
            SessionEvent::Invalidated {
                discarded: vec![CharacterId::from("lucie")]
            }
        );
        assert_eq!(editor.draft(), &mapping(&[("carton", "bright")]));
        assert!(!editor.is_dirty());
    }

    #[test]
    fn rebase_with_same_mapping_keeps_draft() {
        let mut editor = session(mapping(&[("carton", "deep")]));
        editor
            .assign(&CharacterId::from("lucie"), &VoiceId::from("bright"))
            .expect("assign");

        assert_eq!(editor.rebase(mapping(&[("carton", "deep")])), SessionEvent::Unchanged);
        assert!(editor.is_dirty());
    }

    #[test]
    fn commit_rejects_foreign_entries_from_rebase() {
        let mut editor = session(VoiceAssignment::new());
        let _ = editor.rebase(mapping(&[("carton", "whisper")]));

        assert!(!editor.can_save());
        assert_eq!(
            editor.commit(),
            Err(VoiceSessionError::UnknownVoice(VoiceId::from("whisper")))
        );
    }

    #[test]
    fn empty_roster_saves_an_empty_mapping() {
        let editor = VoiceAssignmentSession::open(Vec::new(), Vec::new(), VoiceAssignment::new());

        assert!(editor.roster().is_empty());
        assert!(editor.can_save());
        assert_eq!(editor.commit().expect("commit"), VoiceAssignment::new());
    }
}
