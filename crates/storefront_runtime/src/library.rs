//! Personal library tab filtering.

use catalog_host::LibraryEntry;

/// Placeholder shown when the audiobook tab has nothing to list.
pub const EMPTY_AUDIOBOOKS_MESSAGE: &str = "You don't have any audiobooks yet.";
/// Placeholder shown when the library holds no titles at all.
pub const EMPTY_LIBRARY_MESSAGE: &str = "Your library is empty.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Library page tabs.
pub enum LibraryTab {
    /// Every owned title.
    #[default]
    All,
    /// Titles with an audio edition.
    Audiobooks,
}

impl LibraryTab {
    /// Tabs in display order.
    pub const ALL: [Self; 2] = [Self::All, Self::Audiobooks];

    pub const fn token(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Audiobooks => "audiobooks",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Titles",
            Self::Audiobooks => "Audiobooks",
        }
    }

    /// Placeholder for a tab with nothing to list.
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::All => EMPTY_LIBRARY_MESSAGE,
            Self::Audiobooks => EMPTY_AUDIOBOOKS_MESSAGE,
        }
    }
}

/// Entries visible under `tab`, in their original order.
pub fn filter_library(entries: &[LibraryEntry], tab: LibraryTab) -> Vec<LibraryEntry> {
    entries
        .iter()
        .filter(|entry| match tab {
            LibraryTab::All => true,
            LibraryTab::Audiobooks => entry.audiobook,
        })
        .cloned()
        .collect()
}

/// Caption above an entry's progress gauge.
pub fn progress_label(entry: &LibraryEntry) -> String {
    format!("{}% complete", entry.progress)
}

#[cfg(test)]
mod tests {
    use catalog_host::WorkId;
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: &str, audiobook: bool, progress: i32) -> LibraryEntry {
        LibraryEntry {
            id: WorkId::from(id),
            title: format!("Title {id}"),
            author: "Author".to_string(),
            cover_url: String::new(),
            audiobook,
            progress,
        }
    }

    fn ids(entries: &[LibraryEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.id.as_str()).collect()
    }

    #[test]
    fn audiobook_filter_keeps_relative_order() {
        let entries = vec![
            entry("1", true, 75),
            entry("3", false, 20),
            entry("6", true, 10),
            entry("8", false, 55),
            entry("9", true, 90),
        ];

        assert_eq!(
            ids(&filter_library(&entries, LibraryTab::Audiobooks)),
            vec!["1", "6", "9"]
        );
        assert_eq!(filter_library(&entries, LibraryTab::All), entries);
    }

    #[test]
    fn no_audiobooks_yields_empty_tab() {
        let entries = vec![entry("3", false, 20)];
        assert!(filter_library(&entries, LibraryTab::Audiobooks).is_empty());
        assert_eq!(
            LibraryTab::Audiobooks.empty_message(),
            "You don't have any audiobooks yet."
        );
    }

    #[test]
    fn progress_label_uses_raw_value() {
        assert_eq!(progress_label(&entry("4", false, 100)), "100% complete");
        assert_eq!(progress_label(&entry("5", false, 120)), "120% complete");
    }
}
