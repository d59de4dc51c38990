//! Plain storefront value records shared by the provider contracts and the UI runtime.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Cover image used when a work has no cover reference.
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/400x600";

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates an id from any string-like value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the raw id string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(
    /// Stable catalog identifier for a work.
    WorkId
);
string_id!(
    /// Identifier of a character in a reading session roster.
    CharacterId
);
string_id!(
    /// Identifier of a narration voice.
    VoiceId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A catalog item with authorship and cover metadata.
pub struct Work {
    /// Catalog id.
    pub id: WorkId,
    /// Display title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Cover image URL; empty means "use the placeholder".
    #[serde(default)]
    pub cover_url: String,
    /// Whether the current reader owns the work.
    #[serde(default)]
    pub owned: bool,
}

impl Work {
    /// Returns the cover URL, substituting [`PLACEHOLDER_COVER_URL`] when none is set.
    pub fn cover_or_placeholder(&self) -> &str {
        if self.cover_url.trim().is_empty() {
            PLACEHOLDER_COVER_URL
        } else {
            &self.cover_url
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A labeled, horizontally browsable run of works.
pub struct ShelfSection {
    /// Shelf heading.
    pub title: String,
    /// Works in display order.
    pub works: Vec<Work>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A character eligible for voice assignment.
pub struct Character {
    /// Roster id.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A narration voice option.
pub struct Voice {
    /// Voice id.
    pub id: VoiceId,
    /// Display name.
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Mapping from character ids to voice ids. Characters without an entry are unset.
pub struct VoiceAssignment(BTreeMap<CharacterId, VoiceId>);

impl VoiceAssignment {
    /// Returns an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the voice for `character`, if one is set.
    pub fn voice_for(&self, character: &CharacterId) -> Option<&VoiceId> {
        self.0.get(character)
    }

    /// Sets the voice for one character, leaving every other entry untouched.
    pub fn assign(&mut self, character: CharacterId, voice: VoiceId) {
        self.0.insert(character, voice);
    }

    /// Iterates entries in character-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&CharacterId, &VoiceId)> {
        self.0.iter()
    }

    /// Number of characters with a voice set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no character has a voice set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Characters whose voice differs between `self` and `other`.
    pub fn changed_characters(&self, other: &Self) -> Vec<CharacterId> {
        let mut changed = self
            .0
            .iter()
            .filter(|(character, voice)| other.0.get(*character) != Some(*voice))
            .map(|(character, _)| character.clone())
            .collect::<Vec<_>>();
        changed.extend(
            other
                .0
                .keys()
                .filter(|character| !self.0.contains_key(*character))
                .cloned(),
        );
        changed.sort();
        changed
    }
}

impl FromIterator<(CharacterId, VoiceId)> for VoiceAssignment {
    fn from_iter<T: IntoIterator<Item = (CharacterId, VoiceId)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A work in the reader's personal library.
pub struct LibraryEntry {
    /// Catalog id.
    pub id: WorkId,
    /// Display title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Cover image URL.
    #[serde(default)]
    pub cover_url: String,
    /// Whether an audio edition is part of the purchase.
    #[serde(default)]
    pub audiobook: bool,
    /// Reading progress in percent. Not validated against [0, 100].
    pub progress: i32,
}

impl LibraryEntry {
    /// Progress clamped to the displayable [0, 100] range.
    pub fn progress_percent(&self) -> u16 {
        self.progress.clamp(0, 100) as u16
    }

    /// Library entries are owned by definition.
    pub fn as_owned_work(&self) -> Work {
        Work {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            cover_url: self.cover_url.clone(),
            owned: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One chapter of long-form content.
pub struct Chapter {
    /// Chapter heading.
    pub title: String,
    /// Chapter body text.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Content and voice roster for one reading session.
pub struct ReaderBook {
    /// Book title shown in the reader header.
    pub title: String,
    /// Chapters in reading order.
    pub chapters: Vec<Chapter>,
    /// Characters eligible for voice assignment.
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Voice catalog.
    #[serde(default)]
    pub voices: Vec<Voice>,
    /// Initial assignment for the session.
    #[serde(default)]
    pub assignments: VoiceAssignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A reader review shown on the detail page.
pub struct Review {
    /// Review id.
    pub id: u32,
    /// Reviewer display name.
    pub user: String,
    /// Whole-star rating.
    pub rating: u8,
    /// Review text.
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Bibliographic details listed in the "Book Details" panel.
pub struct PublicationDetails {
    /// Publisher name.
    pub publisher: String,
    /// Human-readable publication date.
    pub publication_date: String,
    /// Page count.
    pub pages: u32,
    /// ISBN.
    pub isbn: String,
    /// Genre label.
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Full record backing the work detail page.
pub struct WorkDetail {
    /// Catalog summary.
    pub work: Work,
    /// Average rating on a five-star scale.
    pub rating: f32,
    /// Total number of reviews.
    pub reviews_count: u32,
    /// Price label shown on the purchase button.
    pub price: String,
    /// Synopsis paragraph.
    pub synopsis: String,
    /// Bibliographic details.
    pub details: PublicationDetails,
    /// Author biography.
    pub author_bio: String,
    /// Selected reader reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Star breakdown for a rating on a five-star scale.
pub struct StarRating {
    /// Fully filled stars.
    pub full: u8,
    /// Whether a half star follows the full stars.
    pub half: bool,
    /// Outline stars completing the row.
    pub empty: u8,
}

impl StarRating {
    /// Splits `rating` into full, half and empty stars. Any fractional part yields a half star.
    pub fn from_rating(rating: f32) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, 5.0)
        } else {
            0.0
        };
        let full = rating.floor() as u8;
        let half = rating.fract() > 0.0;
        let empty = 5 - full - u8::from(half);
        Self { full, half, empty }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Editable profile fields.
pub struct ProfileDetails {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A past purchase listed on the account page.
pub struct PurchaseRecord {
    /// Record id.
    pub id: u32,
    /// Purchased title.
    pub title: String,
    /// Purchase date label.
    pub date: String,
    /// Price label.
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A saved payment method.
pub struct PaymentMethod {
    /// Method id.
    pub id: String,
    /// Masked card label, for example `Visa **** 1234`.
    pub label: String,
    /// Expiry label.
    pub expires: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Everything the account page renders.
pub struct AccountSnapshot {
    /// Profile form defaults.
    pub profile: ProfileDetails,
    /// Purchase history, newest first.
    #[serde(default)]
    pub purchases: Vec<PurchaseRecord>,
    /// Saved payment methods.
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assignment(pairs: &[(&str, &str)]) -> VoiceAssignment {
        pairs
            .iter()
            .map(|(character, voice)| (CharacterId::from(*character), VoiceId::from(*voice)))
            .collect()
    }

    #[test]
    fn star_rating_splits_half_stars() {
        assert_eq!(
            StarRating::from_rating(4.5),
            StarRating {
                full: 4,
                half: true,
                empty: 0
            }
        );
        assert_eq!(
            StarRating::from_rating(3.0),
            StarRating {
                full: 3,
                half: false,
                empty: 2
            }
        );
        assert_eq!(StarRating::from_rating(f32::NAN).empty, 5);
        assert_eq!(StarRating::from_rating(9.0).full, 5);
    }

    #[test]
    fn assign_only_touches_one_character() {
        let mut mapping = assignment(&[("carton", "deep"), ("lucie", "bright")]);
        mapping.assign(CharacterId::from("carton"), VoiceId::from("warm"));

        assert_eq!(mapping, assignment(&[("carton", "warm"), ("lucie", "bright")]));
    }

    #[test]
    fn changed_characters_covers_added_and_modified_entries() {
        let before = assignment(&[("carton", "deep"), ("lucie", "bright")]);
        let after = assignment(&[("carton", "warm"), ("darnay", "deep"), ("lucie", "bright")]);

        assert_eq!(
            after.changed_characters(&before),
            vec![CharacterId::from("carton"), CharacterId::from("darnay")]
        );
        assert!(before.changed_characters(&before).is_empty());
    }

    #[test]
    fn missing_cover_uses_placeholder() {
        let work = Work {
            id: WorkId::from("1"),
            title: "Untitled".to_string(),
            author: "Anon".to_string(),
            cover_url: " ".to_string(),
            owned: false,
        };
        assert_eq!(work.cover_or_placeholder(), PLACEHOLDER_COVER_URL);
    }

    #[test]
    fn library_progress_is_clamped_for_display() {
        let entry = LibraryEntry {
            id: WorkId::from("9"),
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            cover_url: String::new(),
            audiobook: true,
            progress: 140,
        };
        assert_eq!(entry.progress_percent(), 100);
        assert!(entry.as_owned_work().owned);
    }
}
