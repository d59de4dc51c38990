//! Account page tabs and the profile form state machine.

use std::sync::OnceLock;

use catalog_host::ProfileDetails;
use regex::Regex;

/// Shown under the name field when it is too short.
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
/// Shown under the email field when it is not an address.
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Account page tabs.
pub enum AccountTab {
    #[default]
    Profile,
    PurchaseHistory,
    Payment,
    Security,
}

impl AccountTab {
    /// Tabs in display order.
    pub const ALL: [Self; 4] = [
        Self::Profile,
        Self::PurchaseHistory,
        Self::Payment,
        Self::Security,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::PurchaseHistory => "history",
            Self::Payment => "payment",
            Self::Security => "security",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::PurchaseHistory => "Purchase History",
            Self::Payment => "Payment",
            Self::Security => "Security",
        }
    }
}

/// Leading dots and `..` runs are rejected separately.
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
}

/// Whether `email` is an address, checked exactly as entered.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.')
        && !email.contains("..")
        && email_pattern().is_some_and(|pattern| pattern.is_match(email))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Field-level validation messages.
pub struct ProfileFormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl ProfileFormErrors {
    /// Validates raw field values.
    pub fn check(name: &str, email: &str) -> Self {
        Self {
            name: (name.chars().count() < MIN_NAME_CHARS).then_some(NAME_TOO_SHORT),
            email: (!is_valid_email(email)).then_some(INVALID_EMAIL),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Lifecycle of the profile form.
pub enum ProfileFormStatus {
    /// Showing the defaults, untouched.
    #[default]
    Idle,
    /// Edited since load or since the last save.
    Dirty,
    /// A submission failed; messages follow edits until the next submit.
    ErrorsShown,
    /// The last submission passed and was reported.
    Saved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Profile form values plus validation state.
pub struct ProfileForm {
    name: String,
    email: String,
    status: ProfileFormStatus,
    errors: ProfileFormErrors,
}

impl ProfileForm {
    /// Form seeded with the account's current profile.
    pub fn new(defaults: &ProfileDetails) -> Self {
        Self {
            name: defaults.name.clone(),
            email: defaults.email.clone(),
            status: ProfileFormStatus::Idle,
            errors: ProfileFormErrors::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> ProfileFormStatus {
        self.status
    }

    /// Messages currently shown. Empty until the first failed submit.
    pub fn errors(&self) -> &ProfileFormErrors {
        &self.errors
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.after_edit();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.after_edit();
    }

    /// Validates the form.
    ///
    /// On success the status becomes [`ProfileFormStatus::Saved`] and the values, as entered,
    /// are returned for reporting.
    ///
    /// # Errors
    ///
    /// Returns the field messages and moves to [`ProfileFormStatus::ErrorsShown`]; nothing is
    /// returned for reporting.
    pub fn submit(&mut self) -> Result<ProfileDetails, ProfileFormErrors> {
        let errors = ProfileFormErrors::check(&self.name, &self.email);
        if !errors.is_empty() {
            self.errors = errors.clone();
            self.status = ProfileFormStatus::ErrorsShown;
            return Err(errors);
        }
        self.errors = ProfileFormErrors::default();
        self.status = ProfileFormStatus::Saved;
        Ok(ProfileDetails {
            name: self.name.clone(),
            email: self.email.clone(),
        })
    }

    fn after_edit(&mut self) {
        match self.status {
            ProfileFormStatus::ErrorsShown => {
                self.errors = ProfileFormErrors::check(&self.name, &self.email);
            }
            ProfileFormStatus::Idle | ProfileFormStatus::Dirty | ProfileFormStatus::Saved => {
                self.status = ProfileFormStatus::Dirty;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn defaults() -> ProfileDetails {
        ProfileDetails {
            name: "Alex Doe".to_string(),
            email: "alex.doe@example.com".to_string(),
        }
    }

    #[test]
    fn one_character_name_is_rejected_with_visible_error() {
        let mut form = ProfileForm::new(&defaults());
        form.set_name("A");

        let result = form.submit();

        assert_eq!(
            result,
            Err(ProfileFormErrors {
                name: Some(NAME_TOO_SHORT),
                email: None,
            })
        );
        assert_eq!(form.status(), ProfileFormStatus::ErrorsShown);
        assert_eq!(form.errors().name, Some(NAME_TOO_SHORT));
    }

    #[test]
    fn valid_defaults_save_exactly_those_values() {
        let mut form = ProfileForm::new(&defaults());
        assert_eq!(form.status(), ProfileFormStatus::Idle);

        assert_eq!(form.submit(), Ok(defaults()));
        assert_eq!(form.status(), ProfileFormStatus::Saved);
    }

    #[test]
    fn status_follows_edit_submit_cycle() {
        let mut form = ProfileForm::new(&defaults());
        form.set_email("not-an-email");
        assert_eq!(form.status(), ProfileFormStatus::Dirty);
        assert!(form.errors().is_empty());

        assert!(form.submit().is_err());
        assert_eq!(form.errors().email, Some(INVALID_EMAIL));

        form.set_email("alex@example.org");
        assert_eq!(form.status(), ProfileFormStatus::ErrorsShown);
        assert!(form.errors().is_empty());

        assert!(form.submit().is_ok());
        assert_eq!(form.status(), ProfileFormStatus::Saved);

        form.set_name("Alexandra Doe");
        assert_eq!(form.status(), ProfileFormStatus::Dirty);
    }

    #[test]
    fn values_are_validated_and_saved_as_entered() {
        assert_eq!(ProfileFormErrors::check("A ", "a@b.co").name, None);
        assert_eq!(ProfileFormErrors::check("A", "a@b.co").name, Some(NAME_TOO_SHORT));

        let mut form = ProfileForm::new(&defaults());
        form.set_name("  Bob ");
        assert_eq!(
            form.submit(),
            Ok(ProfileDetails {
                name: "  Bob ".to_string(),
                email: "alex.doe@example.com".to_string(),
            })
        );
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(email_pattern().is_some());
    }

    #[test]
    fn email_syntax() {
        for valid in [
            "alex.doe@example.com",
            "a+tag@mail.example.co.uk",
            "o'brien@example.ie",
            "x@y.io",
        ] {
            assert!(is_valid_email(valid), "{valid}");
        }
        for invalid in [
            "",
            "alex",
            "alex@",
            "@example.com",
            "alex@example",
            "alex@@example.com",
            "alex doe@example.com",
            " x@y.io ",
            "alex@example.c",
            "alex@-example.com",
            ".alex@example.com",
            "alex.@example.com",
            "alex..doe@example.com",
            "a\"b@x.com",
            "alex@ex\u{e4}mple.com",
        ] {
            assert!(!is_valid_email(invalid), "{invalid}");
        }
    }
}
