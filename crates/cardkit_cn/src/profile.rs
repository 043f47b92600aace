//! Profile data shown on a card
//!
//! Owned by whatever edits it; the card only reads a snapshot. Every optional
//! field treats an empty string exactly like an absent value.

use serde::{Deserialize, Serialize};

const LINKEDIN_BASE: &str = "https://linkedin.com/in/";
const GITHUB_BASE: &str = "https://github.com/";

/// The person described by a card
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileData {
    pub name: String,
    pub position: String,
    #[serde(alias = "profileImage", skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(alias = "personalWebsite", skip_serializing_if = "Option::is_none")]
    pub personal_website: Option<String>,
    /// Comma separated skill list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
}

/// Which outbound link a contact entry points to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactKind {
    LinkedIn,
    GitHub,
    Website,
}

impl ContactKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::LinkedIn => "linkedin",
            Self::GitHub => "github",
            Self::Website => "website",
        }
    }
}

/// One outbound contact link derived from the profile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact<'a> {
    pub kind: ContactKind,
    /// Raw field value, shown as the link label
    pub label: &'a str,
    pub href: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ProfileData {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            ..Default::default()
        }
    }

    pub fn profile_image(&self) -> Option<&str> {
        present(&self.profile_image)
    }

    /// Contact links in display order, skipping empty fields
    pub fn contacts(&self) -> Vec<Contact<'_>> {
        let mut contacts = Vec::with_capacity(3);
        if let Some(handle) = present(&self.linkedin) {
            contacts.push(Contact {
                kind: ContactKind::LinkedIn,
                label: handle,
                href: format!("{LINKEDIN_BASE}{handle}"),
            });
        }
        if let Some(handle) = present(&self.github) {
            contacts.push(Contact {
                kind: ContactKind::GitHub,
                label: handle,
                href: format!("{GITHUB_BASE}{handle}"),
            });
        }
        if let Some(url) = present(&self.personal_website) {
            contacts.push(Contact {
                kind: ContactKind::Website,
                label: url,
                href: url.to_string(),
            });
        }
        contacts
    }

    /// Skills split on `,` with each piece trimmed.
    ///
    /// `None` when the field is absent or empty. Empty pieces and duplicates
    /// are kept: `"a, b ,, c"` yields `["a", "b", "", "c"]`.
    pub fn skill_list(&self) -> Option<Vec<&str>> {
        present(&self.skills).map(|skills| skills.split(',').map(str::trim).collect())
    }
}
