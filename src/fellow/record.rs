// src/fellow/record.rs
// =============================================================================
// The Fellow record: one real-world person, normalized from whatever source
// profiles we have seen for them.
//
// Identity fields (GitHub username, GitHub URL, email) decide whether two
// sightings are the same person. Once set they are never overwritten, so a
// later merge cannot re-key an existing fellow. Descriptive fields (name,
// company, ...) take the most recent non-empty value.
// =============================================================================

use std::fmt;

use serde::Serialize;

use crate::github::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FellowId(pub(crate) u64);

impl fmt::Display for FellowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fellow#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fellow {
    pub id: FellowId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub homepage: Option<String>,
    pub hireable: Option<bool>,
    pub github_username: Option<String>,
    pub github_url: Option<String>,
    /// Raw profile as last fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_profile: Option<Profile>,
}

// Everything ensure() may know about a person. Empty strings should already
// be None here; from_profile takes care of that for GitHub data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FellowAttributes {
    pub name: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub homepage: Option<String>,
    pub hireable: Option<bool>,
    pub github_username: Option<String>,
    pub github_url: Option<String>,
    pub github_profile: Option<Profile>,
}

impl FellowAttributes {
    pub fn from_profile(profile: Profile) -> Self {
        Self {
            name: non_empty(profile.name.clone()),
            email: non_empty(profile.email.clone()),
            description: non_empty(profile.bio.clone()),
            company: non_empty(profile.company.clone()),
            location: non_empty(profile.location.clone()),
            homepage: non_empty(profile.blog.clone()),
            hireable: profile.hireable,
            github_username: non_empty(Some(profile.login.clone())),
            github_url: non_empty(Some(profile.html_url.clone())),
            github_profile: Some(profile),
        }
    }
}

impl From<Profile> for FellowAttributes {
    fn from(profile: Profile) -> Self {
        Self::from_profile(profile)
    }
}

impl Fellow {
    pub(crate) fn new(id: FellowId, attributes: FellowAttributes) -> Self {
        let mut fellow = Self {
            id,
            name: None,
            email: None,
            description: None,
            company: None,
            location: None,
            homepage: None,
            hireable: None,
            github_username: None,
            github_url: None,
            github_profile: None,
        };
        fellow.merge(attributes);
        fellow
    }

    // Same person if any identity field agrees.
    // GitHub logins are unique, so two different logins never match, even
    // when they share an email (team addresses) or anything else.
    pub fn matches(&self, attributes: &FellowAttributes) -> bool {
        if let (Some(ours), Some(theirs)) = (&self.github_username, &attributes.github_username) {
            return ours.eq_ignore_ascii_case(theirs);
        }

        same(&self.github_url, &attributes.github_url)
            || same_ignoring_case(&self.email, &attributes.email)
    }

    pub(crate) fn merge(&mut self, attributes: FellowAttributes) {
        // identity: first value sticks
        fill(&mut self.github_username, attributes.github_username);
        fill(&mut self.github_url, attributes.github_url);
        fill(&mut self.email, attributes.email);

        replace(&mut self.name, attributes.name);
        replace(&mut self.description, attributes.description);
        replace(&mut self.company, attributes.company);
        replace(&mut self.location, attributes.location);
        replace(&mut self.homepage, attributes.homepage);
        replace(&mut self.hireable, attributes.hireable);
        replace(&mut self.github_profile, attributes.github_profile);
    }

    /// Best label for display: username, then name, then email
    pub fn display_name(&self) -> &str {
        self.github_username
            .as_deref()
            .or(self.name.as_deref())
            .or(self.email.as_deref())
            .unwrap_or("")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}

fn replace<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

fn same(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

fn same_ignoring_case(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a.eq_ignore_ascii_case(b))
}
