// src/fellow/collection.rs
// =============================================================================
// Fellows: the result set returned by every fetch.
//
// Keyed by FellowId, so inserting a second snapshot of the same person
// replaces the first instead of adding a duplicate. Iteration follows id
// order, which carries no meaning beyond being stable.
// =============================================================================

use std::collections::btree_map::{self, BTreeMap};

use super::{Fellow, FellowId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fellows {
    fellows: BTreeMap<FellowId, Fellow>,
}

impl Fellows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the fellow was not in the set yet
    pub fn insert(&mut self, fellow: Fellow) -> bool {
        self.fellows.insert(fellow.id, fellow).is_none()
    }

    pub fn len(&self) -> usize {
        self.fellows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fellows.is_empty()
    }

    pub fn find_by_username(&self, username: &str) -> Option<&Fellow> {
        self.fellows.values().find(|f| {
            f.github_username
                .as_deref()
                .is_some_and(|u| u.eq_ignore_ascii_case(username))
        })
    }

    pub fn iter(&self) -> btree_map::Values<'_, FellowId, Fellow> {
        self.fellows.values()
    }

    /// GitHub usernames, sorted, for display and assertions
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .fellows
            .values()
            .filter_map(|f| f.github_username.as_deref())
            .collect();
        names.sort_unstable();
        names
    }
}

impl Extend<Fellow> for Fellows {
    fn extend<I: IntoIterator<Item = Fellow>>(&mut self, iter: I) {
        for fellow in iter {
            self.insert(fellow);
        }
    }
}

impl FromIterator<Fellow> for Fellows {
    fn from_iter<I: IntoIterator<Item = Fellow>>(iter: I) -> Self {
        let mut fellows = Fellows::new();
        fellows.extend(iter);
        fellows
    }
}

impl IntoIterator for Fellows {
    type Item = Fellow;
    type IntoIter = btree_map::IntoValues<FellowId, Fellow>;

    fn into_iter(self) -> Self::IntoIter {
        self.fellows.into_values()
    }
}

impl<'a> IntoIterator for &'a Fellows {
    type Item = &'a Fellow;
    type IntoIter = btree_map::Values<'a, FellowId, Fellow>;

    fn into_iter(self) -> Self::IntoIter {
        self.fellows.values()
    }
}
