// src/fellow/registry.rs
// =============================================================================
// The identity registry: every Fellow known to one Getter lives here.
//
// ensure() is an idempotent upsert. It merges into the first fellow whose
// identity fields match, or creates a new one. flatten() merges several
// result collections into one, re-reading each fellow from the registry so
// the result carries the most complete record.
//
// The mutex is only held for in-memory work, never across an .await.
// =============================================================================

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::trace;

use super::{Fellow, FellowAttributes, FellowId, Fellows};

#[derive(Debug, Default)]
pub struct FellowRegistry {
    inner: Mutex<RegistryInner>,
}

// Fellows by id, plus one index per identity field.
// Usernames and emails are indexed lowercased; the first fellow to claim a
// key keeps it.
#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    fellows: HashMap<FellowId, Fellow>,
    by_username: HashMap<String, FellowId>,
    by_url: HashMap<String, FellowId>,
    by_email: HashMap<String, FellowId>,
}

impl RegistryInner {
    // Looks the attributes up in each index (username first) and returns the
    // first candidate that really is the same person
    fn find_match(&self, attributes: &FellowAttributes) -> Option<FellowId> {
        let candidates = [
            attributes
                .github_username
                .as_deref()
                .and_then(|u| self.by_username.get(&u.to_lowercase())),
            attributes.github_url.as_deref().and_then(|u| self.by_url.get(u)),
            attributes
                .email
                .as_deref()
                .and_then(|e| self.by_email.get(&e.to_lowercase())),
        ];

        candidates
            .into_iter()
            .flatten()
            .copied()
            .find(|id| self.fellows.get(id).is_some_and(|f| f.matches(attributes)))
    }

    // Records whatever identity keys the fellow has now
    fn index(&mut self, fellow: &Fellow) {
        if let Some(username) = &fellow.github_username {
            self.by_username.entry(username.to_lowercase()).or_insert(fellow.id);
        }
        if let Some(url) = &fellow.github_url {
            self.by_url.entry(url.clone()).or_insert(fellow.id);
        }
        if let Some(email) = &fellow.email {
            self.by_email.entry(email.to_lowercase()).or_insert(fellow.id);
        }
    }
}

impl FellowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns a snapshot of the merged (or new) fellow
    pub fn ensure(&self, attributes: FellowAttributes) -> Fellow {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        // Same person already known? merge into them
        let matched = inner.find_match(&attributes);
        let fellow = match matched.and_then(|id| inner.fellows.get_mut(&id)) {
            Some(existing) => {
                existing.merge(attributes);
                trace!(id = %existing.id, "merged into existing fellow");
                existing.clone()
            }
            None => {
                // Otherwise hand out the next id
                inner.next_id += 1;
                let fellow = Fellow::new(FellowId(inner.next_id), attributes);
                trace!(id = %fellow.id, "created fellow");
                inner.fellows.insert(fellow.id, fellow.clone());
                fellow
            }
        };

        // A merge may have filled in identity fields that were missing
        inner.index(&fellow);
        fellow
    }

    pub fn get(&self, id: FellowId) -> Option<Fellow> {
        self.inner.lock().fellows.get(&id).cloned()
    }

    pub fn find_by_username(&self, username: &str) -> Option<Fellow> {
        let inner = self.inner.lock();
        inner
            .by_username
            .get(&username.to_lowercase())
            .and_then(|id| inner.fellows.get(id))
            .cloned()
    }

    pub fn flatten<I>(&self, collections: I) -> Fellows
    where
        I: IntoIterator<Item = Fellows>,
    {
        // One lock for the whole pass
        let inner = self.inner.lock();
        let mut flat = Fellows::new();
        for collection in collections {
            for fellow in collection {
                // foreign snapshots are kept as they are
                let current = inner.fellows.get(&fellow.id).cloned().unwrap_or(fellow);
                flat.insert(current);
            }
        }
        flat
    }

    pub fn len(&self) -> usize {
        self.inner.lock().fellows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return clones instead of references?
//    - The fellows live behind a Mutex; a reference would keep it locked
//    - A clone is a snapshot the caller can hold across .await points
//
// 2. Why parking_lot::Mutex?
//    - lock() returns the guard directly (no poisoning, no unwrap)
//
// 3. Why `let inner = &mut *guard`?
//    - Reborrowing the guard as a plain &mut RegistryInner lets the borrow
//      checker see its fields separately (fellows vs next_id)
// -----------------------------------------------------------------------------
