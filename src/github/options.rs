// src/github/options.rs
// =============================================================================
// Per-call options and the per-iteration page request.
//
// Continuation rule for an organization's listing:
//   fetch the next page only if this page came back exactly full
//   (len == size) AND (pages == 0 OR page < pages)
//
// A full last page therefore costs one extra request that returns []. That
// is intentional: a full page is the only signal that more may exist.
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// First page to request (1-based)
    pub page: u32,
    /// Members per page (`per_page`)
    pub size: u32,
    /// Stop once this page number has been fetched; 0 = no limit
    pub pages: u32,
    /// Maximum in-flight requests per fan-out; 0 = no limit
    pub concurrency: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            page: 1,
            size: 100,
            pages: 10,
            concurrency: 0,
        }
    }
}

impl QueryOptions {
    // page 0 and size 0 fall back to the defaults; a size of 0 would make
    // every empty page look full
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        Self {
            page: if self.page == 0 { defaults.page } else { self.page },
            size: if self.size == 0 { defaults.size } else { self.size },
            ..self
        }
    }

    pub fn allows_page_after(&self, page: u32) -> bool {
        self.pages == 0 || page < self.pages
    }
}

// One listing request. Each loop iteration gets a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageRequest<'a> {
    pub org: &'a str,
    pub page: u32,
    pub size: u32,
}

impl<'a> PageRequest<'a> {
    pub fn first(org: &'a str, options: &QueryOptions) -> Self {
        Self {
            org,
            page: options.page,
            size: options.size,
        }
    }

    // The request to make after this one returned `listed` members, if any
    pub fn next(&self, options: &QueryOptions, listed: usize) -> Option<Self> {
        let full = listed == self.size as usize;
        if !full || !options.allows_page_after(self.page) {
            return None;
        }

        // u32::MAX is the last page we can ask for
        let page = self.page.checked_add(1)?;
        Some(Self { page, ..*self })
    }

    pub fn pathname(&self) -> String {
        format!("/orgs/{}/public_members", self.org)
    }

    pub fn search_params(&self) -> Vec<(&'static str, String)> {
        vec![("page", self.page.to_string()), ("per_page", self.size.to_string())]
    }
}
