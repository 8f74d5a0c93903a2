//! Catalog search.
//!
//! Search is a case-insensitive substring filter over titles and tags. The
//! catalog is small and already in memory, so there is no index.

use crate::models::DesignResource;

/// A normalized search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Build a query from raw user input.
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// Whether the query keeps every resource.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether the term occurs in the title or in any tag.
    #[must_use]
    pub fn matches(&self, resource: &DesignResource) -> bool {
        self.is_empty()
            || resource.title.to_lowercase().contains(&self.needle)
            || resource
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&self.needle))
    }
}

/// Keep the resources matching `term`, preserving their order.
#[must_use]
pub fn filter_resources(resources: Vec<DesignResource>, term: &str) -> Vec<DesignResource> {
    let query = SearchQuery::new(term);
    if query.is_empty() {
        return resources;
    }
    resources.into_iter().filter(|r| query.matches(r)).collect()
}
