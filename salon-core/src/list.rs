//! List envelope shared by every collection endpoint.
//!
//! Depending on pagination settings the backend answers either with a bare
//! JSON array or with the `{count, next, previous, results}` wrapper. Both
//! decode into [`ListResponse`] so callers never branch on the shape.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated {
        count: u64,
        next: Option<String>,
        previous: Option<String>,
        results: Vec<T>,
    },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Items of the current page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Paginated { results, .. } => results,
            Self::Plain(items) => items,
        }
    }

    /// Consume the envelope, keeping only the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated { results, .. } => results,
            Self::Plain(items) => items,
        }
    }

    /// Total matching rows, which can exceed the page for paginated answers.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        match self {
            Self::Paginated { count, .. } => *count,
            Self::Plain(items) => items.len() as u64,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self::Plain(Vec::new())
    }
}
