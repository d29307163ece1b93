use crate::query::{parse_query, Query};

/// The search box: a text value plus the externally supplied loading flag.
///
/// Submission is gated the way the search form gates its button: nothing
/// happens while a lookup is in flight or while the trimmed text is empty.
#[derive(Debug, Default)]
pub struct SearchInput {
    value: String,
    loading: bool,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// False while loading or while the trimmed text is empty.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.value.trim().is_empty()
    }

    /// Classifies the current text; `None` when submission is gated off or
    /// the classifier yields nothing.
    pub fn submit(&self) -> Option<Query> {
        if !self.can_submit() {
            return None;
        }
        parse_query(&self.value)
    }
}
