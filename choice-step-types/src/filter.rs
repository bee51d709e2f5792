use crate::{Choice, ChoiceCatalog};

/// Choices whose text contains `search`, ignoring case, in catalog order.
///
/// An empty search returns the whole catalog.
pub fn apply_filter<'c>(catalog: &'c ChoiceCatalog, search: &str) -> Vec<&'c Choice> {
    if search.is_empty() {
        return catalog.iter().collect();
    }

    let needle = search.to_lowercase();
    catalog
        .iter()
        .filter(|choice| choice.text.to_lowercase().contains(&needle))
        .collect()
}

/// Search state of a question screen.
///
/// The filtered list is always derived from the catalog and never stored,
/// so leaving search mode simply drops the search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterView {
    search: Option<String>,
}

impl FilterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter search mode with an empty search.
    pub fn begin(&mut self) {
        self.search = Some(String::new());
    }

    /// Update the search text, entering search mode if needed.
    pub fn set_text(&mut self, search: impl Into<String>) {
        self.search = Some(search.into());
    }

    /// Leave search mode.
    pub fn end(&mut self) {
        self.search = None;
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// The current search text, if searching.
    pub fn text(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// The choices to display.
    pub fn visible<'c>(&self, catalog: &'c ChoiceCatalog) -> Vec<&'c Choice> {
        apply_filter(catalog, self.search.as_deref().unwrap_or(""))
    }
}
