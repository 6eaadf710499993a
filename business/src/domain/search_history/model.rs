/// Maximum number of remembered search terms.
pub const MAX_RECENT_SEARCHES: usize = 10;

/// The user's recent search terms, most recent first.
///
/// Recording a term the list already holds (case-insensitively) moves it
/// to the front instead of duplicating it. Blank terms are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecentSearches {
    terms: Vec<String>,
}

impl RecentSearches {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuilds the history from persisted terms, re-applying the dedupe
    /// and cap rules in case the stored data predates them.
    pub fn from_terms(terms: Vec<String>) -> Self {
        terms
            .into_iter()
            .rev()
            .fold(Self::empty(), |history, term| history.with_recorded(&term))
    }

    /// Returns a history with the term recorded at the front.
    pub fn with_recorded(&self, term: &str) -> Self {
        let term = term.trim();
        if term.is_empty() {
            return self.clone();
        }

        let mut terms: Vec<String> = self
            .terms
            .iter()
            .filter(|t| !t.eq_ignore_ascii_case(term))
            .cloned()
            .collect();
        terms.insert(0, term.to_string());
        terms.truncate(MAX_RECENT_SEARCHES);

        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
