use super::model::Recipe;

/// The accumulated, paginated result of one logical search session.
///
/// Caller-owned state: use cases take a set by reference and return a new
/// one; a failed operation leaves the caller's set untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultSet {
    /// Enriched, filtered recipes accumulated so far, in fetch order.
    pub items: Vec<Recipe>,
    /// Total matches the catalog reports for the query.
    pub total_available: u32,
    /// Count of items fetched so far for this query, before client-side
    /// filtering. The next page request starts here.
    pub next_offset: u32,
    pub query: String,
}

impl SearchResultSet {
    /// The state before any search has run.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_available: 0,
            next_offset: 0,
            query: String::new(),
        }
    }

    /// Whether every available result has been fetched already.
    pub fn is_exhausted(&self) -> bool {
        self.next_offset >= self.total_available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_empty_and_exhausted() {
        let set = SearchResultSet::empty();

        assert!(set.items.is_empty());
        assert_eq!(set.next_offset, 0);
        assert!(set.is_exhausted());
    }

    #[test]
    fn should_report_not_exhausted_while_results_remain() {
        let set = SearchResultSet {
            items: Vec::new(),
            total_available: 12,
            next_offset: 5,
            query: "pasta".to_string(),
        };

        assert!(!set.is_exhausted());
    }

    #[test]
    fn should_report_exhausted_once_offset_reaches_total() {
        let set = SearchResultSet {
            items: Vec::new(),
            total_available: 5,
            next_offset: 5,
            query: "pasta".to_string(),
        };

        assert!(set.is_exhausted());
    }
}
