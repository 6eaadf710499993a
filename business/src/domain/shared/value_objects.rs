use serde::{Deserialize, Serialize};

/// Identifier of a recipe in the external catalog.
/// The catalog assigns numeric ids; the core never generates its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeId(u64);

impl RecipeId {
    /// Creates a new RecipeId from the catalog's numeric identifier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecipeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
