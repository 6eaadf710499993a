use crate::domain::recipe::model::Recipe;
use crate::domain::shared::value_objects::RecipeId;

/// A recipe paired with its favorite flag, for list rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRecipe {
    pub recipe: Recipe,
    pub is_favorite: bool,
}

/// The user's saved recipes: insertion-ordered, one snapshot per id.
///
/// Insertion order is preserved for display only; it carries no other
/// meaning. All mutations return a new set, leaving the caller's value
/// intact.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesSet {
    entries: Vec<Recipe>,
}

impl FavoritesSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuilds a set from persisted snapshots. Later duplicates of an id
    /// are dropped, keeping the earliest snapshot.
    pub fn from_entries(entries: Vec<Recipe>) -> Self {
        let mut set = Self::empty();
        for recipe in entries {
            if !set.contains(recipe.id) {
                set.entries.push(recipe);
            }
        }
        set
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.entries.iter().any(|r| r.id == id)
    }

    /// Returns a set with the recipe appended, or an unchanged copy when
    /// the id is already saved.
    pub fn with_added(&self, recipe: Recipe) -> Self {
        if self.contains(recipe.id) {
            return self.clone();
        }
        let mut entries = self.entries.clone();
        entries.push(recipe);
        Self { entries }
    }

    /// Returns a set without the given id; a copy of this set when the id
    /// was never saved.
    pub fn without(&self, id: RecipeId) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|r| r.id != id)
                .cloned()
                .collect(),
        }
    }

    pub fn entries(&self) -> &[Recipe] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flags each recipe of a result list with whether it is saved here.
    pub fn annotate(&self, recipes: &[Recipe]) -> Vec<AnnotatedRecipe> {
        recipes
            .iter()
            .map(|recipe| AnnotatedRecipe {
                is_favorite: self.contains(recipe.id),
                recipe: recipe.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn recipe(id: u64) -> Recipe {
        Recipe::summary_record(RecipeId::new(id), format!("Dish {}", id))
    }

    #[test]
    fn should_add_a_recipe_once() {
        let set = FavoritesSet::empty().with_added(recipe(1));

        assert_eq!(set.len(), 1);
        assert!(set.contains(RecipeId::new(1)));
    }

    #[test]
    fn should_ignore_a_duplicate_add() {
        let set = FavoritesSet::empty().with_added(recipe(1));
        let again = set.with_added(recipe(1));

        assert_eq!(again, set);
        assert_eq!(again.len(), 1);
    }

    #[test]
    fn should_remove_a_saved_recipe() {
        let set = FavoritesSet::empty()
            .with_added(recipe(1))
            .with_added(recipe(2));

        let trimmed = set.without(RecipeId::new(1));
        assert_eq!(trimmed.len(), 1);
        assert!(!trimmed.contains(RecipeId::new(1)));
        assert!(trimmed.contains(RecipeId::new(2)));
    }

    #[test]
    fn should_treat_remove_of_absent_id_as_noop() {
        let set = FavoritesSet::empty().with_added(recipe(1));

        assert_eq!(set.without(RecipeId::new(99)), set);
    }

    #[test]
    fn should_preserve_insertion_order() {
        let set = FavoritesSet::empty()
            .with_added(recipe(3))
            .with_added(recipe(1))
            .with_added(recipe(2));

        let ids: Vec<u64> = set.entries().iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn should_drop_duplicate_ids_when_rebuilding_from_entries() {
        let set = FavoritesSet::from_entries(vec![recipe(1), recipe(2), recipe(1)]);

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn should_annotate_recipes_against_the_set() {
        let set = FavoritesSet::empty().with_added(recipe(1));
        let listed = [recipe(1), recipe(2)];

        let annotated = set.annotate(&listed);
        assert!(annotated[0].is_favorite);
        assert!(!annotated[1].is_favorite);
    }

    proptest! {
        #[test]
        fn add_is_idempotent(ids in proptest::collection::vec(0u64..50, 0..20), extra in 0u64..50) {
            let set = FavoritesSet::from_entries(ids.into_iter().map(recipe).collect());
            let once = set.with_added(recipe(extra));
            let twice = once.with_added(recipe(extra));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn remove_of_absent_id_changes_nothing(ids in proptest::collection::vec(0u64..50, 0..20)) {
            let set = FavoritesSet::from_entries(ids.into_iter().map(recipe).collect());
            // 100 is outside the generated id range
            prop_assert_eq!(set.without(RecipeId::new(100)), set);
        }
    }
}
