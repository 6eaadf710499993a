use serde::{Deserialize, Serialize};

use super::model::Recipe;

/// Minimum query length the UI enforces before triggering a search.
/// The search use case itself only rejects blank input.
pub const MIN_QUERY_LEN: usize = 2;

/// Servings filter applied in-process after the remote fetch; the catalog
/// has no native servings parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingsFilter {
    /// Matches servings within a tolerance band of one around the target.
    Around(u32),
    /// The "6+" option: matches any recipe serving six or more.
    SixPlus,
}

impl ServingsFilter {
    /// Maps a raw UI target to a filter. Six and above means "6+".
    pub fn from_target(target: u32) -> Self {
        if target >= 6 {
            ServingsFilter::SixPlus
        } else {
            ServingsFilter::Around(target)
        }
    }

    /// Whether a recipe's servings value passes this filter.
    /// A recipe with no servings value never passes.
    pub fn matches(&self, servings: Option<u32>) -> bool {
        let Some(servings) = servings else {
            return false;
        };
        match self {
            ServingsFilter::Around(target) => {
                servings >= target.saturating_sub(1) && servings <= target + 1
            }
            ServingsFilter::SixPlus => servings >= 6,
        }
    }
}

impl std::fmt::Display for ServingsFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServingsFilter::Around(target) => write!(f, "{}", target),
            ServingsFilter::SixPlus => write!(f, "6+"),
        }
    }
}

impl std::str::FromStr for ServingsFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "6+" {
            return Ok(ServingsFilter::SixPlus);
        }
        s.parse::<u32>()
            .map(ServingsFilter::from_target)
            .map_err(|_| format!("Invalid servings filter: {}", s))
    }
}

/// Search filters. Health score and price travel to the catalog as query
/// parameters; servings is applied client-side after the fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub servings: Option<ServingsFilter>,
    pub min_health_score: Option<u32>,
    /// Maximum price per serving in integer cents, the catalog's convention.
    pub max_price_cents: Option<u32>,
}

impl FilterCriteria {
    /// Filters with no dimension active.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the price ceiling from a whole-dollar UI value.
    pub fn with_max_price_dollars(mut self, dollars: u32) -> Self {
        self.max_price_cents = Some(dollars * 100);
        self
    }

    /// Applies the servings dimension to a fetched batch. The other
    /// dimensions were already honored by the catalog.
    pub fn filter_by_servings(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        match self.servings {
            Some(filter) => recipes
                .into_iter()
                .filter(|r| filter.matches(r.servings))
                .collect(),
            None => recipes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::RecipeId;
    use proptest::prelude::*;

    fn recipe_with_servings(id: u64, servings: Option<u32>) -> Recipe {
        Recipe {
            servings,
            ..Recipe::summary_record(RecipeId::new(id), "Test Dish")
        }
    }

    #[test]
    fn should_pass_servings_inside_tolerance_band() {
        let filter = ServingsFilter::Around(4);

        assert!(filter.matches(Some(3)));
        assert!(filter.matches(Some(4)));
        assert!(filter.matches(Some(5)));
    }

    #[test]
    fn should_fail_servings_outside_tolerance_band() {
        let filter = ServingsFilter::Around(4);

        assert!(!filter.matches(Some(2)));
        assert!(!filter.matches(Some(6)));
    }

    #[test]
    fn should_fail_missing_servings_when_filter_active() {
        assert!(!ServingsFilter::Around(2).matches(None));
        assert!(!ServingsFilter::SixPlus.matches(None));
    }

    #[test]
    fn should_pass_six_or_more_for_six_plus() {
        assert!(ServingsFilter::SixPlus.matches(Some(6)));
        assert!(ServingsFilter::SixPlus.matches(Some(7)));
        assert!(ServingsFilter::SixPlus.matches(Some(100)));
        assert!(!ServingsFilter::SixPlus.matches(Some(5)));
    }

    #[test]
    fn should_map_target_six_to_six_plus() {
        assert_eq!(ServingsFilter::from_target(6), ServingsFilter::SixPlus);
        assert_eq!(ServingsFilter::from_target(2), ServingsFilter::Around(2));
    }

    #[test]
    fn should_parse_servings_filter_from_ui_value() {
        assert_eq!("6+".parse::<ServingsFilter>(), Ok(ServingsFilter::SixPlus));
        assert_eq!(
            "4".parse::<ServingsFilter>(),
            Ok(ServingsFilter::Around(4))
        );
        assert!("soup".parse::<ServingsFilter>().is_err());
    }

    #[test]
    fn should_band_match_zero_when_target_is_one() {
        // saturating lower bound; servings of 0 occur in malformed
        // catalog data
        assert!(ServingsFilter::Around(1).matches(Some(0)));
    }

    #[test]
    fn should_convert_dollars_to_cents() {
        let filters = FilterCriteria::none().with_max_price_dollars(5);
        assert_eq!(filters.max_price_cents, Some(500));
    }

    #[test]
    fn should_keep_all_recipes_when_no_servings_filter() {
        let filters = FilterCriteria::none();
        let batch = vec![
            recipe_with_servings(1, Some(2)),
            recipe_with_servings(2, None),
        ];

        assert_eq!(filters.filter_by_servings(batch).len(), 2);
    }

    #[test]
    fn should_drop_non_matching_recipes() {
        let filters = FilterCriteria {
            servings: Some(ServingsFilter::Around(4)),
            ..FilterCriteria::none()
        };
        let batch = vec![
            recipe_with_servings(1, Some(4)),
            recipe_with_servings(2, Some(8)),
            recipe_with_servings(3, None),
        ];

        let kept = filters.filter_by_servings(batch);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, RecipeId::new(1));
    }

    #[test]
    fn should_round_trip_filters_through_serde() {
        let filters = FilterCriteria {
            servings: Some(ServingsFilter::SixPlus),
            min_health_score: Some(50),
            max_price_cents: Some(200),
        };

        let json = serde_json::to_string(&filters).unwrap();
        let back: FilterCriteria = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filters);
    }

    proptest! {
        #[test]
        fn band_matches_exactly_target_plus_minus_one(target in 1u32..6, servings in 0u32..20) {
            let filter = ServingsFilter::Around(target);
            let expected = servings + 1 >= target && servings <= target + 1;
            prop_assert_eq!(filter.matches(Some(servings)), expected);
        }

        #[test]
        fn six_plus_matches_exactly_six_and_above(servings in 0u32..200) {
            prop_assert_eq!(ServingsFilter::SixPlus.matches(Some(servings)), servings >= 6);
        }
    }
}
