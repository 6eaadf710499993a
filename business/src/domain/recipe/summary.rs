use super::model::Recipe;

/// Aggregate view over a result list, for the dashboard's stats row.
///
/// Each average is taken over the recipes that actually carry the field;
/// recipes missing it are skipped rather than counted as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub total_recipes: usize,
    pub avg_health_score: Option<u32>,
    pub avg_ready_minutes: Option<u32>,
    pub avg_price_cents: Option<u32>,
}

impl ResultSummary {
    /// Computes the summary. Returns `None` for an empty list; the
    /// dashboard hides the stats row entirely in that case.
    pub fn from_recipes(recipes: &[Recipe]) -> Option<Self> {
        if recipes.is_empty() {
            return None;
        }

        Some(Self {
            total_recipes: recipes.len(),
            avg_health_score: average(recipes.iter().filter_map(|r| r.health_score)),
            avg_ready_minutes: average(recipes.iter().filter_map(|r| r.ready_in_minutes)),
            avg_price_cents: average(recipes.iter().filter_map(|r| r.price_per_serving)),
        })
    }
}

fn average(values: impl Iterator<Item = u32>) -> Option<u32> {
    let (sum, count) = values.fold((0u64, 0u64), |(s, c), v| (s + u64::from(v), c + 1));
    if count == 0 {
        None
    } else {
        Some(((sum as f64 / count as f64).round()) as u32)
    }
}
