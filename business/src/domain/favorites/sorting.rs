use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::recipe::model::Recipe;

/// Sortable columns of the favorites table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    ReadyInMinutes,
    Servings,
    HealthScore,
    PricePerServing,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortKey::Title),
            "ready_in_minutes" => Ok(SortKey::ReadyInMinutes),
            "servings" => Ok(SortKey::Servings),
            "health_score" => Ok(SortKey::HealthScore),
            "price_per_serving" => Ok(SortKey::PricePerServing),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Returns a sorted copy of a favorites snapshot for display.
///
/// Missing numeric fields sort as zero and titles compare
/// case-insensitively, so partially-filled snapshots stay sortable.
pub fn sorted_by(recipes: &[Recipe], key: SortKey, direction: SortDirection) -> Vec<Recipe> {
    let mut sorted = recipes.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare(a: &Recipe, b: &Recipe, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::ReadyInMinutes => numeric(a.ready_in_minutes, b.ready_in_minutes),
        SortKey::Servings => numeric(a.servings, b.servings),
        SortKey::HealthScore => numeric(a.health_score, b.health_score),
        SortKey::PricePerServing => numeric(a.price_per_serving, b.price_per_serving),
    }
}

fn numeric(a: Option<u32>, b: Option<u32>) -> Ordering {
    a.unwrap_or(0).cmp(&b.unwrap_or(0))
}
