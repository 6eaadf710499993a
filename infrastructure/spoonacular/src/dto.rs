use serde::Deserialize;

use business::domain::recipe::model::{
    Ingredient, InstructionGroup, InstructionStep, Nutrient, Nutrition, Recipe,
};
use business::domain::shared::value_objects::RecipeId;

/// Envelope of the paginated search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponseDto {
    #[serde(default)]
    pub results: Vec<RecipeDto>,
    pub total_results: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub number: u32,
}

/// A recipe record as the API delivers it, summary or detail. The API
/// omits fields freely, so everything beyond id and title is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub id: u64,
    pub title: String,
    pub image: Option<String>,
    pub summary: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub health_score: Option<f64>,
    /// The API reports fractional cents; the domain keeps whole cents.
    pub price_per_serving: Option<f64>,
    #[serde(default)]
    pub extended_ingredients: Vec<IngredientDto>,
    #[serde(default)]
    pub analyzed_instructions: Vec<InstructionGroupDto>,
    pub nutrition: Option<NutritionDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    pub original: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionGroupDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<StepDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDto {
    pub number: u32,
    pub step: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionDto {
    #[serde(default)]
    pub nutrients: Vec<NutrientDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

impl RecipeDto {
    pub fn into_domain(self) -> Recipe {
        Recipe {
            id: RecipeId::new(self.id),
            title: self.title,
            image: self.image,
            summary: self.summary,
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
            health_score: self.health_score.map(|score| score.round() as u32),
            price_per_serving: self.price_per_serving.map(|cents| cents.round() as u32),
            extended_ingredients: self
                .extended_ingredients
                .into_iter()
                .map(IngredientDto::into_domain)
                .collect(),
            analyzed_instructions: self
                .analyzed_instructions
                .into_iter()
                .map(InstructionGroupDto::into_domain)
                .collect(),
            nutrition: self.nutrition.map(NutritionDto::into_domain),
        }
    }
}

impl IngredientDto {
    pub fn into_domain(self) -> Ingredient {
        Ingredient {
            name: self.name,
            amount: self.amount,
            unit: self.unit,
            original: self.original,
        }
    }
}

impl InstructionGroupDto {
    pub fn into_domain(self) -> InstructionGroup {
        InstructionGroup {
            name: self.name,
            steps: self
                .steps
                .into_iter()
                .map(|s| InstructionStep {
                    number: s.number,
                    step: s.step,
                })
                .collect(),
        }
    }
}

impl NutritionDto {
    pub fn into_domain(self) -> Nutrition {
        Nutrition {
            nutrients: self
                .nutrients
                .into_iter()
                .map(|n| Nutrient {
                    name: n.name,
                    amount: n.amount,
                    unit: n.unit,
                })
                .collect(),
        }
    }
}
