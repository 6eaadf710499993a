use serde::{Deserialize, Serialize};

use business::domain::recipe::model::{
    Ingredient, InstructionGroup, InstructionStep, Nutrient, Nutrition, Recipe,
};
use business::domain::shared::value_objects::RecipeId;

/// Stored favorite snapshot. Serialized in the catalog API's camelCase
/// shape, so documents written by earlier browser builds keep loading.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecipeEntity {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_serving: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extended_ingredients: Vec<IngredientEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analyzed_instructions: Vec<InstructionGroupEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionEntity>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientEntity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionGroupEntity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<InstructionStepEntity>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionStepEntity {
    pub number: u32,
    pub step: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEntity {
    #[serde(default)]
    pub nutrients: Vec<NutrientEntity>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientEntity {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl FavoriteRecipeEntity {
    pub fn from_domain(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.value(),
            title: recipe.title.clone(),
            image: recipe.image.clone(),
            summary: recipe.summary.clone(),
            ready_in_minutes: recipe.ready_in_minutes,
            servings: recipe.servings,
            health_score: recipe.health_score,
            price_per_serving: recipe.price_per_serving,
            extended_ingredients: recipe
                .extended_ingredients
                .iter()
                .map(|i| IngredientEntity {
                    name: i.name.clone(),
                    amount: i.amount,
                    unit: i.unit.clone(),
                    original: i.original.clone(),
                })
                .collect(),
            analyzed_instructions: recipe
                .analyzed_instructions
                .iter()
                .map(|g| InstructionGroupEntity {
                    name: g.name.clone(),
                    steps: g
                        .steps
                        .iter()
                        .map(|s| InstructionStepEntity {
                            number: s.number,
                            step: s.step.clone(),
                        })
                        .collect(),
                })
                .collect(),
            nutrition: recipe.nutrition.as_ref().map(|n| NutritionEntity {
                nutrients: n
                    .nutrients
                    .iter()
                    .map(|nutrient| NutrientEntity {
                        name: nutrient.name.clone(),
                        amount: nutrient.amount,
                        unit: nutrient.unit.clone(),
                    })
                    .collect(),
            }),
        }
    }

    pub fn into_domain(self) -> Recipe {
        Recipe {
            id: RecipeId::new(self.id),
            title: self.title,
            image: self.image,
            summary: self.summary,
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
            health_score: self.health_score,
            price_per_serving: self.price_per_serving,
            extended_ingredients: self
                .extended_ingredients
                .into_iter()
                .map(|i| Ingredient {
                    name: i.name,
                    amount: i.amount,
                    unit: i.unit,
                    original: i.original,
                })
                .collect(),
            analyzed_instructions: self
                .analyzed_instructions
                .into_iter()
                .map(|g| InstructionGroup {
                    name: g.name,
                    steps: g
                        .steps
                        .into_iter()
                        .map(|s| InstructionStep {
                            number: s.number,
                            step: s.step,
                        })
                        .collect(),
                })
                .collect(),
            nutrition: self.nutrition.map(|n| Nutrition {
                nutrients: n
                    .nutrients
                    .into_iter()
                    .map(|nutrient| Nutrient {
                        name: nutrient.name,
                        amount: nutrient.amount,
                        unit: nutrient.unit,
                    })
                    .collect(),
            }),
        }
    }
}
