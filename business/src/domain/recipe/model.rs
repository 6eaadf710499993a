use crate::domain::shared::value_objects::RecipeId;

/// A single ingredient line of a recipe, as delivered by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    /// The unparsed ingredient line, e.g. "2 cups of flour".
    pub original: Option<String>,
}

/// One numbered step inside an instruction group.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionStep {
    pub number: u32,
    pub step: String,
}

/// A named group of instruction steps. Most recipes carry a single
/// unnamed group; some split into sub-recipes ("For the sauce", ...).
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionGroup {
    pub name: String,
    pub steps: Vec<InstructionStep>,
}

/// A single nutrient record (name, amount, unit).
#[derive(Debug, Clone, PartialEq)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// Nutrition block of a recipe detail.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Nutrition {
    pub nutrients: Vec<Nutrient>,
}

/// A dish record sourced from the external recipe catalog.
///
/// Search summaries arrive with most optional fields absent; the detail
/// endpoint fills them in. The core never mutates a recipe's own fields,
/// it only produces enriched copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub image: Option<String>,
    /// HTML fragment describing the dish.
    pub summary: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    /// Catalog health score, 0 to 100.
    pub health_score: Option<u32>,
    /// Price per serving in integer cents.
    pub price_per_serving: Option<u32>,
    pub extended_ingredients: Vec<Ingredient>,
    pub analyzed_instructions: Vec<InstructionGroup>,
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    /// Minimal constructor for a summary record that only carries an id
    /// and a title. Every other field starts absent.
    pub fn summary_record(id: RecipeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: None,
            summary: None,
            ready_in_minutes: None,
            servings: None,
            health_score: None,
            price_per_serving: None,
            extended_ingredients: Vec::new(),
            analyzed_instructions: Vec::new(),
            nutrition: None,
        }
    }

    /// Merges a detail record over this summary record.
    ///
    /// Fields present on the detail win; fields the detail omits keep the
    /// summary's value. Never replaces a present value with an absent one.
    pub fn merged_with(self, detail: Recipe) -> Recipe {
        Recipe {
            id: self.id,
            title: if detail.title.trim().is_empty() {
                self.title
            } else {
                detail.title
            },
            image: detail.image.or(self.image),
            summary: detail.summary.or(self.summary),
            ready_in_minutes: detail.ready_in_minutes.or(self.ready_in_minutes),
            servings: detail.servings.or(self.servings),
            health_score: detail.health_score.or(self.health_score),
            price_per_serving: detail.price_per_serving.or(self.price_per_serving),
            extended_ingredients: if detail.extended_ingredients.is_empty() {
                self.extended_ingredients
            } else {
                detail.extended_ingredients
            },
            analyzed_instructions: if detail.analyzed_instructions.is_empty() {
                self.analyzed_instructions
            } else {
                detail.analyzed_instructions
            },
            nutrition: detail.nutrition.or(self.nutrition),
        }
    }

    /// Synthesizes a placeholder summary from the title when the catalog
    /// delivered none. A present summary is left untouched.
    pub fn with_placeholder_summary(mut self) -> Recipe {
        if self.summary.is_none() {
            self.summary = Some(format!("Delicious {} recipe", self.title));
        }
        self
    }
}
