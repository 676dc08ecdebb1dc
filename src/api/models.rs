use serde::{Deserialize, Serialize};

/// Body of the outbound call to the recipe backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub answer: String,
    pub details: RecipeDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
    pub prep_time: String,
}

impl RecipeDetails {
    pub fn ingredients_line(&self) -> String {
        self.ingredients.join(", ")
    }

    pub fn instructions_line(&self) -> String {
        self.instructions.join(", ")
    }

    pub fn tips_line(&self) -> String {
        self.tips.join(", ")
    }
}

/// Urlencoded body posted by the page's form.
#[derive(Debug, Default, Deserialize)]
pub struct QueryInput {
    #[serde(default)]
    pub query: String,
}

/// Read-only copy of the form controller state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub query: String,
    pub in_flight: bool,
    pub response: Option<RecipeResponse>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
