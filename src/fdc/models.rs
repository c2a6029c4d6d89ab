//! Food Data Central wire types.
//!
//! Only the fields the service reads are modelled; everything else in the
//! upstream payloads is ignored.

use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, SearchResponse};

/// Body of `POST /search`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FdcSearchRequest {
    pub general_search_input: String,
    /// Restrict results to foods containing every word of the input
    pub require_all_words: bool,
    pub page_number: u32,
}

impl FdcSearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            general_search_input: query.into(),
            require_all_words: false,
            page_number: 1,
        }
    }
}

/// Result of `POST /search`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FdcSearchResponse {
    pub total_hits: u64,
    pub current_page: u32,
    pub total_pages: u32,
    pub foods: Vec<FdcFood>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FdcFood {
    pub fdc_id: u64,
    pub description: String,
    pub brand_owner: Option<String>,
}

/// Result of `GET /{fdcId}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FdcDetails {
    pub fdc_id: u64,
    pub description: String,
    pub food_class: Option<String>,
    pub food_nutrients: Vec<FoodNutrient>,
    pub food_portions: Vec<FoodPortion>,
    /// Branded foods report a single serving instead of portions
    pub serving_size: Option<f64>,
    pub serving_size_unit: Option<String>,
    pub household_serving_full_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodNutrient {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: u64,
    pub nutrient: Nutrient,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Nutrient {
    pub id: u64,
    pub number: Option<String>,
    pub name: String,
    pub rank: Option<u32>,
    pub unit_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodPortion {
    pub id: u64,
    pub modifier: Option<String>,
    pub gram_weight: f64,
    pub portion_description: Option<String>,
    /// Starts at 1
    pub sequence_number: Option<u32>,
}

impl FoodPortion {
    /// Best available human description of the portion.
    pub fn label(&self) -> String {
        [&self.portion_description, &self.modifier]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string()
    }
}

/// Error body Food Data Central returns alongside non-2xx statuses
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FdcErrorBody {
    pub error: String,
    pub message: String,
    pub path: String,
}

impl From<FdcFood> for FoodItem {
    fn from(food: FdcFood) -> Self {
        Self {
            fdc_id: food.fdc_id,
            description: food.description,
            brand_owner: food.brand_owner.unwrap_or_default(),
        }
    }
}

impl From<FdcSearchResponse> for SearchResponse {
    fn from(response: FdcSearchResponse) -> Self {
        Self {
            foods: response.foods.into_iter().map(FoodItem::from).collect(),
        }
    }
}
