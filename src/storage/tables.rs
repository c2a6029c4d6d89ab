//! Lookup tables shared by the storage backends.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{DetailsResponse, FoodItem};

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Tables {
    /// fdc_id -> food
    #[serde(default)]
    foods: HashMap<u64, FoodItem>,
    /// search input -> fdc_ids in result order
    #[serde(default)]
    searches: HashMap<String, Vec<u64>>,
    #[serde(default)]
    details: HashMap<u64, DetailsResponse>,
}

impl Tables {
    /// Foods saved under any search input containing `term`, first seen wins.
    pub(crate) fn search(&self, term: &str) -> Option<Vec<FoodItem>> {
        let needle = term.trim().to_lowercase();

        let mut inputs: Vec<&String> = self
            .searches
            .keys()
            .filter(|input| input.contains(&needle))
            .collect();
        inputs.sort();

        let mut seen = HashSet::new();
        let foods: Vec<FoodItem> = inputs
            .into_iter()
            .flat_map(|input| &self.searches[input])
            .filter(|id| seen.insert(**id))
            .filter_map(|id| self.foods.get(id).cloned())
            .collect();

        (!foods.is_empty()).then_some(foods)
    }

    pub(crate) fn save_search(&mut self, term: &str, foods: &[FoodItem]) {
        for food in foods {
            self.foods.entry(food.fdc_id).or_insert_with(|| food.clone());
        }
        self.searches.insert(
            term.trim().to_lowercase(),
            foods.iter().map(|f| f.fdc_id).collect(),
        );
    }

    pub(crate) fn details(&self, fdc_id: u64) -> Option<DetailsResponse> {
        self.details.get(&fdc_id).cloned()
    }

    pub(crate) fn save_details(&mut self, fdc_id: u64, details: &DetailsResponse) {
        self.details.insert(fdc_id, details.clone());
    }
}
