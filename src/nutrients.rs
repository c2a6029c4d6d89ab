//! Nutrient extraction from Food Data Central records.

use crate::fdc::{FdcDetails, FoodNutrient};
use crate::models::{Carbohydrates, DetailsResponse, Portion};

const CARBOHYDRATES: &str = "carbohydrates";
const CARBOHYDRATES_BY_DIFFERENCE: &str = "carbohydrate, by difference";
const DEFAULT_UNIT: &str = "g";

/// Picks the carbohydrate amount from a nutrient list.
///
/// Foods may report plain "Carbohydrates", "Carbohydrate, by difference" or
/// both; the larger of the two wins. Missing values count as zero.
pub fn carbohydrates(nutrients: &[FoodNutrient]) -> Carbohydrates {
    let find = |name: &str| {
        nutrients
            .iter()
            .find(|n| n.nutrient.name.trim().eq_ignore_ascii_case(name))
    };

    let candidates = [find(CARBOHYDRATES), find(CARBOHYDRATES_BY_DIFFERENCE)];
    let best = candidates
        .into_iter()
        .flatten()
        .max_by(|a, b| amount(a).total_cmp(&amount(b)));

    match best {
        Some(nutrient) => Carbohydrates {
            amount: amount(nutrient),
            unit_name: unit(nutrient),
        },
        None => Carbohydrates {
            amount: 0.0,
            unit_name: DEFAULT_UNIT.to_string(),
        },
    }
}

fn amount(nutrient: &FoodNutrient) -> f64 {
    nutrient.amount.unwrap_or(0.0)
}

fn unit(nutrient: &FoodNutrient) -> String {
    let unit = nutrient.nutrient.unit_name.trim();
    if unit.is_empty() {
        DEFAULT_UNIT.to_string()
    } else {
        unit.to_lowercase()
    }
}

/// Portions in sequence order; branded foods fall back to their serving size.
pub fn portions(details: &FdcDetails) -> Vec<Portion> {
    let mut sorted: Vec<_> = details.food_portions.iter().collect();
    sorted.sort_by_key(|p| p.sequence_number.unwrap_or(u32::MAX));

    let mut portions: Vec<Portion> = sorted
        .into_iter()
        .map(|p| Portion {
            gram_weight: p.gram_weight,
            description: p.label(),
        })
        .collect();

    if portions.is_empty() {
        if let Some(size) = details.serving_size {
            let description = details
                .household_serving_full_text
                .clone()
                .or_else(|| {
                    details
                        .serving_size_unit
                        .as_ref()
                        .map(|unit| format!("{size} {unit}"))
                })
                .unwrap_or_default();
            portions.push(Portion {
                gram_weight: size,
                description,
            });
        }
    }

    portions
}

impl From<FdcDetails> for DetailsResponse {
    fn from(details: FdcDetails) -> Self {
        Self {
            carbohydrates: carbohydrates(&details.food_nutrients),
            portions: portions(&details),
            description: details.description,
        }
    }
}
