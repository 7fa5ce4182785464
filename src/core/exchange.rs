//! Nutrient aggregation - exchanges, goals-and-sums, and ratio bands.
//!
//! This module is the single home of the arithmetic shared by the daily and
//! weekly views. All functions are pure and total: they never fail, and a
//! division that would produce NaN or Infinity collapses to 0 instead of
//! leaking into a displayed value. Summation keeps full `f64` precision;
//! rounding and one-decimal formatting exist only in the display views so
//! rounding error never compounds across records.

use crate::core::intake::{FoodIntake, IntakeRecord};
use serde::Serialize;

/// Macro-nutrient quantities contributed by a single intake record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Exchange {
    /// Grams of carbohydrates consumed
    pub carbs: f64,
    /// Grams of proteins consumed
    pub proteins: f64,
    /// Grams of fats consumed
    pub fats: f64,
}

/// Display form of an [`Exchange`], each macro formatted to one decimal place.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExchangeView {
    /// Carbohydrates, one-decimal string
    pub carbs: String,
    /// Proteins, one-decimal string
    pub proteins: String,
    /// Fats, one-decimal string
    pub fats: String,
}

/// Computes the macro-nutrients contributed by one intake record.
///
/// The consumption ratio is `amount_consumed / base_amount`; each macro
/// contribution scales the food's fraction by that ratio. A food with a zero
/// base amount (or any other non-finite ratio) contributes nothing, so the
/// sums downstream stay finite.
#[must_use]
pub fn calculate_exchanges(food: &FoodIntake) -> Exchange {
    let consumption_ratio = food.amount_consumed / food.base_amount;

    if !consumption_ratio.is_finite() {
        return Exchange::default();
    }

    Exchange {
        carbs: food.carbs * consumption_ratio,
        proteins: food.proteins * consumption_ratio,
        fats: food.fats * consumption_ratio,
    }
}

/// Computes the exchange for one intake record and formats it for display.
#[must_use]
pub fn normalise_exchanges(food: &FoodIntake) -> ExchangeView {
    let exchange = calculate_exchanges(food);
    ExchangeView {
        carbs: format!("{:.1}", exchange.carbs),
        proteins: format!("{:.1}", exchange.proteins),
        fats: format!("{:.1}", exchange.fats),
    }
}

/// Summed goal and summed consumption for one macro-nutrient.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroSummary {
    /// Summed goal across the aggregated meals, in grams
    pub total: f64,
    /// Summed consumption across the aggregated records, in grams
    pub sum: f64,
}

impl MacroSummary {
    /// Percentage of the goal achieved, rounded to an integer.
    ///
    /// Returns 0 when the division is not finite (no goals aggregated), so an
    /// empty day reads as 0% rather than NaN.
    // Cast safety: a finite percentage of realistic gram quantities is far
    // inside i64 range; truncation after round is intentional.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn ratio(&self) -> i64 {
        let ratio = (self.sum / self.total) * 100.0;

        if ratio.is_finite() {
            ratio.round() as i64
        } else {
            0
        }
    }
}

/// Goals, sums, and ratios for all three macro-nutrients.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GoalsAndSums {
    /// Carbohydrate summary
    pub carbs: MacroSummary,
    /// Protein summary
    pub proteins: MacroSummary,
    /// Fat summary
    pub fats: MacroSummary,
}

/// Display form of [`GoalsAndSums`]: totals and sums as one-decimal strings,
/// ratios as integer percentages.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GoalsAndSumsView {
    /// Summed carbohydrate goal, one-decimal string
    pub carbs_totals: String,
    /// Summed carbohydrate consumption, one-decimal string
    pub carbs_sum: String,
    /// Carbohydrate percent of goal
    pub carbs_ratio: i64,
    /// Summed protein goal, one-decimal string
    pub proteins_totals: String,
    /// Summed protein consumption, one-decimal string
    pub proteins_sum: String,
    /// Protein percent of goal
    pub proteins_ratio: i64,
    /// Summed fat goal, one-decimal string
    pub fats_totals: String,
    /// Summed fat consumption, one-decimal string
    pub fats_sum: String,
    /// Fat percent of goal
    pub fats_ratio: i64,
}

impl GoalsAndSums {
    /// Formats totals and sums to one decimal place and fixes the ratios.
    #[must_use]
    pub fn to_view(&self) -> GoalsAndSumsView {
        GoalsAndSumsView {
            carbs_totals: format!("{:.1}", self.carbs.total),
            carbs_sum: format!("{:.1}", self.carbs.sum),
            carbs_ratio: self.carbs.ratio(),
            proteins_totals: format!("{:.1}", self.proteins.total),
            proteins_sum: format!("{:.1}", self.proteins.sum),
            proteins_ratio: self.proteins.ratio(),
            fats_totals: format!("{:.1}", self.fats.total),
            fats_sum: format!("{:.1}", self.fats.sum),
            fats_ratio: self.fats.ratio(),
        }
    }
}

/// Aggregates goals and consumption across a set of per-meal intake records.
///
/// Goals are summed from the meals; consumption is summed from the exchange
/// of each logged food (never from raw food fractions, which describe the
/// reference amount rather than what was eaten). The caller chooses the
/// aggregation scope: pass one record for a per-meal summary, or a whole
/// day's records for a day summary.
#[must_use]
pub fn generate_goals_and_sums(records: &[IntakeRecord]) -> GoalsAndSums {
    let mut result = GoalsAndSums::default();

    for record in records {
        result.carbs.total += record.carbs_goal;
        result.proteins.total += record.proteins_goal;
        result.fats.total += record.fats_goal;

        for food in &record.foods {
            let exchange = calculate_exchanges(food);
            result.carbs.sum += exchange.carbs;
            result.proteins.sum += exchange.proteins;
            result.fats.sum += exchange.fats;
        }
    }

    result
}

/// Qualitative classification of a goal ratio, used for visual coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalBand {
    /// More than 120% of the goal
    OverTarget,
    /// 80% to 100% of the goal
    OnTarget,
    /// 30% to 79% of the goal
    UnderTarget,
    /// 1% to 29% of the goal
    FarUnderTarget,
    /// 0%, negatives, and the 101% to 120% gap
    Neutral,
}

impl GoalBand {
    /// Classifies an integer goal ratio.
    ///
    /// Boundaries are inclusive exactly as listed on the variants; a ratio of
    /// exactly 80 is on-target and exactly 120 is neutral.
    #[must_use]
    pub const fn from_ratio(ratio: i64) -> Self {
        if ratio > 120 {
            Self::OverTarget
        } else if ratio >= 80 && ratio <= 100 {
            Self::OnTarget
        } else if ratio >= 30 && ratio <= 79 {
            Self::UnderTarget
        } else if ratio >= 1 && ratio <= 29 {
            Self::FarUnderTarget
        } else {
            Self::Neutral
        }
    }
}
