//! Report generation business logic.
//!
//! This module assembles the daily and weekly progress views: the day's intake
//! records are fetched once, aggregated into a headline goals-and-sums summary
//! across all meals, and broken down per meal with a qualitative band per
//! macro-nutrient. All functions return structured data that the API layer
//! serializes as-is.
//!
//! A day's headline ratio is always computed once over sums aggregated across
//! all meals; per-meal ratios exist only inside the per-meal breakdown.
//! Ratios are never summed across meals.

use crate::{
    core::{
        exchange::{self, ExchangeView, GoalBand, GoalsAndSumsView},
        intake,
    },
    errors::Result,
};
use chrono::{Duration, NaiveDate, Weekday};
use sea_orm::DatabaseConnection;
use serde::Serialize;

/// One logged food inside a per-meal breakdown, with its display-formatted
/// exchange.
#[derive(Debug, Clone, Serialize)]
pub struct FoodExchangeLine {
    /// Intake record id (for edits from the report view)
    pub record_id: i64,
    /// Consumed food id
    pub food_id: i64,
    /// Food name
    pub name: String,
    /// Amount consumed, in the food's unit
    pub amount_consumed: f64,
    /// Unit of the consumed amount
    pub unit: String,
    /// Macro contribution of this record, formatted for display
    pub exchanges: ExchangeView,
}

/// Progress of a single meal on a single day.
#[derive(Debug, Clone, Serialize)]
pub struct MealProgress {
    /// Meal id
    pub meal_id: i64,
    /// Meal name
    pub meal_name: String,
    /// Goals-and-sums aggregated over this meal alone
    pub summary: GoalsAndSumsView,
    /// Band classification of the carbohydrate ratio
    pub carbs_band: GoalBand,
    /// Band classification of the protein ratio
    pub proteins_band: GoalBand,
    /// Band classification of the fat ratio
    pub fats_band: GoalBand,
    /// The foods logged against this meal, with display exchanges
    pub foods: Vec<FoodExchangeLine>,
}

/// Complete progress report for one calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    /// The day the report covers
    pub date: NaiveDate,
    /// Goals-and-sums aggregated across all meals of the day
    pub summary: GoalsAndSumsView,
    /// Per-meal breakdown
    pub meals: Vec<MealProgress>,
}

/// Returns the seven days of the week containing `reference`, starting on
/// Sunday.
// Offset is 0..7, far from any overflow
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn week_dates(reference: NaiveDate) -> [NaiveDate; 7] {
    let first = reference.week(Weekday::Sun).first_day();
    std::array::from_fn(|offset| first + Duration::days(offset as i64))
}

/// Generates the progress report for one day.
///
/// Every active meal appears in the breakdown, with or without logged foods,
/// so goals are always visible. The headline summary aggregates all meals in
/// one pass.
pub async fn daily_report(
    db: &DatabaseConnection,
    user_id: i64,
    day: NaiveDate,
) -> Result<DailyReport> {
    let records = intake::intake_for_day(db, user_id, day).await?;

    let summary = exchange::generate_goals_and_sums(&records).to_view();

    let meals = records
        .iter()
        .map(|record| {
            let per_meal = exchange::generate_goals_and_sums(std::slice::from_ref(record));

            let foods = record
                .foods
                .iter()
                .map(|food| FoodExchangeLine {
                    record_id: food.record_id,
                    food_id: food.food_id,
                    name: food.name.clone(),
                    amount_consumed: food.amount_consumed,
                    unit: food.unit.clone(),
                    exchanges: exchange::normalise_exchanges(food),
                })
                .collect();

            MealProgress {
                meal_id: record.meal_id,
                meal_name: record.meal_name.clone(),
                carbs_band: GoalBand::from_ratio(per_meal.carbs.ratio()),
                proteins_band: GoalBand::from_ratio(per_meal.proteins.ratio()),
                fats_band: GoalBand::from_ratio(per_meal.fats.ratio()),
                summary: per_meal.to_view(),
                foods,
            }
        })
        .collect();

    Ok(DailyReport {
        date: day,
        summary,
        meals,
    })
}

/// Generates the seven daily reports for the week containing `reference`.
pub async fn weekly_report(
    db: &DatabaseConnection,
    user_id: i64,
    reference: NaiveDate,
) -> Result<Vec<DailyReport>> {
    let mut reports = Vec::with_capacity(7);

    for day in week_dates(reference) {
        reports.push(daily_report(db, user_id, day).await?);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_week_dates_starts_on_sunday() {
        // 2024-03-06 is a Wednesday; its week starts Sunday 2024-03-03
        let week = week_dates(date(2024, 3, 6));

        assert_eq!(week[0], date(2024, 3, 3));
        assert_eq!(week[6], date(2024, 3, 9));
        for pair in week.windows(2) {
            assert_eq!(pair[1], pair[0] + Duration::days(1));
        }
    }

    #[test]
    fn test_week_dates_sunday_reference_is_first_day() {
        let week = week_dates(date(2024, 3, 3));
        assert_eq!(week[0], date(2024, 3, 3));
    }

    #[tokio::test]
    async fn test_daily_report_integration() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let breakfast = create_test_meal(&db, user.id, "Breakfast").await?;
        create_test_meal(&db, user.id, "Lunch").await?;
        let oats = create_test_food(&db, user.id, "Oats").await?;

        let day = date(2024, 3, 4);
        // Oats: base 100 g, carbs 0.6; consuming 50 g contributes 0.3 g carbs
        create_test_intake(&db, user.id, breakfast.id, oats.id, day, 50.0).await?;

        let report = daily_report(&db, user.id, day).await?;

        assert_eq!(report.date, day);
        // Goals summed across both meals: 50 + 50 carbs
        assert_eq!(report.summary.carbs_totals, "100.0");
        assert_eq!(report.summary.carbs_sum, "0.3");
        assert_eq!(report.summary.carbs_ratio, 0);

        assert_eq!(report.meals.len(), 2);
        let breakfast_progress = &report.meals[0];
        assert_eq!(breakfast_progress.meal_name, "Breakfast");
        assert_eq!(breakfast_progress.foods.len(), 1);
        assert_eq!(breakfast_progress.foods[0].exchanges.carbs, "0.3");
        // Per-meal ratio is round(0.3 / 50 * 100) = 1, the far-under band
        assert_eq!(breakfast_progress.summary.carbs_ratio, 1);
        assert_eq!(breakfast_progress.carbs_band, GoalBand::FarUnderTarget);

        let lunch_progress = &report.meals[1];
        assert!(lunch_progress.foods.is_empty());
        assert_eq!(lunch_progress.summary.carbs_sum, "0.0");

        Ok(())
    }

    #[tokio::test]
    async fn test_daily_report_band_classification() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        // Goal of 60 g carbs; the test food carries 0.6 carbs per base 100 g
        let meal = create_custom_meal(&db, user.id, "Dinner", 60.0, 30.0, 20.0).await?;
        let food = create_test_food(&db, user.id, "Rice").await?;

        let day = date(2024, 3, 4);
        // Consuming 8000 g yields 48 g carbs, which is 80% of the 60 g goal
        create_test_intake(&db, user.id, meal.id, food.id, day, 8000.0).await?;

        let report = daily_report(&db, user.id, day).await?;
        let progress = &report.meals[0];

        assert_eq!(progress.summary.carbs_ratio, 80);
        assert_eq!(progress.carbs_band, GoalBand::OnTarget);

        Ok(())
    }

    #[tokio::test]
    async fn test_weekly_report_covers_whole_week() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let meal = create_test_meal(&db, user.id, "Breakfast").await?;
        let food = create_test_food(&db, user.id, "Oats").await?;

        // Wednesday; the containing week is Sunday 3rd to Saturday 9th
        let wednesday = date(2024, 3, 6);
        create_test_intake(&db, user.id, meal.id, food.id, wednesday, 100.0).await?;

        let reports = weekly_report(&db, user.id, wednesday).await?;

        assert_eq!(reports.len(), 7);
        assert_eq!(reports[0].date, date(2024, 3, 3));
        assert_eq!(reports[6].date, date(2024, 3, 9));

        // Only Wednesday has consumption
        for report in &reports {
            let expected = if report.date == wednesday { "0.6" } else { "0.0" };
            assert_eq!(report.summary.carbs_sum, expected);
        }

        Ok(())
    }
}
