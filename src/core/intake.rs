//! Intake business logic - Daily logging of foods against meals.
//!
//! The day view returns every active meal together with the foods logged
//! against it for one calendar day, in the shape the aggregation helpers
//! consume (meal goals plus matched food intakes). Mutations validate that the
//! referenced meal and food exist, belong to the user, and are active.
//! Duplicating a day runs inside a database transaction so the target day is
//! never left half-copied.

use crate::{
    core::{food as food_logic, meal as meal_logic},
    entities::{Food, MealIntake, meal_intake},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};

/// One food as consumed in an intake record, carrying both the display fields
/// and the quantities the exchange calculator needs.
#[derive(Debug, Clone, Serialize)]
pub struct FoodIntake {
    /// Id of the intake record itself (for edits and removals)
    pub record_id: i64,
    /// Id of the consumed food
    pub food_id: i64,
    /// Food name
    pub name: String,
    /// Food description
    pub description: String,
    /// Food notes
    pub notes: String,
    /// The food's reference base amount
    pub base_amount: f64,
    /// Amount actually consumed, in the food's unit
    pub amount_consumed: f64,
    /// Unit of both amounts
    pub unit: String,
    /// Price of the base amount
    pub price: f64,
    /// Carbohydrate fraction of the base amount
    pub carbs: f64,
    /// Protein fraction of the base amount
    pub proteins: f64,
    /// Fat fraction of the base amount
    pub fats: f64,
}

/// One meal's slice of a day: its goals plus the foods logged against it.
///
/// This is the single shape the goals-and-sums aggregator accepts, so meal
/// goals and matched records can never drift apart.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeRecord {
    /// Meal id
    pub meal_id: i64,
    /// Meal name
    pub meal_name: String,
    /// Target grams of carbohydrates for this meal
    pub carbs_goal: f64,
    /// Target grams of proteins for this meal
    pub proteins_goal: f64,
    /// Target grams of fats for this meal
    pub fats_goal: f64,
    /// Foods logged against this meal on the requested day
    pub foods: Vec<FoodIntake>,
}

/// Attributes accepted when logging an intake.
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeInput {
    /// Meal the food was eaten at
    pub meal_id: i64,
    /// Day the intake applies to
    pub for_date: NaiveDate,
    /// The consumed food
    pub food_id: i64,
    /// Amount consumed, in the food's unit
    pub amount: f64,
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::validation("Please enter an amount"));
    }
    Ok(())
}

/// Assembles the day view: every active meal of the user with its matched,
/// non-hidden food intakes for `day`, ordered by meal name.
///
/// Meals without any logged food still appear, with an empty food list, so
/// goals always show up in daily and weekly views.
pub async fn intake_for_day(
    db: &DatabaseConnection,
    user_id: i64,
    day: NaiveDate,
) -> Result<Vec<IntakeRecord>> {
    let meals = meal_logic::list_meals(db, user_id).await?;

    let rows: Vec<(meal_intake::Model, Option<crate::entities::food::Model>)> = MealIntake::find()
        .find_also_related(Food)
        .filter(meal_intake::Column::UserId.eq(user_id))
        .filter(meal_intake::Column::ForDate.eq(day))
        .filter(meal_intake::Column::IsHidden.eq(false))
        .all(db)
        .await?;

    let records = meals
        .into_iter()
        .map(|meal| {
            let foods = rows
                .iter()
                .filter(|(record, _)| record.meal_id == meal.id)
                .filter_map(|(record, food)| {
                    // Hidden foods are dropped from the view even when a record references them
                    let food = food.as_ref().filter(|f| !f.is_hidden)?;
                    Some(FoodIntake {
                        record_id: record.id,
                        food_id: food.id,
                        name: food.name.clone(),
                        description: food.description.clone(),
                        notes: food.notes.clone(),
                        base_amount: food.amount,
                        amount_consumed: record.amount,
                        unit: food.unit.clone(),
                        price: food.price,
                        carbs: food.carbs,
                        proteins: food.proteins,
                        fats: food.fats,
                    })
                })
                .collect();

            IntakeRecord {
                meal_id: meal.id,
                meal_name: meal.name,
                carbs_goal: meal.carbs_goal,
                proteins_goal: meal.proteins_goal,
                fats_goal: meal.fats_goal,
                foods,
            }
        })
        .collect();

    Ok(records)
}

/// Logs a food against a meal for one day.
///
/// Validates that the meal and food both exist, belong to the user, and are
/// active. A zero amount is allowed and contributes nothing to the sums.
pub async fn add_intake(
    db: &DatabaseConnection,
    user_id: i64,
    input: IntakeInput,
) -> Result<meal_intake::Model> {
    validate_amount(input.amount)?;

    meal_logic::get_meal_by_id(db, user_id, input.meal_id)
        .await?
        .ok_or(Error::MealNotFound { id: input.meal_id })?;

    food_logic::get_food_by_id(db, user_id, input.food_id)
        .await?
        .ok_or(Error::FoodNotFound { id: input.food_id })?;

    let record = meal_intake::ActiveModel {
        user_id: Set(user_id),
        meal_id: Set(input.meal_id),
        food_id: Set(input.food_id),
        for_date: Set(input.for_date),
        amount: Set(input.amount),
        created_at: Set(Utc::now()),
        is_hidden: Set(false),
        ..Default::default()
    };

    let result = record.insert(db).await?;
    Ok(result)
}

/// Finds an intake record by id for the given user, returning None if missing or hidden.
pub async fn get_intake_by_id(
    db: &DatabaseConnection,
    user_id: i64,
    record_id: i64,
) -> Result<Option<meal_intake::Model>> {
    MealIntake::find_by_id(record_id)
        .filter(meal_intake::Column::UserId.eq(user_id))
        .filter(meal_intake::Column::IsHidden.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Edits the consumed amount of an existing intake record.
pub async fn update_intake(
    db: &DatabaseConnection,
    user_id: i64,
    record_id: i64,
    amount: f64,
) -> Result<meal_intake::Model> {
    validate_amount(amount)?;

    let existing = get_intake_by_id(db, user_id, record_id)
        .await?
        .ok_or(Error::IntakeNotFound { id: record_id })?;

    let mut active: meal_intake::ActiveModel = existing.into();
    active.amount = Set(amount);

    let result = active.update(db).await?;
    Ok(result)
}

/// Logically removes an intake record by setting its hidden flag.
pub async fn remove_intake(db: &DatabaseConnection, user_id: i64, record_id: i64) -> Result<()> {
    let existing = get_intake_by_id(db, user_id, record_id)
        .await?
        .ok_or(Error::IntakeNotFound { id: record_id })?;

    let mut active: meal_intake::ActiveModel = existing.into();
    active.is_hidden = Set(true);
    active.update(db).await?;

    Ok(())
}

/// Copies every intake record of `from_day` onto `to_day` for the user.
///
/// Runs inside a database transaction. Returns the number of records copied;
/// errors with [`Error::NothingToCopy`] when the source day has no records.
pub async fn duplicate_day(
    db: &DatabaseConnection,
    user_id: i64,
    from_day: NaiveDate,
    to_day: NaiveDate,
) -> Result<u64> {
    let txn = db.begin().await?;

    let source: Vec<meal_intake::Model> = MealIntake::find()
        .filter(meal_intake::Column::UserId.eq(user_id))
        .filter(meal_intake::Column::ForDate.eq(from_day))
        .filter(meal_intake::Column::IsHidden.eq(false))
        .all(&txn)
        .await?;

    if source.is_empty() {
        return Err(Error::NothingToCopy { day: from_day });
    }

    let copied = source.len() as u64;
    let now = Utc::now();

    for record in source {
        let copy = meal_intake::ActiveModel {
            user_id: Set(user_id),
            meal_id: Set(record.meal_id),
            food_id: Set(record.food_id),
            for_date: Set(to_day),
            amount: Set(record.amount),
            created_at: Set(now),
            is_hidden: Set(false),
            ..Default::default()
        };
        copy.insert(&txn).await?;
    }

    txn.commit().await?;
    Ok(copied)
}
