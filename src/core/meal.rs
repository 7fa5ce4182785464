//! Meal business logic - Handles meal definitions and their macro goals.
//!
//! Meals are the slots intake is logged against (breakfast, lunch, ...), each
//! carrying target grams per macro-nutrient per day. Scoped by user and
//! soft-deleted via the hidden flag, like foods.

use crate::{
    entities::{Meal, meal},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Attributes accepted when creating or updating a meal.
#[derive(Debug, Clone, Deserialize)]
pub struct MealInput {
    /// Human-readable name
    pub name: String,
    /// Target grams of carbohydrates per day
    pub carbs_goal: f64,
    /// Target grams of proteins per day
    pub proteins_goal: f64,
    /// Target grams of fats per day
    pub fats_goal: f64,
}

fn validate_input(input: &MealInput) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(Error::validation("Please add a name"));
    }

    for goal in [input.carbs_goal, input.proteins_goal, input.fats_goal] {
        if !goal.is_finite() || goal < 0.0 {
            return Err(Error::InvalidAmount { amount: goal });
        }
    }

    Ok(())
}

/// Retrieves all active (non-hidden) meals for a user, ordered alphabetically by name.
pub async fn list_meals(db: &DatabaseConnection, user_id: i64) -> Result<Vec<meal::Model>> {
    Meal::find()
        .filter(meal::Column::UserId.eq(user_id))
        .filter(meal::Column::IsHidden.eq(false))
        .order_by_asc(meal::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a meal by its id for the given user, returning None if missing or hidden.
pub async fn get_meal_by_id<C>(db: &C, user_id: i64, meal_id: i64) -> Result<Option<meal::Model>>
where
    C: ConnectionTrait,
{
    Meal::find_by_id(meal_id)
        .filter(meal::Column::UserId.eq(user_id))
        .filter(meal::Column::IsHidden.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new meal for the user, performing input validation.
///
/// Goals must be finite and non-negative; a zero goal is allowed and simply
/// produces a zero ratio in reports.
pub async fn create_meal(
    db: &DatabaseConnection,
    user_id: i64,
    input: MealInput,
) -> Result<meal::Model> {
    validate_input(&input)?;

    let meal = meal::ActiveModel {
        user_id: Set(user_id),
        name: Set(input.name.trim().to_string()),
        carbs_goal: Set(input.carbs_goal),
        proteins_goal: Set(input.proteins_goal),
        fats_goal: Set(input.fats_goal),
        is_hidden: Set(false),
        ..Default::default()
    };

    let result = meal.insert(db).await?;
    Ok(result)
}

/// Updates an existing meal's name and goals, performing input validation.
pub async fn update_meal(
    db: &DatabaseConnection,
    user_id: i64,
    meal_id: i64,
    input: MealInput,
) -> Result<meal::Model> {
    validate_input(&input)?;

    let existing = get_meal_by_id(db, user_id, meal_id)
        .await?
        .ok_or(Error::MealNotFound { id: meal_id })?;

    let mut active: meal::ActiveModel = existing.into();
    active.name = Set(input.name.trim().to_string());
    active.carbs_goal = Set(input.carbs_goal);
    active.proteins_goal = Set(input.proteins_goal);
    active.fats_goal = Set(input.fats_goal);

    let result = active.update(db).await?;
    Ok(result)
}

/// Soft-deletes a meal by setting its hidden flag.
pub async fn remove_meal(db: &DatabaseConnection, user_id: i64, meal_id: i64) -> Result<()> {
    let existing = get_meal_by_id(db, user_id, meal_id)
        .await?
        .ok_or(Error::MealNotFound { id: meal_id })?;

    let mut active: meal::ActiveModel = existing.into();
    active.is_hidden = Set(true);
    active.update(db).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_meal_validation() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let result = create_meal(
            &db,
            user.id,
            MealInput {
                name: String::new(),
                carbs_goal: 50.0,
                proteins_goal: 30.0,
                fats_goal: 20.0,
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        let result = create_meal(
            &db,
            user.id,
            MealInput {
                name: "Breakfast".to_string(),
                carbs_goal: -5.0,
                proteins_goal: 30.0,
                fats_goal: 20.0,
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount } if amount == -5.0
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_meal_integration() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let meal = create_test_meal(&db, user.id, "Breakfast").await?;

        assert_eq!(meal.name, "Breakfast");
        assert_eq!(meal.carbs_goal, 50.0);
        assert_eq!(meal.proteins_goal, 30.0);
        assert_eq!(meal.fats_goal, 20.0);
        assert!(!meal.is_hidden);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_meal_integration() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let meal = create_test_meal(&db, user.id, "Breakfast").await?;

        let updated = update_meal(
            &db,
            user.id,
            meal.id,
            MealInput {
                name: "Brunch".to_string(),
                carbs_goal: 60.0,
                proteins_goal: 25.0,
                fats_goal: 15.0,
            },
        )
        .await?;

        assert_eq!(updated.id, meal.id);
        assert_eq!(updated.name, "Brunch");
        assert_eq!(updated.carbs_goal, 60.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_meal_soft_delete() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let meal = create_test_meal(&db, user.id, "Breakfast").await?;

        remove_meal(&db, user.id, meal.id).await?;

        assert!(get_meal_by_id(&db, user.id, meal.id).await?.is_none());
        assert!(list_meals(&db, user.id).await?.is_empty());

        let raw = Meal::find_by_id(meal.id).one(&db).await?.unwrap();
        assert!(raw.is_hidden);

        Ok(())
    }

    #[tokio::test]
    async fn test_meals_scoped_by_user() -> Result<()> {
        let db = setup_test_db().await?;
        let alice = create_test_user(&db, "alice").await?;
        let bob = create_test_user(&db, "bob").await?;

        let meal = create_test_meal(&db, alice.id, "Breakfast").await?;

        assert!(get_meal_by_id(&db, bob.id, meal.id).await?.is_none());
        assert!(list_meals(&db, bob.id).await?.is_empty());

        Ok(())
    }
}
