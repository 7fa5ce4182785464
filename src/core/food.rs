//! Food business logic - Handles all food-catalogue operations.
//!
//! Provides functions for creating, retrieving, updating, and soft-deleting
//! foods. Every query is scoped by the owning user id, and hidden (removed)
//! foods are filtered out everywhere. Macro fractions are validated to stay
//! inside [0, 1] so downstream aggregation never sees out-of-range content.

use crate::{
    entities::{Food, food},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Units a food's base amount may be expressed in.
pub const UNITS: [&str; 3] = ["gram", "millilitre", "piece"];

/// Attributes accepted when creating or updating a food.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodInput {
    /// Human-readable name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Free-form notes
    pub notes: String,
    /// Reference base amount the macro fractions describe
    pub amount: f64,
    /// Unit of the base amount, one of [`UNITS`]
    pub unit: String,
    /// Price of the base amount
    pub price: f64,
    /// Carbohydrate fraction of the base amount, in [0, 1]
    pub carbs: f64,
    /// Protein fraction of the base amount, in [0, 1]
    pub proteins: f64,
    /// Fat fraction of the base amount, in [0, 1]
    pub fats: f64,
}

fn validate_input(input: &FoodInput) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(Error::validation("Please add a name"));
    }

    if !input.amount.is_finite() || input.amount < 1.0 {
        return Err(Error::validation("Please add an amount"));
    }

    if !UNITS.contains(&input.unit.as_str()) {
        return Err(Error::UnknownUnit {
            unit: input.unit.clone(),
        });
    }

    if !input.price.is_finite() || input.price < 0.0 {
        return Err(Error::InvalidAmount {
            amount: input.price,
        });
    }

    for fraction in [input.carbs, input.proteins, input.fats] {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(Error::validation(
                "Macro fractions must be between 0 and 1",
            ));
        }
    }

    Ok(())
}

/// Retrieves all active (non-hidden) foods for a user, ordered alphabetically by name.
///
/// This function backs the food list view and the food pickers used when
/// logging intake.
pub async fn list_foods(db: &DatabaseConnection, user_id: i64) -> Result<Vec<food::Model>> {
    Food::find()
        .filter(food::Column::UserId.eq(user_id))
        .filter(food::Column::IsHidden.eq(false))
        .order_by_asc(food::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a food by its id for the given user, returning None if missing or hidden.
///
/// Used when intake records reference a food and the caller needs its
/// reference amount and macro fractions.
pub async fn get_food_by_id<C>(db: &C, user_id: i64, food_id: i64) -> Result<Option<food::Model>>
where
    C: ConnectionTrait,
{
    Food::find_by_id(food_id)
        .filter(food::Column::UserId.eq(user_id))
        .filter(food::Column::IsHidden.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new food for the user, performing input validation.
///
/// The name is trimmed; the base amount must be at least 1 in a known unit;
/// macro fractions must each lie in [0, 1].
pub async fn create_food(
    db: &DatabaseConnection,
    user_id: i64,
    input: FoodInput,
) -> Result<food::Model> {
    validate_input(&input)?;

    let food = food::ActiveModel {
        user_id: Set(user_id),
        name: Set(input.name.trim().to_string()),
        description: Set(input.description),
        notes: Set(input.notes),
        amount: Set(input.amount),
        unit: Set(input.unit),
        price: Set(input.price),
        carbs: Set(input.carbs),
        proteins: Set(input.proteins),
        fats: Set(input.fats),
        is_hidden: Set(false),
        ..Default::default()
    };

    let result = food.insert(db).await?;
    Ok(result)
}

/// Updates an existing food with new attributes, performing input validation.
///
/// The food must exist, belong to the user, and not be hidden.
pub async fn update_food(
    db: &DatabaseConnection,
    user_id: i64,
    food_id: i64,
    input: FoodInput,
) -> Result<food::Model> {
    validate_input(&input)?;

    let existing = get_food_by_id(db, user_id, food_id)
        .await?
        .ok_or(Error::FoodNotFound { id: food_id })?;

    let mut active: food::ActiveModel = existing.into();
    active.name = Set(input.name.trim().to_string());
    active.description = Set(input.description);
    active.notes = Set(input.notes);
    active.amount = Set(input.amount);
    active.unit = Set(input.unit);
    active.price = Set(input.price);
    active.carbs = Set(input.carbs);
    active.proteins = Set(input.proteins);
    active.fats = Set(input.fats);

    let result = active.update(db).await?;
    Ok(result)
}

/// Soft-deletes a food by setting its hidden flag.
///
/// The row is preserved so historical intake records keep resolving; the food
/// simply stops appearing in lists and day views.
pub async fn remove_food(db: &DatabaseConnection, user_id: i64, food_id: i64) -> Result<()> {
    let existing = get_food_by_id(db, user_id, food_id)
        .await?
        .ok_or(Error::FoodNotFound { id: food_id })?;

    let mut active: food::ActiveModel = existing.into();
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
    async fn test_create_food_validation() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        // Empty name
        let mut input = test_food_input("  ");
        let result = create_food(&db, user.id, input).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message } if message == "Please add a name"
        ));

        // Base amount below 1
        input = test_food_input("Oats");
        input.amount = 0.0;
        let result = create_food(&db, user.id, input).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message } if message == "Please add an amount"
        ));

        // Unknown unit
        input = test_food_input("Oats");
        input.unit = "cup".to_string();
        let result = create_food(&db, user.id, input).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::UnknownUnit { unit } if unit == "cup"
        ));

        // Macro fraction above 1
        input = test_food_input("Oats");
        input.carbs = 1.5;
        let result = create_food(&db, user.id, input).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        // Negative price
        input = test_food_input("Oats");
        input.price = -1.0;
        let result = create_food(&db, user.id, input).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount } if amount == -1.0
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_food_integration() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let food = create_test_food(&db, user.id, "Oats").await?;

        assert_eq!(food.name, "Oats");
        assert_eq!(food.amount, 100.0);
        assert_eq!(food.unit, "gram");
        assert_eq!(food.carbs, 0.6);
        assert!(!food.is_hidden);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_food_trims_name() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let food = create_food(&db, user.id, test_food_input("  Oats  ")).await?;
        assert_eq!(food.name, "Oats");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_food_integration() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let food = create_test_food(&db, user.id, "Oats").await?;

        let mut input = test_food_input("Rolled oats");
        input.carbs = 0.55;
        let updated = update_food(&db, user.id, food.id, input).await?;

        assert_eq!(updated.id, food.id);
        assert_eq!(updated.name, "Rolled oats");
        assert_eq!(updated.carbs, 0.55);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_food_not_found() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let result = update_food(&db, user.id, 999, test_food_input("Oats")).await;
        assert!(matches!(result.unwrap_err(), Error::FoodNotFound { id: 999 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_soft_delete_filtering() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let food = create_test_food(&db, user.id, "Oats").await?;
        let kept = create_test_food(&db, user.id, "Milk").await?;

        remove_food(&db, user.id, food.id).await?;

        // Removed food is gone from lists and lookups
        let foods = list_foods(&db, user.id).await?;
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].id, kept.id);
        assert!(get_food_by_id(&db, user.id, food.id).await?.is_none());

        // But the row itself is preserved
        let raw = Food::find_by_id(food.id).one(&db).await?.unwrap();
        assert!(raw.is_hidden);

        Ok(())
    }

    #[tokio::test]
    async fn test_per_user_scoping() -> Result<()> {
        let db = setup_test_db().await?;
        let alice = create_test_user(&db, "alice").await?;
        let bob = create_test_user(&db, "bob").await?;

        let food = create_test_food(&db, alice.id, "Oats").await?;

        assert!(get_food_by_id(&db, bob.id, food.id).await?.is_none());
        assert!(list_foods(&db, bob.id).await?.is_empty());
        assert_eq!(list_foods(&db, alice.id).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_foods_ordered_by_name() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        create_test_food(&db, user.id, "Yoghurt").await?;
        create_test_food(&db, user.id, "Apple").await?;

        let foods = list_foods(&db, user.id).await?;
        assert_eq!(foods[0].name, "Apple");
        assert_eq!(foods[1].name, "Yoghurt");

        Ok(())
    }
}
