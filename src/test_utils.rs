//! Shared test utilities for `NutriBuddy`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    blob::FileStore,
    core::{food, intake, meal},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, Set, prelude::*};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a blob store rooted in a fresh temporary directory.
/// The directory handle must be kept alive for the store's lifetime.
pub fn setup_blob_store() -> Result<(tempfile::TempDir, FileStore)> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path())?;
    Ok((dir, store))
}

/// Creates a test user with email and token derived from the name.
pub async fn create_test_user(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::user::Model> {
    let account = entities::user::ActiveModel {
        name: Set(name.to_string()),
        email: Set(format!("{name}@example.com")),
        token: Set(format!("{name}-token")),
        is_active: Set(true),
        ..Default::default()
    };

    let result = account.insert(db).await?;
    Ok(result)
}

/// Builds a food input with sensible defaults.
///
/// # Defaults
/// * `amount`: 100.0 `"gram"`
/// * `price`: 2.5
/// * macro fractions: carbs 0.6, proteins 0.1, fats 0.05
#[must_use]
pub fn test_food_input(name: &str) -> food::FoodInput {
    food::FoodInput {
        name: name.to_string(),
        description: String::new(),
        notes: String::new(),
        amount: 100.0,
        unit: "gram".to_string(),
        price: 2.5,
        carbs: 0.6,
        proteins: 0.1,
        fats: 0.05,
    }
}

/// Creates a test food with the defaults of [`test_food_input`].
pub async fn create_test_food(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
) -> Result<entities::food::Model> {
    food::create_food(db, user_id, test_food_input(name)).await
}

/// Creates a test meal with goals 50/30/20 grams.
pub async fn create_test_meal(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
) -> Result<entities::meal::Model> {
    create_custom_meal(db, user_id, name, 50.0, 30.0, 20.0).await
}

/// Creates a test meal with explicit goals.
pub async fn create_custom_meal(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
    carbs_goal: f64,
    proteins_goal: f64,
    fats_goal: f64,
) -> Result<entities::meal::Model> {
    meal::create_meal(
        db,
        user_id,
        meal::MealInput {
            name: name.to_string(),
            carbs_goal,
            proteins_goal,
            fats_goal,
        },
    )
    .await
}

/// Logs a test intake of a food against a meal for one day.
pub async fn create_test_intake(
    db: &DatabaseConnection,
    user_id: i64,
    meal_id: i64,
    food_id: i64,
    for_date: NaiveDate,
    amount: f64,
) -> Result<entities::meal_intake::Model> {
    intake::add_intake(
        db,
        user_id,
        intake::IntakeInput {
            meal_id,
            for_date,
            food_id,
            amount,
        },
    )
    .await
}

/// Builds a calendar date, panicking on invalid input (tests only).
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Sets up a complete test environment with a user.
/// Returns (db, user) for common test scenarios.
pub async fn setup_with_user() -> Result<(DatabaseConnection, entities::user::Model)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "tester").await?;
    Ok((db, user))
}
