//! Database configuration module for `NutriBuddy`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Article, Folder, Food, Meal, MealIntake, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
pub fn get_database_url() -> Result<String> {
    Ok(std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/nutri_buddy.sqlite?mode=rwc".to_string()))
}

/// Establishes a connection to the database at the given URL.
///
/// This function handles connection errors and provides a clean interface for
/// database access throughout the application.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct definitions.
/// It creates tables for users, foods, meals, intake records, folders, and articles.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    // Use SeaORM's proper table creation using Schema::create_table_from_entity
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    // Create tables using SeaORM's schema generation
    let user_table = schema.create_table_from_entity(User);
    let food_table = schema.create_table_from_entity(Food);
    let meal_table = schema.create_table_from_entity(Meal);
    let meal_intake_table = schema.create_table_from_entity(MealIntake);
    let folder_table = schema.create_table_from_entity(Folder);
    let article_table = schema.create_table_from_entity(Article);

    db.execute(builder.build(&user_table)).await?;
    db.execute(builder.build(&food_table)).await?;
    db.execute(builder.build(&meal_table)).await?;
    db.execute(builder.build(&meal_intake_table)).await?;
    db.execute(builder.build(&folder_table)).await?;
    db.execute(builder.build(&article_table)).await?;

    Ok(())
}
