//! Intake record entity - Associates a food with a meal for one calendar day.
//!
//! Each record stores the `amount` of the food actually consumed on
//! `for_date`. Records are created on logging, updated on edit, and
//! soft-deleted via `is_hidden` on removal.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Intake record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meal_intakes")]
pub struct Model {
    /// Unique identifier for the intake record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Meal this record belongs to
    pub meal_id: i64,
    /// Food that was consumed
    pub food_id: i64,
    /// Calendar day the intake applies to
    pub for_date: Date,
    /// Amount consumed, in the food's unit
    pub amount: f64,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// Soft delete flag - if true, record is hidden but data is preserved
    pub is_hidden: bool,
}

/// Defines relationships between intake records and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each intake record belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Each intake record belongs to one meal
    #[sea_orm(
        belongs_to = "super::meal::Entity",
        from = "Column::MealId",
        to = "super::meal::Column::Id"
    )]
    Meal,
    /// Each intake record references one food
    #[sea_orm(
        belongs_to = "super::food::Entity",
        from = "Column::FoodId",
        to = "super::food::Column::Id"
    )]
    Food,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meal.def()
    }
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Food.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
