//! Meal entity - Represents a named meal slot with per-macro daily goals.
//!
//! Goals are target grams per meal per day (`carbs_goal`, `proteins_goal`,
//! `fats_goal`). Meals are per-user and soft-deleted via `is_hidden`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Meal database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meals")]
pub struct Model {
    /// Unique identifier for the meal
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Human-readable name of the meal (e.g., "Breakfast", "Lunch")
    pub name: String,
    /// Target grams of carbohydrates per day
    pub carbs_goal: f64,
    /// Target grams of proteins per day
    pub proteins_goal: f64,
    /// Target grams of fats per day
    pub fats_goal: f64,
    /// Soft delete flag - if true, meal is hidden but data is preserved
    pub is_hidden: bool,
}

/// Defines relationships between Meal and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each meal belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// One meal has many intake records
    #[sea_orm(has_many = "super::meal_intake::Entity")]
    MealIntakes,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::meal_intake::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealIntakes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
