//! Food entity - Represents a food item with its nutrient content.
//!
//! Each food describes the macro-nutrient content of a reference amount:
//! `carbs`, `proteins`, and `fats` are fractions in [0, 1] of the base
//! `amount` expressed in `unit` (gram, millilitre, or piece). Foods are
//! per-user and soft-deleted via the `is_hidden` flag.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Food database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food")]
pub struct Model {
    /// Unique identifier for the food
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Human-readable name of the food (e.g., "Oats", "Whole milk")
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Free-form notes (preparation, brand, source)
    pub notes: String,
    /// Reference base amount the macro fractions are expressed against
    pub amount: f64,
    /// Unit of the base amount: `"gram"`, `"millilitre"`, or `"piece"`
    pub unit: String,
    /// Price of the base amount
    pub price: f64,
    /// Carbohydrate fraction of the base amount, in [0, 1]
    pub carbs: f64,
    /// Protein fraction of the base amount, in [0, 1]
    pub proteins: f64,
    /// Fat fraction of the base amount, in [0, 1]
    pub fats: f64,
    /// Soft delete flag - if true, food is hidden but data is preserved
    pub is_hidden: bool,
}

/// Defines relationships between Food and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each food belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// One food appears in many intake records
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
