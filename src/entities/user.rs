//! User entity - Represents an account that owns foods, meals, and intake records.
//!
//! Users are provisioned from configuration at startup rather than via a
//! sign-up flow. Each user authenticates with an opaque bearer token; the
//! `is_active` flag gates accounts that have not finished onboarding.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address, unique across accounts
    #[sea_orm(unique)]
    pub email: String,
    /// Opaque bearer token used to authenticate API requests
    #[sea_orm(unique)]
    pub token: String,
    /// Whether the account may use the API (inactive accounts are rejected)
    pub is_active: bool,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has many foods
    #[sea_orm(has_many = "super::food::Entity")]
    Foods,
    /// One user has many meals
    #[sea_orm(has_many = "super::meal::Entity")]
    Meals,
    /// One user has many intake records
    #[sea_orm(has_many = "super::meal_intake::Entity")]
    MealIntakes,
    /// One user has many folders
    #[sea_orm(has_many = "super::folder::Entity")]
    Folders,
    /// One user has many articles
    #[sea_orm(has_many = "super::article::Entity")]
    Articles,
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Foods.def()
    }
}

impl Related<super::meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meals.def()
    }
}

impl Related<super::meal_intake::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealIntakes.def()
    }
}

impl Related<super::folder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Folders.def()
    }
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Articles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
