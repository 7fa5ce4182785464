//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod article;
pub mod folder;
pub mod food;
pub mod meal;
pub mod meal_intake;
pub mod user;

// Re-export specific types to avoid conflicts
pub use article::{Column as ArticleColumn, Entity as Article, Model as ArticleModel};
pub use folder::{Column as FolderColumn, Entity as Folder, Model as FolderModel};
pub use food::{Column as FoodColumn, Entity as Food, Model as FoodModel};
pub use meal::{Column as MealColumn, Entity as Meal, Model as MealModel};
pub use meal_intake::{
    Column as MealIntakeColumn, Entity as MealIntake, Model as MealIntakeModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
