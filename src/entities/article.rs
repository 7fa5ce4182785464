//! Article entity - A titled document whose body lives in the blob store.
//!
//! The row only records the `content_key` of the current body document;
//! `content_key` is None until content is first saved. `updated_at` tracks
//! the last content change.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Article database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    /// Unique identifier for the article
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Folder this article lives in
    pub folder_id: i64,
    /// Article title
    pub title: String,
    /// Blob-store key of the current body document, if any content was saved
    pub content_key: Option<String>,
    /// When the article was created
    pub created_at: DateTimeUtc,
    /// When the article content was last changed
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Article and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each article belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Each article belongs to one folder
    #[sea_orm(
        belongs_to = "super::folder::Entity",
        from = "Column::FolderId",
        to = "super::folder::Column::Id"
    )]
    Folder,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::folder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Folder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
