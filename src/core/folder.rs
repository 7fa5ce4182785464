//! Folder business logic - Containers for the articles module.

use crate::{
    entities::{Folder, folder},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all folders for a user, in creation order.
pub async fn list_folders(db: &DatabaseConnection, user_id: i64) -> Result<Vec<folder::Model>> {
    Folder::find()
        .filter(folder::Column::UserId.eq(user_id))
        .order_by_asc(folder::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a folder by its id for the given user.
pub async fn get_folder_by_id(
    db: &DatabaseConnection,
    user_id: i64,
    folder_id: i64,
) -> Result<Option<folder::Model>> {
    Folder::find_by_id(folder_id)
        .filter(folder::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new folder for the user and returns it.
pub async fn create_folder(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
) -> Result<folder::Model> {
    if name.trim().is_empty() {
        return Err(Error::validation("Please provide a name"));
    }

    let folder = folder::ActiveModel {
        user_id: Set(user_id),
        name: Set(name.trim().to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let result = folder.insert(db).await?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_folder_validation() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let result = create_folder(&db, user.id, "   ").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message } if message == "Please provide a name"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_list_folders() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let recipes = create_folder(&db, user.id, "Recipes").await?;
        let articles = create_folder(&db, user.id, "Articles").await?;

        let folders = list_folders(&db, user.id).await?;
        assert_eq!(folders.len(), 2);
        // Creation order, not alphabetical
        assert_eq!(folders[0].id, recipes.id);
        assert_eq!(folders[1].id, articles.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_folders_scoped_by_user() -> Result<()> {
        let db = setup_test_db().await?;
        let alice = create_test_user(&db, "alice").await?;
        let bob = create_test_user(&db, "bob").await?;

        let folder = create_folder(&db, alice.id, "Recipes").await?;

        assert!(get_folder_by_id(&db, bob.id, folder.id).await?.is_none());
        assert!(list_folders(&db, bob.id).await?.is_empty());

        Ok(())
    }
}
