//! Article business logic - Titled documents with blob-stored bodies and images.
//!
//! Article rows only hold metadata; the body is a JSON document in the blob
//! store, referenced by `content_key`. Saving new content writes a fresh blob
//! and deletes the previous one, so the store never accumulates stale bodies.
//! Images are stored under a per-article prefix with server-generated names;
//! client-supplied image names are validated before they touch the filesystem.

use crate::{
    blob::FileStore,
    core::folder as folder_logic,
    entities::{Article, article},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Accepted image content types and the file extension each is stored under.
pub const IMAGE_CONTENT_TYPES: [(&str, &str); 4] = [
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

/// Retrieves all articles in one folder for a user, in creation order.
pub async fn list_articles(
    db: &DatabaseConnection,
    user_id: i64,
    folder_id: i64,
) -> Result<Vec<article::Model>> {
    Article::find()
        .filter(article::Column::UserId.eq(user_id))
        .filter(article::Column::FolderId.eq(folder_id))
        .order_by_asc(article::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an article by its id for the given user.
pub async fn get_article_by_id(
    db: &DatabaseConnection,
    user_id: i64,
    article_id: i64,
) -> Result<Option<article::Model>> {
    Article::find_by_id(article_id)
        .filter(article::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new article in the given folder. The folder must belong to the
/// user.
pub async fn create_article(
    db: &DatabaseConnection,
    user_id: i64,
    folder_id: i64,
    title: &str,
) -> Result<article::Model> {
    if title.trim().is_empty() {
        return Err(Error::validation("Please provide a name"));
    }

    folder_logic::get_folder_by_id(db, user_id, folder_id)
        .await?
        .ok_or(Error::FolderNotFound { id: folder_id })?;

    let now = Utc::now();
    let article = article::ActiveModel {
        user_id: Set(user_id),
        folder_id: Set(folder_id),
        title: Set(title.trim().to_string()),
        content_key: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = article.insert(db).await?;
    Ok(result)
}

/// Loads the article's body document from the blob store.
///
/// Returns None when the article has no content yet. A recorded key whose
/// blob is missing is a broken state and surfaces as
/// [`Error::ContentUnavailable`].
pub async fn get_content(
    db: &DatabaseConnection,
    blob: &FileStore,
    user_id: i64,
    article_id: i64,
) -> Result<Option<serde_json::Value>> {
    let article = get_article_by_id(db, user_id, article_id)
        .await?
        .ok_or(Error::ArticleNotFound { id: article_id })?;

    let Some(key) = article.content_key else {
        return Ok(None);
    };

    let bytes = blob
        .get(&key)
        .await?
        .ok_or(Error::ContentUnavailable { article: article_id })?;

    Ok(Some(serde_json::from_slice(&bytes)?))
}

/// Saves a new body document for the article.
///
/// The document is written under a fresh key, the row's `content_key` and
/// `updated_at` are updated, and the previous blob (if any) is deleted.
pub async fn update_content(
    db: &DatabaseConnection,
    blob: &FileStore,
    user_id: i64,
    article_id: i64,
    content: &serde_json::Value,
) -> Result<article::Model> {
    let article = get_article_by_id(db, user_id, article_id)
        .await?
        .ok_or(Error::ArticleNotFound { id: article_id })?;

    let now = Utc::now();
    let new_key = format!(
        "articles/{user_id}/{article_id}-{}.json",
        now.timestamp_millis()
    );

    blob.put(&new_key, &serde_json::to_vec(content)?).await?;

    let previous_key = article.content_key.clone();

    let mut active: article::ActiveModel = article.into();
    active.content_key = Set(Some(new_key.clone()));
    active.updated_at = Set(now);
    let result = active.update(db).await?;

    if let Some(old_key) = previous_key {
        if old_key != new_key {
            blob.delete(&old_key).await?;
        }
    }

    Ok(result)
}

/// Stores an image for the article and returns its server-generated name.
///
/// Only the content types in [`IMAGE_CONTENT_TYPES`] are accepted.
pub async fn save_image(
    db: &DatabaseConnection,
    blob: &FileStore,
    user_id: i64,
    article_id: i64,
    content_type: &str,
    bytes: &[u8],
) -> Result<String> {
    let extension = IMAGE_CONTENT_TYPES
        .iter()
        .find(|(accepted, _)| *accepted == content_type)
        .map(|(_, ext)| *ext)
        .ok_or_else(|| Error::UnsupportedContentType {
            content_type: content_type.to_string(),
        })?;

    get_article_by_id(db, user_id, article_id)
        .await?
        .ok_or(Error::ArticleNotFound { id: article_id })?;

    let name = format!("{}.{extension}", Utc::now().timestamp_millis());
    let key = image_key(user_id, article_id, &name);
    blob.put(&key, bytes).await?;

    Ok(name)
}

/// Loads an article image by name, returning the bytes and their content type.
pub async fn load_image(
    db: &DatabaseConnection,
    blob: &FileStore,
    user_id: i64,
    article_id: i64,
    name: &str,
) -> Result<(Vec<u8>, &'static str)> {
    validate_image_name(name)?;

    let content_type = name
        .rsplit('.')
        .next()
        .and_then(|ext| {
            IMAGE_CONTENT_TYPES
                .iter()
                .find(|(_, accepted)| *accepted == ext)
                .map(|(content_type, _)| *content_type)
        })
        .ok_or_else(|| Error::UnsupportedContentType {
            content_type: name.to_string(),
        })?;

    get_article_by_id(db, user_id, article_id)
        .await?
        .ok_or(Error::ArticleNotFound { id: article_id })?;

    let key = image_key(user_id, article_id, name);
    let bytes = blob
        .get(&key)
        .await?
        .ok_or(Error::ContentUnavailable { article: article_id })?;

    Ok((bytes, content_type))
}

fn image_key(user_id: i64, article_id: i64, name: &str) -> String {
    format!("articles/{user_id}/{article_id}/images/{name}")
}

// Image names come from clients; nothing resembling a path may pass.
fn validate_image_name(name: &str) -> Result<()> {
    let safe = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

    if safe {
        Ok(())
    } else {
        Err(Error::validation("Invalid image name"))
    }
}
