//! User business logic - Token lookup for authentication and startup seeding.
//!
//! Accounts are provisioned from configuration rather than a sign-up flow:
//! `seed_users` upserts the configured accounts by email on every start, so
//! editing config.toml and restarting is how users (and their tokens) are
//! managed.

use crate::{
    config::users::UserConfig,
    entities::{User, user},
    errors::Result,
};
use sea_orm::{Set, prelude::*};
use tracing::info;

/// Finds the user owning the given bearer token, if any.
pub async fn find_by_token(db: &DatabaseConnection, token: &str) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Token.eq(token))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Upserts the configured accounts, keyed by email.
///
/// Existing accounts get their name, token, and active flag refreshed;
/// unknown emails are inserted. Accounts absent from the configuration are
/// left untouched so their history is preserved.
pub async fn seed_users(db: &DatabaseConnection, users: &[UserConfig]) -> Result<()> {
    let mut inserted = 0usize;
    let mut updated = 0usize;

    for config in users {
        let existing = User::find()
            .filter(user::Column::Email.eq(&config.email))
            .one(db)
            .await?;

        if let Some(found) = existing {
            let mut active: user::ActiveModel = found.into();
            active.name = Set(config.name.clone());
            active.token = Set(config.token.clone());
            active.is_active = Set(config.is_active);
            active.update(db).await?;
            updated += 1;
        } else {
            let account = user::ActiveModel {
                name: Set(config.name.clone()),
                email: Set(config.email.clone()),
                token: Set(config.token.clone()),
                is_active: Set(config.is_active),
                ..Default::default()
            };
            account.insert(db).await?;
            inserted += 1;
        }
    }

    info!("Seeded users: {inserted} inserted, {updated} updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    fn config(name: &str, email: &str, token: &str) -> UserConfig {
        UserConfig {
            name: name.to_string(),
            email: email.to_string(),
            token: token.to_string(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_seed_users_inserts_accounts() -> Result<()> {
        let db = setup_test_db().await?;

        seed_users(
            &db,
            &[
                config("Alice", "alice@example.com", "alice-token"),
                config("Bob", "bob@example.com", "bob-token"),
            ],
        )
        .await?;

        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_users_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let accounts = [config("Alice", "alice@example.com", "alice-token")];

        seed_users(&db, &accounts).await?;
        seed_users(&db, &accounts).await?;

        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_users_refreshes_token_and_flag() -> Result<()> {
        let db = setup_test_db().await?;

        seed_users(&db, &[config("Alice", "alice@example.com", "old-token")]).await?;

        let mut refreshed = config("Alice", "alice@example.com", "new-token");
        refreshed.is_active = false;
        seed_users(&db, &[refreshed]).await?;

        assert!(find_by_token(&db, "old-token").await?.is_none());
        let user = find_by_token(&db, "new-token").await?.unwrap();
        assert!(!user.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_token() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "alice").await?;

        let found = find_by_token(&db, &user.token).await?.unwrap();
        assert_eq!(found.id, user.id);

        assert!(find_by_token(&db, "unknown").await?.is_none());

        Ok(())
    }
}
