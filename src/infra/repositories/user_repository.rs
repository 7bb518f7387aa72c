//! User repository: the only code that talks to the users table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const ENTITY: &str = "User";

/// User repository trait for dependency injection.
///
/// Lookups report a missing row as `Ok(None)`; only engine failures are errors.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user row with all fields
    async fn create(&self, user: User) -> AppResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Overwrite name, surname, email and password of the row matching `user.id`
    async fn update(&self, user: User) -> AppResult<()>;

    /// Delete the row matching `id`
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Up to `limit` users ordered by ascending id, skipping `offset` rows
    async fn find_many(&self, limit: u64, offset: u64) -> AppResult<Vec<User>>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: User) -> AppResult<()> {
        ActiveModel::from(user)
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, ENTITY))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn update(&self, user: User) -> AppResult<()> {
        match ActiveModel::from(user).update(&self.db).await {
            Ok(_) => Ok(()),
            // Row vanished between the caller's lookup and this write
            Err(DbErr::RecordNotUpdated) => Err(AppError::not_found(ENTITY)),
            Err(e) => Err(AppError::from_write(e, ENTITY)),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ENTITY));
        }

        Ok(())
    }

    async fn find_many(&self, limit: u64, offset: u64) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    fn model(id: &str) -> user::Model {
        user::Model {
            id: id.to_string(),
            name: "Jane".to_string(),
            surname: "Doe".to_string(),
            email: format!("{}@example.com", id),
            password: "hash".to_string(),
        }
    }

    fn empty() -> Vec<user::Model> {
        Vec::new()
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([empty()])
            .into_connection();

        let found = UserStore::new(db).find_by_id("missing").await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_email_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([empty()])
            .into_connection();

        let found = UserStore::new(db)
            .find_by_email("nobody@example.com")
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_maps_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("u1")]])
            .into_connection();

        let found = UserStore::new(db).find_by_id("u1").await.unwrap().unwrap();

        assert_eq!(found.id, "u1");
        assert_eq!(found.email, "u1@example.com");
        assert_eq!(found.password, "hash");
    }

    #[tokio::test]
    async fn test_find_many_orders_by_id_with_limit_and_offset() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("2"), model("3")]])
            .into_connection();
        let store = UserStore::new(db);

        let users = store.find_many(2, 1).await.unwrap();
        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);

        assert_eq!(
            store.db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "users"."id", "users"."name", "users"."surname", "users"."email", "users"."password" FROM "users" ORDER BY "users"."id" ASC LIMIT $1 OFFSET $2"#,
                [2u64.into(), 1u64.into()],
            )]
        );
    }

    #[tokio::test]
    async fn test_create_inserts_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("u1")]])
            .into_connection();

        let result = UserStore::new(db).create(User::from(model("u1"))).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_engine_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();

        let result = UserStore::new(db).create(User::from(model("u1"))).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([empty()])
            .into_connection();

        let result = UserStore::new(db).update(User::from(model("gone"))).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("u1")]])
            .into_connection();

        let result = UserStore::new(db).update(User::from(model("u1"))).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let result = UserStore::new(db).delete("gone").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        assert!(UserStore::new(db).delete("u1").await.is_ok());
    }
}
