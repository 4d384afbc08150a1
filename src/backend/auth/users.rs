/**
 * Account Store
 *
 * The `users` table and the queries the auth handlers run against it.
 * The store owns a SQLite pool; it is built once at startup, handed to the
 * handlers through `AppState`, and closed after the server stops.
 *
 * Handle and email uniqueness is enforced by `UNIQUE` constraints. Signup
 * performs a single `INSERT` and a constraint violation is reported as the
 * matching conflict code, so two concurrent signups cannot both succeed.
 */

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::error::{BackendError, ErrorCode};
use crate::shared::UserInfo;

const MAX_CONNECTIONS: u32 = 8;

/// A registered user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    /// Unique, at most 50 characters
    pub handle: String,
    /// Unique, at most 200 characters
    pub email: String,
    /// bcrypt hash, never returned to clients
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The parts of the user that may be shown to clients
    pub fn info(&self) -> UserInfo {
        UserInfo {
            handle: self.handle.clone(),
            email: self.email.clone(),
        }
    }
}

/// Handle to the `users` table
#[derive(Debug, Clone)]
pub struct AccountStore {
    pool: SqlitePool,
}

impl AccountStore {
    /// Open (creating if needed) the database at `url` and run migrations
    ///
    /// ```rust,no_run
    /// use boardgame_site::backend::auth::users::AccountStore;
    ///
    /// # async fn example() -> Result<(), boardgame_site::backend::BackendError> {
    /// let store = AccountStore::connect("sqlite://users.db").await?;
    /// store.close().await;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self, BackendError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        tracing::info!("Connecting to database at {}", url);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// A private in-memory database, used by tests and throwaway runs
    ///
    /// Every connection to `:memory:` is a separate database, so the pool
    /// is pinned to one connection that is never recycled.
    pub async fn in_memory() -> Result<Self, BackendError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, BackendError> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }

    /// Close every pooled connection; further queries fail with `PoolClosed`
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connections closed");
    }

    /// Insert a new user
    ///
    /// # Errors
    ///
    /// * `ErrorCode::HandleTaken` / `ErrorCode::EmailTaken` on a uniqueness conflict
    /// * `BackendError::Database` for any other storage failure
    pub async fn create_user(
        &self,
        handle: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, BackendError> {
        let now = Utc::now();

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (handle, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, handle, email, password_hash, created_at
            "#,
        )
        .bind(handle)
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match conflict_code(&e) {
            Some(code) => BackendError::Auth(code),
            None => BackendError::Database(e),
        })
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, handle, email, password_hash, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_user_by_handle(&self, handle: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, handle, email, password_hash, created_at
            FROM users
            WHERE handle = ?
            "#,
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn count_users(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
    }
}

/// Map a unique-constraint violation to the conflicting field
///
/// SQLite reports these as `UNIQUE constraint failed: users.<column>`.
fn conflict_code(err: &sqlx::Error) -> Option<ErrorCode> {
    let db_err = err.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    let message = db_err.message();
    if message.contains("users.email") {
        Some(ErrorCode::EmailTaken)
    } else if message.contains("users.handle") {
        Some(ErrorCode::HandleTaken)
    } else {
        None
    }
}
