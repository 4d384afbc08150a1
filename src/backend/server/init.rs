/**
 * Server Initialization
 *
 * 1. Open the account store and run migrations
 * 2. Build the session store and cookie settings
 * 3. Start the periodic purge of expired sessions
 * 4. Assemble the router
 *
 * The caller gets both the router and the state, so it can close the
 * account store once the server has shut down.
 */

use std::time::Duration;

use axum::Router;
use tokio::task::JoinHandle;

use crate::backend::auth::password::HashCost;
use crate::backend::auth::sessions::SessionStore;
use crate::backend::auth::users::AccountStore;
use crate::backend::error::BackendError;
use crate::backend::middleware::session::SessionCookie;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

const PURGE_INTERVAL: Duration = Duration::from_secs(300);

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<(Router<()>, AppState), BackendError> {
    tracing::info!("Initializing boardgame backend server");

    let accounts = AccountStore::connect(&config.database_url).await?;
    let state = build_state(accounts, config);

    spawn_session_purge(state.sessions.clone(), PURGE_INTERVAL);

    let app = create_router(state.clone(), &config.static_dir);
    tracing::info!("Router configured with periodic session cleanup");

    Ok((app, state))
}

/// Assemble the state around an already opened account store
pub fn build_state(accounts: AccountStore, config: &ServerConfig) -> AppState {
    if !config.production {
        tracing::warn!("PRODUCTION not set; session cookie will not be marked Secure");
    }

    AppState {
        accounts,
        sessions: SessionStore::new(config.session_ttl),
        cookie: SessionCookie {
            secure: config.production,
            max_age: config.session_ttl,
        },
        hash_cost: HashCost(config.bcrypt_cost),
    }
}

/// Drop expired sessions every `period`
pub fn spawn_session_purge(sessions: SessionStore, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let purged = sessions.purge_expired().await;
            if purged > 0 {
                tracing::debug!("Purged {} expired sessions", purged);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_state_follows_config() {
        let accounts = AccountStore::in_memory().await.unwrap();
        let config = ServerConfig {
            production: true,
            session_ttl: Duration::from_secs(90),
            bcrypt_cost: 6,
            ..ServerConfig::default()
        };

        let state = build_state(accounts, &config);
        assert!(state.cookie.secure);
        assert_eq!(state.cookie.max_age, Duration::from_secs(90));
        assert_eq!(state.sessions.ttl(), Duration::from_secs(90));
        assert_eq!(state.hash_cost, HashCost(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_task_removes_expired_sessions() {
        let sessions = SessionStore::new(Duration::from_secs(10));
        sessions.create().await;

        let task = spawn_session_purge(sessions.clone(), Duration::from_secs(30));

        tokio::time::sleep(Duration::from_secs(31)).await;
        assert!(sessions.is_empty().await);

        task.abort();
    }

    #[tokio::test]
    async fn test_create_app_with_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            database_url: format!("sqlite://{}", dir.path().join("users.db").display()),
            ..ServerConfig::default()
        };

        let (_app, state) = create_app(&config).await.unwrap();
        assert_eq!(state.accounts.count_users().await.unwrap(), 0);
        assert!(dir.path().join("users.db").exists());

        state.accounts.close().await;
    }
}
