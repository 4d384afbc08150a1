/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the router. The
 * `FromRef` implementations let handlers extract only the part they need,
 * e.g. `State(accounts): State<AccountStore>`.
 */

use axum::extract::FromRef;

use crate::backend::auth::password::HashCost;
use crate::backend::auth::sessions::SessionStore;
use crate::backend::auth::users::AccountStore;
use crate::backend::middleware::session::SessionCookie;

/// Shared state for every request
///
/// All fields are cheap to clone: the account store wraps a pool handle and
/// the session store wraps an `Arc<RwLock<..>>`.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The `users` table
    pub accounts: AccountStore,

    /// Server-side sessions
    pub sessions: SessionStore,

    /// Attributes of the `sid` cookie
    pub cookie: SessionCookie,

    /// bcrypt cost for new password hashes
    pub hash_cost: HashCost,
}

impl FromRef<AppState> for AccountStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accounts.clone()
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for SessionCookie {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookie
    }
}

impl FromRef<AppState> for HashCost {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hash_cost
    }
}
