//! Route Configuration Module
//!
//! - **`router`** - Main router creation and layer assembly
//! - **`api_routes`** - Authentication endpoints
//!
//! # Route Organization
//!
//! 1. **Auth Routes** - signup, login, session check, logout
//! 2. **Fallback** - static files from the configured directory, `index.html` at `/`
//!
//! Every request, including static files, passes through the session
//! middleware, so each visitor holds a `sid` cookie after the first response.
//!
//! # Example
//!
//! ```rust,no_run
//! use boardgame_site::backend::routes::create_router;
//! use boardgame_site::backend::server::init::build_state;
//! use boardgame_site::backend::server::ServerConfig;
//! use boardgame_site::backend::auth::AccountStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::default();
//! let accounts = AccountStore::in_memory().await?;
//! let router = create_router(build_state(accounts, &config), &config.static_dir);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Authentication endpoints
pub mod api_routes;

pub use router::create_router;
