//! Server Module
//!
//! Configuration, shared state and startup for the Axum server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment-driven configuration
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Store setup, background tasks, app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerConfig::from_env`
//! 2. **Storage**: open SQLite, run migrations
//! 3. **State**: session store, cookie settings, bcrypt cost
//! 4. **Background Tasks**: periodic purge of expired sessions
//! 5. **Router**: auth routes behind the session layer, static files as fallback

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
