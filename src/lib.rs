//! Boardgame Site - Main Library
//!
//! A small web project: a chess-like board page served as static assets,
//! plus a session-based signup/login backend on top of Axum and an embedded
//! SQLite database.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the server and any client
//!   - Request/response payloads for the auth endpoints
//!   - Field limits and validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum router, session middleware, auth handlers
//!   - Account store (SQLite via sqlx) and in-memory session store
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use boardgame_site::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env();
//! let (app, state) = create_app(&config).await?;
//! // Serve `app` with axum, then `state.accounts.close().await`
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
