//! HTTP layer for the AnalytIQ site.
//!
//! Exposes an axum [`Router`] through which the presentation layer submits the
//! newsletter and contact forms and fetches blog posts. Page rendering is the
//! caller's responsibility; every response body here is JSON.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/health_check` | Always 200 |
//! | `POST` | `/newsletter` | Form: `name`, `email` |
//! | `POST` | `/contact` | Form: `name`, `email`, `message` |
//! | `GET`  | `/blog` | All posts from the blog entries file |

pub mod blog;
pub mod config;
pub mod error;
pub mod handlers;

pub use config::ServerConfig;
pub use error::Error;

use std::sync::Arc;

use analytiq_core::store::{ContactStore, SubscriptionStore};
use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use handlers::{blog as blog_handler, contact, health_check, newsletter};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the site router over `state`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: SubscriptionStore + ContactStore + Clone + 'static,
{
  Router::new()
    .route("/health_check", get(health_check::handler))
    .route("/newsletter",   post(newsletter::handler::<S>))
    .route("/contact",      post(contact::handler::<S>))
    .route("/blog",         get(blog_handler::handler::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
