//! Web server module
//!
//! Provides the HTTP interface for the dashboard.

mod handlers;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
