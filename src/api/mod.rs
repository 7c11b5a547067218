//! HTTP API module: root route, shared state, and versioned routers.

pub mod handlers;
pub mod routes;
pub mod v1;
pub mod v2;

pub use handlers::AppState;
pub use routes::create_router;
