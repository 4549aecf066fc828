pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::connect_and_prepare;
pub use domain::error::{PersistenceError, Result};
pub use transport::http::{create_router, ApiDoc, AppState};
