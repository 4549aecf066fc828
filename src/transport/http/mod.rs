pub mod error;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod customers;
    pub mod freight;
    pub mod health;
    pub mod personnel;
    pub mod repairs;
    pub mod vehicles;
}

pub use router::{create_router, ApiDoc};
pub use types::{AppState, ErrorBody};
