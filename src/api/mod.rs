//! API layer - HTTP endpoints

pub mod generate;
pub mod health;
pub mod orders;
pub mod products;
pub mod router;
pub mod simulate;
pub mod state;
pub mod stats;
pub mod types;
pub mod users;

pub use router::create_router;
pub use state::AppState;
