mod routes;
mod server;
pub mod types;

pub use server::{ApiServer, AppState};
