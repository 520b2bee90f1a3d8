pub mod auth_flow;
pub mod config;
pub mod error;
pub mod models;
pub mod requests;

pub use auth_flow::*;
pub use config::*;
pub use error::*;
pub use models::*;
pub use requests::*;
