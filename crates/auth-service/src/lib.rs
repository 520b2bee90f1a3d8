//! Client side of the authentication collaborator.
//!
//! The front-end never talks to an auth backend directly; it goes through
//! [`AuthService`]. Two implementations ship here: [`HttpAuthService`] for a
//! remote auth API and [`MemoryAuthService`] for local development.

pub mod config;
pub mod http;
pub mod memory;
pub mod reset;
pub mod service;

pub use http::HttpAuthService;
pub use memory::MemoryAuthService;
pub use reset::submit_password_reset;
pub use service::{connect, AuthClient, AuthService};
