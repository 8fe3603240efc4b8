//! Ecodadys API module.

pub mod client;
pub mod types;

pub use client::EcodadysApi;
pub use types::{LoginRequest, LoginResponse, Resource, Session};
