//! Inbound HTTP adapter: axum server, controllers, wire DTOs.

pub mod dto;
pub mod error;
pub mod mapper;
pub mod server;
pub mod tasks;
pub mod trello;

pub use server::{AppState, build_router};
