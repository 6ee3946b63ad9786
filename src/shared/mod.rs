//! Shared configuration and cross-cutting helpers.

pub mod config;

pub use config::{AdminConfig, AppConfig};
