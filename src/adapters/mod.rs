//! Infrastructure adapters. Implement outbound ports and the HTTP surface.
//!
//! Trello API, SQLite, SMTP. Map errors to DomainError.

pub mod http;
pub mod integrations;
pub mod mail;
pub mod persistence;
