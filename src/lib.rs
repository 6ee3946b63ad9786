//! taskboard: Task CRUD backend with Trello integration, built hexagonally.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
