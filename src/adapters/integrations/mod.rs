//! External service integrations (Trello REST API).

pub mod trello;

pub use trello::TrelloHttpGateway;
