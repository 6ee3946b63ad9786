//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    AttachmentCounts, AttachmentsByType, CreatedTrelloCard, Mail, Task, TrelloBadges, TrelloBoard,
    TrelloCard, TrelloList,
};
pub use errors::DomainError;
