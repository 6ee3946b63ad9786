//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/wire types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};

/// A task stored in the backing database.
///
/// `id` is `None` until the store assigns one; saving a task with an existing
/// id updates that row (upsert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
}

/// A Trello board with its lists, as returned by the Trello API.
///
/// The system holds no authoritative copy; every fetch produces fresh instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrelloBoard {
    pub id: String,
    pub name: String,
    pub lists: Vec<TrelloList>,
}

/// A list on a Trello board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrelloList {
    pub id: String,
    pub name: String,
    pub closed: bool,
}

/// A card to be created on a Trello list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrelloCard {
    pub name: String,
    pub description: String,
    pub pos: String,
    pub list_id: String,
}

/// The Trello API response to a card creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTrelloCard {
    pub id: String,
    pub name: String,
    pub short_url: String,
    /// Absent for tokens without badge access.
    pub badges: Option<TrelloBadges>,
}

/// Vote and attachment counters on a created card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrelloBadges {
    pub votes: i32,
    pub attachments: AttachmentsByType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentsByType {
    pub trello: AttachmentCounts,
}

/// Attachment counts split by what they point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentCounts {
    pub board: i32,
    pub card: i32,
}

/// An outgoing email. Sent through the mail port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mail {
    pub to: String,
    pub cc: Option<String>,
    pub subject: String,
    pub body: String,
}
