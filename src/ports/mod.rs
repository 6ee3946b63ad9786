//! Port traits. API boundaries for the hexagon.
//!
//! Outbound: called by the application into infrastructure. The HTTP surface
//! is an inbound adapter that calls use cases directly.

pub mod outbound;

pub use outbound::{MailPort, TaskRepoPort, TrelloGateway};
