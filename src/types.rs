//! Domain types for the on-device whiteboard data model.
//!
//! DESIGN
//! ======
//! These types are both the in-memory model and the persisted JSON format,
//! so serde derives live here and field names are load-bearing. Collections
//! default to empty on deserialize so records written by older builds (or
//! trimmed by hand) still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The locally signed-in user.
///
/// Identity is `id`; at most one user is "current" at a time. The record is
/// replaced wholesale on save and cleared on sign-out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A 2D position in board coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// The kind of a placed whiteboard item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Plain text note.
    Text,
    /// Sticky note with a colored backing.
    Sticky,
    /// Freehand drawing stroke data.
    Drawing,
}

/// A single placed element on a whiteboard.
///
/// Items are immutable once appended; there is no update or delete path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhiteboardItem {
    /// What kind of element this is.
    pub kind: ItemKind,
    /// Kind-specific content (text body, stroke data, etc.).
    pub content: String,
    /// User id of the author.
    pub created_by: String,
    /// Where the item sits on the board.
    pub position: Point,
}

/// A named collaborative canvas: an ordered item list plus a member list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Whiteboard {
    /// Unique board identifier (UUID string), generated at creation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Placed items in append order.
    #[serde(default)]
    pub items: Vec<WhiteboardItem>,
    /// Set-like list of member user ids.
    #[serde(default)]
    pub members: Vec<String>,
}

impl Whiteboard {
    /// Create an empty board owned by `owner_id`, with a fresh id.
    #[must_use]
    pub fn new(name: &str, owner_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            items: Vec::new(),
            members: vec![owner_id.to_owned()],
        }
    }
}
