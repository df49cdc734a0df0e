use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::id_generator;

/// Identity of a todo item. Assigned once when the item is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category tag shown next to a todo item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TodoIcon {
    #[default]
    Square,
    Done,
    Event,
    Privacy,
    Trash,
}

impl TodoIcon {
    /// Every icon, in selector order
    pub const ALL: [TodoIcon; 5] = [
        TodoIcon::Square,
        TodoIcon::Done,
        TodoIcon::Event,
        TodoIcon::Privacy,
        TodoIcon::Trash,
    ];

    /// Glyph drawn for this icon. All of these ship with egui's default fonts.
    pub fn glyph(&self) -> &'static str {
        match self {
            TodoIcon::Square => "⬜",
            TodoIcon::Done => "✔",
            TodoIcon::Event => "📅",
            TodoIcon::Privacy => "🔒",
            TodoIcon::Trash => "🗑",
        }
    }

    /// Accessible description, used as hover text
    pub fn description(&self) -> &'static str {
        match self {
            TodoIcon::Square => "Expand",
            TodoIcon::Done => "Done",
            TodoIcon::Event => "Event",
            TodoIcon::Privacy => "Privacy",
            TodoIcon::Trash => "Restore",
        }
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: TodoId,
    description: String,
    icon: TodoIcon,
}

impl TodoItem {
    /// Creates an item with a freshly generated id
    pub(crate) fn new(description: impl Into<String>, icon: TodoIcon) -> Self {
        Self {
            id: id_generator::generate_id(),
            description: description.into(),
            icon,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> TodoIcon {
        self.icon
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub(crate) fn set_icon(&mut self, icon: TodoIcon) {
        self.icon = icon;
    }
}
