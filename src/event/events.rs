use crate::item::TodoId;

/// Change notifications emitted by [`TodoState`](crate::state::TodoState).
///
/// Indices are positions in the item list at the moment the event was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoEvent {
    ItemAdded {
        id: TodoId,
        index: usize,
    },
    ItemRemoved {
        id: TodoId,
        index: usize,
    },
    EditStarted {
        id: TodoId,
        index: usize,
    },
    ItemUpdated {
        id: TodoId,
    },
    EditEnded {
        id: TodoId,
    },
}

impl TodoEvent {
    /// The item this event is about
    pub fn id(&self) -> TodoId {
        match self {
            TodoEvent::ItemAdded { id, .. }
            | TodoEvent::ItemRemoved { id, .. }
            | TodoEvent::EditStarted { id, .. }
            | TodoEvent::ItemUpdated { id }
            | TodoEvent::EditEnded { id } => *id,
        }
    }

    /// True for events that change which items exist
    pub fn is_structural(&self) -> bool {
        matches!(self, TodoEvent::ItemAdded { .. } | TodoEvent::ItemRemoved { .. })
    }
}
