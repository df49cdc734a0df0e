//! The editable collection behind the todo screen.
//!
//! `TodoState` owns the ordered list of items and a pointer to the item that is
//! currently open for editing. The presentation layer calls its operations in
//! response to input and subscribes to its [`EventBus`] to hear about changes.
//!
//! # Editing pointer
//!
//! The pointer is stored as the edited item's id, not as a list position. The
//! position is resolved on demand, so removing an earlier item can never leave
//! it pointing at the wrong entry:
//!
//! ```text
//!  items:   [A, B, C]        editing = B  (index 1)
//!  remove A
//!  items:   [B, C]           editing = B  (index 0)
//!  remove B
//!  items:   [C]              editing = none
//! ```
//!
//! # Examples
//!
//! ```rust
//! use eframe_todo::{TodoIcon, TodoState};
//!
//! let mut state = TodoState::new();
//! let item = state.add_item("Buy books", None);
//! state.begin_edit(item.id()).unwrap();
//! state.update_editing_item(Some("Buy more books".into()), Some(TodoIcon::Done)).unwrap();
//! state.end_edit();
//! assert_eq!(state.items()[0].description(), "Buy more books");
//! ```
use rand::Rng;

use crate::error::{TodoError, TodoResult};
use crate::event::{EventBus, TodoEvent};
use crate::item::{TodoIcon, TodoId, TodoItem};
use crate::seed;

#[derive(Debug, Clone, Default)]
pub struct TodoState {
    items: Vec<TodoItem>,
    editing: Option<TodoId>,
    event_bus: EventBus,
}

impl TodoState {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection pre-populated with `count` random demo items
    pub fn seeded<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut state = Self::new();
        for _ in 0..count {
            let entry = seed::random_entry(rng);
            state.add_item(entry.description, Some(entry.icon));
        }
        log::info!("Seeded todo list with {} items", count);
        state
    }

    /// The event bus change notifications are published on
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Current position of the item with `id`
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Appends a new item and returns a copy of it.
    ///
    /// The description is taken as given; rejecting blank text is up to the caller.
    pub fn add_item(&mut self, description: impl Into<String>, icon: Option<TodoIcon>) -> TodoItem {
        let item = TodoItem::new(description, icon.unwrap_or_default());
        let index = self.items.len();
        self.items.push(item.clone());

        log::debug!("Added todo {} at index {}", item.id(), index);
        self.event_bus.emit(TodoEvent::ItemAdded { id: item.id(), index });
        item
    }

    /// Removes the item with `id`. Unknown ids are ignored.
    ///
    /// Removing the item being edited ends the edit.
    pub fn remove_item(&mut self, id: TodoId) {
        let Some(index) = self.position(id) else {
            log::debug!("Ignoring removal of unknown todo {}", id);
            return;
        };

        self.items.remove(index);
        log::debug!("Removed todo {} from index {}", id, index);

        if self.editing == Some(id) {
            self.editing = None;
            log::debug!("Edit of todo {} cancelled by removal", id);
        }

        self.event_bus.emit(TodoEvent::ItemRemoved { id, index });
    }

    /// Opens the item with `id` for editing, replacing any previous edit target.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] if no item has that id. The state is left untouched.
    pub fn begin_edit(&mut self, id: TodoId) -> TodoResult<()> {
        let Some(index) = self.position(id) else {
            log::warn!("Cannot edit unknown todo {}", id);
            return Err(TodoError::NotFound(id));
        };

        self.editing = Some(id);
        log::debug!("Editing todo {} at index {}", id, index);
        self.event_bus.emit(TodoEvent::EditStarted { id, index });
        Ok(())
    }

    /// The item currently open for editing
    pub fn current_edit_item(&self) -> Option<&TodoItem> {
        self.editing.and_then(|id| self.get(id))
    }

    /// Position of the item currently open for editing
    pub fn editing_index(&self) -> Option<usize> {
        self.editing.and_then(|id| self.position(id))
    }

    pub fn is_editing(&self) -> bool {
        self.current_edit_item().is_some()
    }

    /// Replaces the description and/or icon of the item being edited. The id never changes.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IllegalState`] when no item is being edited.
    pub fn update_editing_item(
        &mut self,
        description: Option<String>,
        icon: Option<TodoIcon>,
    ) -> TodoResult<()> {
        let Some(index) = self.editing_index() else {
            log::warn!("Rejected update: no todo is being edited");
            return Err(TodoError::IllegalState(
                "no item is currently being edited".to_string(),
            ));
        };

        let item = &mut self.items[index];
        let id = item.id();
        if let Some(description) = description {
            item.set_description(description);
        }
        if let Some(icon) = icon {
            item.set_icon(icon);
        }
        debug_assert_eq!(item.id(), id);

        log::debug!("Updated todo {}", id);
        self.event_bus.emit(TodoEvent::ItemUpdated { id });
        Ok(())
    }

    /// Closes the current edit, if any
    pub fn end_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            log::debug!("Finished editing todo {}", id);
            self.event_bus.emit(TodoEvent::EditEnded { id });
        }
    }
}
