use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver};

use crate::config::AppConfig;
use crate::event::{LoggingEventHandler, TodoEvent};
use crate::item::{TodoIcon, TodoId};
use crate::notice::TransientFlag;
use crate::panels;
use crate::seed;
use crate::state::TodoState;
use crate::util::time;

/// Everything the user can ask the todo screen to do.
///
/// Panels collect these while drawing and the app applies them once layout is
/// done, so the state is never mutated while it is borrowed for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    Add { description: String, icon: TodoIcon },
    AddRandom,
    StartEdit(TodoId),
    UpdateEdit {
        description: Option<String>,
        icon: Option<TodoIcon>,
    },
    FinishEdit,
    Remove(TodoId),
    ToggleDebugWindow,
    SetNoticeSecs(f32),
}

/// Text and icon typed into the entry row but not yet added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub text: String,
    pub icon: TodoIcon,
}

impl EntryDraft {
    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Turns the draft into an add action and resets it
    pub fn submit(&mut self) -> Option<TodoAction> {
        if !self.is_submittable() {
            return None;
        }
        let draft = std::mem::take(self);
        Some(TodoAction::Add {
            description: draft.text,
            icon: draft.icon,
        })
    }
}

/// The todo screen
pub struct TodoApp {
    pub(crate) state: TodoState,
    pub(crate) config: AppConfig,
    pub(crate) draft: EntryDraft,
    tints: HashMap<TodoId, f32>,
    events: Receiver<TodoEvent>,
    notice: TransientFlag,
    notice_text: String,
}

impl TodoApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load(cc.storage);
        log::info!("Starting todo app with {:?}", config);
        Self::with_config(config)
    }

    /// Builds the app without an eframe context
    pub fn with_config(config: AppConfig) -> Self {
        let state = TodoState::seeded(config.seed_items, &mut rand::rng());

        let (sender, events) = mpsc::channel();
        state.event_bus().subscribe(Box::new(LoggingEventHandler::new()));
        state.event_bus().subscribe(Box::new(sender));

        let mut rng = rand::rng();
        let tints = state
            .items()
            .iter()
            .map(|item| (item.id(), seed::random_tint(&mut rng)))
            .collect();

        Self {
            state,
            notice: TransientFlag::new(f64::from(config.notice_secs)),
            config,
            draft: EntryDraft::default(),
            tints,
            events,
            notice_text: String::new(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut EntryDraft {
        &mut self.draft
    }

    /// Icon alpha for an item, fixed for the item's lifetime
    pub fn tint(&self, id: TodoId) -> f32 {
        self.tints.get(&id).copied().unwrap_or(1.0)
    }

    /// The notice text, while it is still showing
    pub fn notice(&self, now: f64) -> Option<&str> {
        self.notice
            .is_raised(now)
            .then_some(self.notice_text.as_str())
    }

    /// Applies one user action at time `now` (seconds)
    pub fn apply(&mut self, action: TodoAction, now: f64) {
        log::trace!("Applying {:?}", action);
        match action {
            TodoAction::Add { description, icon } => {
                self.state.add_item(description, Some(icon));
            }
            TodoAction::AddRandom => {
                let entry = seed::random_entry(&mut rand::rng());
                self.state.add_item(entry.description, Some(entry.icon));
            }
            TodoAction::StartEdit(id) => {
                if let Err(e) = self.state.begin_edit(id) {
                    log::warn!("Could not start editing: {}", e);
                }
            }
            TodoAction::UpdateEdit { description, icon } => {
                if let Err(e) = self.state.update_editing_item(description, icon) {
                    log::warn!("Could not update item: {}", e);
                }
            }
            TodoAction::FinishEdit => self.state.end_edit(),
            TodoAction::Remove(id) => self.state.remove_item(id),
            TodoAction::ToggleDebugWindow => {
                self.config.show_debug_window = !self.config.show_debug_window;
            }
            TodoAction::SetNoticeSecs(secs) => {
                self.config.notice_secs = secs;
                self.notice.set_duration(f64::from(secs));
            }
        }
        self.drain_events(now);
    }

    fn drain_events(&mut self, now: f64) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                TodoEvent::ItemAdded { id, .. } => {
                    self.tints
                        .insert(id, seed::random_tint(&mut rand::rng()));
                    let description = self
                        .state
                        .get(id)
                        .map(|item| item.description().to_owned())
                        .unwrap_or_default();
                    self.show_notice(format!("Added \"{}\"", description), now);
                }
                TodoEvent::ItemRemoved { id, .. } => {
                    self.tints.remove(&id);
                    self.show_notice("Item removed".to_owned(), now);
                }
                TodoEvent::EditStarted { .. }
                | TodoEvent::ItemUpdated { .. }
                | TodoEvent::EditEnded { .. } => {}
            }
        }
    }

    fn show_notice(&mut self, text: String, now: f64) {
        self.notice_text = text;
        self.notice.raise(now);
    }
}

impl eframe::App for TodoApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.config.save(storage);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = time::now_secs();
        self.notice.tick(now);

        let mut actions = Vec::new();
        panels::entry_panel(self, ctx, &mut actions);
        panels::footer_panel(self, ctx, now, &mut actions);
        panels::list_panel(self, ctx, &mut actions);
        if self.config.show_debug_window {
            panels::debug_window(self, ctx, &mut actions);
        }

        for action in actions {
            self.apply(action, now);
        }

        if let Some(left) = self.notice.remaining(now) {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(left));
        }
    }
}
