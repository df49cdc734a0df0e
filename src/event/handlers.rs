use crate::event::{EventHandler, TodoEvent};

/// Writes every event to the `log` facade at debug level
#[derive(Debug, Default)]
pub struct LoggingEventHandler {
    seen: usize,
}

impl LoggingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for LoggingEventHandler {
    fn handle_event(&mut self, event: &TodoEvent) {
        self.seen += 1;
        log::debug!("todo event #{}: {:?}", self.seen, event);
    }
}
