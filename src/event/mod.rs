mod bus;
mod events;
mod handlers;

pub use bus::{EventBus, SubscriptionId};
pub use events::TodoEvent;
pub use handlers::LoggingEventHandler;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &TodoEvent);
}

// Lets a presentation layer drain events on its own schedule
impl EventHandler for std::sync::mpsc::Sender<TodoEvent> {
    fn handle_event(&mut self, event: &TodoEvent) {
        // A dropped receiver only means nobody is listening any more
        let _ = self.send(event.clone());
    }
}
