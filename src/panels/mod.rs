mod debug_window;
mod entry_panel;
mod footer_panel;
mod list_panel;

pub use debug_window::debug_window;
pub use entry_panel::entry_panel;
pub use footer_panel::footer_panel;
pub use list_panel::list_panel;
