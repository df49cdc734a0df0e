use crate::TodoApp;
use crate::app::TodoAction;

/// Shows the raw collection state
pub fn debug_window(app: &mut TodoApp, ctx: &egui::Context, actions: &mut Vec<TodoAction>) {
    egui::Window::new("Todo Debug")
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.label(format!("Number of items: {}", app.state.len()));
            match app.state.editing_index() {
                Some(index) => ui.label(format!("Editing index: {}", index)),
                None => ui.label("Editing index: none"),
            };

            ui.separator();
            let mut notice_secs = app.config.notice_secs;
            if ui
                .add(egui::Slider::new(&mut notice_secs, 0.5..=10.0).text("Notice seconds"))
                .changed()
            {
                actions.push(TodoAction::SetNoticeSecs(notice_secs));
            }
            ui.add(egui::Slider::new(&mut app.config.seed_items, 0..=20).text("Items on startup"));

            ui.separator();
            egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                match serde_json::to_string_pretty(app.state.items()) {
                    Ok(json) => {
                        ui.code(json);
                    }
                    Err(e) => {
                        log::warn!("Failed to serialize items: {}", e);
                    }
                }
            });
        });
}
