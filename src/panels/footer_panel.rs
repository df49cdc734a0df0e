use crate::TodoApp;
use crate::app::TodoAction;

pub fn footer_panel(app: &TodoApp, ctx: &egui::Context, now: f64, actions: &mut Vec<TodoAction>) {
    egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
        ui.add_space(8.0);

        if let Some(text) = app.notice(now) {
            ui.label(text);
        }

        let size = egui::vec2(ui.available_width(), 32.0);
        if ui.add_sized(size, egui::Button::new("Add random item")).clicked() {
            actions.push(TodoAction::AddRandom);
        }

        ui.horizontal(|ui| {
            ui.label(format!("{} items", app.state.len()));
            let debug_open = app.config.show_debug_window;
            if ui.selectable_label(debug_open, "Debug").clicked() {
                actions.push(TodoAction::ToggleDebugWindow);
            }
        });
        ui.add_space(8.0);
    });
}
