use crate::TodoApp;
use crate::app::TodoAction;
use crate::components::icon_row;

/// Top row: new-item input, or an "Editing Item" header while an edit is open
pub fn entry_panel(app: &mut TodoApp, ctx: &egui::Context, actions: &mut Vec<TodoAction>) {
    egui::TopBottomPanel::top("entry_panel").show(ctx, |ui| {
        ui.add_space(8.0);

        if app.state.is_editing() {
            ui.vertical_centered(|ui| {
                ui.heading("Editing Item");
            });
            ui.add_space(8.0);
            return;
        }

        let mut submit = false;
        ui.horizontal(|ui| {
            let can_add = app.draft.is_submittable();
            let input_width = ui.available_width() - 60.0;
            let input = ui.add(
                egui::TextEdit::singleline(&mut app.draft.text)
                    .hint_text("New task")
                    .desired_width(input_width),
            );
            if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            if ui.add_enabled(can_add, egui::Button::new("Add")).clicked() {
                submit = true;
            }
        });

        if app.draft.is_submittable() {
            if let Some(icon) = icon_row(ui, app.draft.icon) {
                app.draft.icon = icon;
            }
        }

        if submit {
            if let Some(action) = app.draft.submit() {
                actions.push(action);
            }
        }
        ui.add_space(8.0);
    });
}
