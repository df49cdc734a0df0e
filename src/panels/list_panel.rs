use crate::TodoApp;
use crate::app::TodoAction;
use crate::components::icon_row;
use crate::item::TodoItem;

pub fn list_panel(app: &TodoApp, ctx: &egui::Context, actions: &mut Vec<TodoAction>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let editing = app.state.current_edit_item().map(|item| item.id());

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for item in app.state.items() {
                    ui.push_id(item.id(), |ui| {
                        if editing == Some(item.id()) {
                            inline_editor(ui, item, actions);
                        } else {
                            todo_row(ui, item, app.tint(item.id()), actions);
                        }
                    });
                    ui.separator();
                }
            });
    });
}

/// A read-only row. Clicking it opens the item for editing.
fn todo_row(ui: &mut egui::Ui, item: &TodoItem, tint: f32, actions: &mut Vec<TodoAction>) {
    let response = ui
        .horizontal(|ui| {
            ui.label(item.description());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let color = ui.visuals().text_color().gamma_multiply(tint);
                ui.label(egui::RichText::new(item.icon().glyph()).color(color))
                    .on_hover_text(item.icon().description());
            });
        })
        .response
        .interact(egui::Sense::click());

    if response.clicked() {
        actions.push(TodoAction::StartEdit(item.id()));
    }
}

fn inline_editor(ui: &mut egui::Ui, item: &TodoItem, actions: &mut Vec<TodoAction>) {
    ui.horizontal(|ui| {
        // Edited in a scratch copy; the change is applied through an action
        let mut text = item.description().to_owned();
        let input_width = ui.available_width() - 80.0;
        let input = ui.add(egui::TextEdit::singleline(&mut text).desired_width(input_width));
        if input.changed() {
            actions.push(TodoAction::UpdateEdit {
                description: Some(text),
                icon: None,
            });
        }
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions.push(TodoAction::FinishEdit);
        }

        if ui.button("💾").on_hover_text("Save").clicked() {
            actions.push(TodoAction::FinishEdit);
        }
        if ui.button("❌").on_hover_text("Remove").clicked() {
            actions.push(TodoAction::Remove(item.id()));
        }
    });

    if let Some(icon) = icon_row(ui, item.icon()) {
        actions.push(TodoAction::UpdateEdit {
            description: None,
            icon: Some(icon),
        });
    }
}
