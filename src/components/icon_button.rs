use eframe::egui;
use crate::item::TodoIcon;

/// Square button showing a single [`TodoIcon`] glyph
pub struct IconButton {
    pub icon: TodoIcon,
    pub selected: bool,
}

impl IconButton {
    pub fn new(icon: TodoIcon, selected: bool) -> Self {
        Self { icon, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.visuals();
            let bg_color = if self.selected {
                visuals.selection.bg_fill
            } else if response.hovered() {
                visuals.widgets.hovered.weak_bg_fill
            } else {
                visuals.widgets.inactive.weak_bg_fill
            };
            let text_color = if self.selected {
                visuals.selection.stroke.color
            } else {
                visuals.text_color()
            };
            let border = visuals.selection.stroke;

            ui.painter().rect_filled(rect, 4.0, bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon.glyph(),
                egui::FontId::proportional(20.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(rect, 4.0, border);
            }
        }

        response.on_hover_text(self.icon.description())
    }
}

/// Row of icon buttons. Returns the icon clicked this frame, if any.
pub fn icon_row(ui: &mut egui::Ui, selected: TodoIcon) -> Option<TodoIcon> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for icon in TodoIcon::ALL {
            if IconButton::new(icon, icon == selected).show(ui).clicked() {
                clicked = Some(icon);
            }
        }
    });
    clicked
}
