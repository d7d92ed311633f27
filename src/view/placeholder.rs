//! Placeholder destinations for settings menu entries.

use egui::Ui;

/// Render a placeholder screen showing the entry's label.
pub fn show(ui: &mut Ui, label: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.label(
            egui::RichText::new(label)
                .size(18.0)
                .color(egui::Color32::GRAY),
        );
    });
}
