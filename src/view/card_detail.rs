//! Card detail screen — card face, pulse ring and mock history.

use egui::Ui;

use crate::state::AppState;
use crate::ui;

/// Render the detail screen for the currently open card.
pub fn show(ui: &mut Ui, state: &AppState) {
    let Some(card) = state.current_card() else {
        return;
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            let response = ui::card_face(ui, card);

            if let Some(started) = state.pulse_started {
                let elapsed = started.elapsed().as_secs_f32();
                ui::pulse_ring(ui.painter(), response.rect, elapsed);
                // Keep the pulse moving while the screen is visible.
                ui.ctx().request_repaint();
            }

            ui.add_space(24.0);
        });

        // Center a fixed-width column for the history, card-aligned.
        ui.horizontal(|ui| {
            let pad = ((ui.available_width() - ui::CARD_SIZE.x) / 2.0).max(0.0);
            ui.add_space(pad);

            ui.vertical(|ui| {
                ui.set_width(ui::CARD_SIZE.x);

                ui.label(egui::RichText::new(&card.name).size(20.0).strong());
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Historial de transacciones")
                        .size(14.0)
                        .strong()
                        .color(egui::Color32::GRAY),
                );
                ui.add_space(8.0);

                for row in &state.history {
                    ui.horizontal(|ui| {
                        ui.label(row.label());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(row.amount_text())
                                    .color(egui::Color32::GRAY),
                            );
                        });
                    });
                    ui.separator();
                }
            });
        });
    });
}
