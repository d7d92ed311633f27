//! Wallet screen — the tappable card list.

use egui::Ui;

use crate::state::AppState;
use crate::transactions::TransactionGenerator;
use crate::ui;

/// Render the wallet screen: one card face per card, in list order.
pub fn show(ui: &mut Ui, state: &mut AppState, generator: &mut dyn TransactionGenerator) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);

            let mut tapped = None;
            for (index, card) in state.cards.iter().enumerate() {
                let response = ui::card_face(ui, card).on_hover_cursor(egui::CursorIcon::PointingHand);
                if response.clicked() {
                    tapped = Some(index);
                }
                ui.add_space(20.0);
            }

            if let Some(index) = tapped {
                state.open_card(index, generator);
            }
        });
    });
}
