//! Settings screen — profile row and sectioned menu.

use egui::Ui;

use crate::config::Config;
use crate::state::{AppState, SettingsItem, SETTINGS_SECTIONS};
use crate::ui;

/// Render the settings screen.
pub fn show(ui: &mut Ui, state: &mut AppState, config: &Config) {
    ui.add_space(10.0);

    for (section_index, section) in SETTINGS_SECTIONS.iter().enumerate() {
        if let Some(header) = section.header {
            ui.label(
                egui::RichText::new(header)
                    .small()
                    .color(egui::Color32::GRAY),
            );
            ui.add_space(2.0);
        }

        ui.group(|ui| {
            ui.set_min_width(ui.available_width());

            for (entry_index, item) in section.entries.iter().enumerate() {
                match item {
                    SettingsItem::Profile => profile_row(ui, config),
                    SettingsItem::Link { label, icon } => {
                        if link_row(ui, label, icon) {
                            state.open_settings_entry(section_index, entry_index);
                        }
                    }
                }
            }
        });

        ui.add_space(12.0);
    }
}

/// The static profile row, filled from config.
fn profile_row(ui: &mut Ui, config: &Config) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(ui::icon_glyph("person.crop.circle.fill")).size(40.0));
        ui.add_space(8.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&config.profile_name).size(16.0).strong());
            ui.label(
                egui::RichText::new(&config.profile_email).color(egui::Color32::GRAY),
            );
        });
    });
}

/// One tappable menu row. Returns true when clicked.
fn link_row(ui: &mut Ui, label: &str, icon: &str) -> bool {
    let text = format!("{}  {}", ui::icon_glyph(icon), label);
    let button = egui::Button::new(egui::RichText::new(text).size(14.0))
        .frame(false)
        .min_size(egui::vec2(ui.available_width(), 28.0));
    ui.add(button).clicked()
}
