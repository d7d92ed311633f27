//! Application struct — the eframe::App implementation.
//!
//! Thin wrapper: routes the navigation stack to view modules. No async,
//! no services; every screen is re-rendered from plain state each frame.

use crate::cards::SampleCards;
use crate::config::Config;
use crate::state::{settings_entry_label, AppState, Screen};
use crate::transactions::RandomAmounts;
use crate::view;

/// The card wallet application.
pub struct App {
    state: AppState,
    config: Config,
    generator: RandomAmounts,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        setup_style(&cc.egui_ctx);
        log::info!("Card wallet started");

        Self {
            state: AppState::new(&SampleCards::new()),
            config,
            generator: RandomAmounts,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top navigation bar: back arrow past the root, burger on the root.
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if self.state.can_go_back() {
                    if ui
                        .button(egui::RichText::new("←").size(18.0))
                        .clicked()
                    {
                        self.state.back();
                    }
                } else if ui
                    .button(egui::RichText::new("☰").size(18.0))
                    .clicked()
                {
                    self.state.open_settings();
                }

                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(self.state.title()).size(16.0).strong());
                });
            });
            ui.add_space(4.0);
        });

        // Central panel — route to the active view.
        egui::CentralPanel::default().show(ctx, |ui| match self.state.screen() {
            Screen::Wallet => {
                view::wallet::show(ui, &mut self.state, &mut self.generator);
            }
            Screen::CardDetail { .. } => {
                view::card_detail::show(ui, &self.state);
            }
            Screen::Settings => {
                view::settings::show(ui, &mut self.state, &self.config);
            }
            Screen::SettingsEntry { section, entry } => {
                view::placeholder::show(ui, settings_entry_label(section, entry));
            }
        });
    }
}

/// Setup fonts and spacing.
fn setup_style(ctx: &egui::Context) {
    ctx.set_fonts(egui::FontDefinitions::default());
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing.y = 6.0;
    ctx.set_style(style);
}
