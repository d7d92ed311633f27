mod app;
mod cards;
mod config;
mod state;
mod transactions;
mod ui;
mod view;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = config::Config::load().unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wallet",
        options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config)))),
    )
}
