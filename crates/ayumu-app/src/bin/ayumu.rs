//! Ayumu memory game desktop application.

use ayumu_app::{
    AyumuApp,
    config::{AppConfig, Args},
    ui::layout::canvas_size,
};
use clap::Parser as _;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "ayumu-memory-game";

    better_panic::install();
    env_logger::init();

    let config = AppConfig::from(Args::parse());
    log::info!("ayumu {}", ayumu_app::version::build_version());

    let size = canvas_size(&config.layout);
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size(size)
            .with_min_inner_size(size / 2.0),
        ..Default::default()
    };
    eframe::run_native(
        "Ayumu Memory Game",
        options,
        Box::new(move |cc| Ok(Box::new(AyumuApp::new(cc, &config)))),
    )
}
