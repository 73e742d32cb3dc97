//! Banco Express: a desktop client for bank-to-bank transfers

use eframe::egui;

mod app;
mod nav;
mod ui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Banco Express");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Banco Express")
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([520.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Banco Express",
        native_options,
        Box::new(|cc| {
            let config = banco_transfer_adapters::TransferClientConfig::default();
            let app = app::App::new(cc, config)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
            Ok(Box::new(app) as Box<dyn eframe::App>)
        }),
    )
}
