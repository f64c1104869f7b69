mod app;
mod config;
mod constants;
mod state;
mod views;
mod wallet;

use constants::{
    APP_TITLE, FONT_FILE_PATH, FONT_NAME, FONT_SIZE_BODY, FONT_SIZE_BUTTON, FONT_SIZE_HEADING,
    FONT_SIZE_MONOSPACE, FONT_SIZE_SMALL, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use state::ClientApp;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = ClientApp::load()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            setup_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("視窗啟動失敗：{e}"))
}

fn setup_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    match std::fs::read(FONT_FILE_PATH) {
        Ok(font_data) => {
            fonts.font_data.insert(
                FONT_NAME.to_string(),
                Arc::new(egui::FontData::from_owned(font_data)),
            );

            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_insert_with(Vec::new)
                .insert(0, FONT_NAME.to_string());
            fonts
                .families
                .entry(egui::FontFamily::Monospace)
                .or_insert_with(Vec::new)
                .insert(0, FONT_NAME.to_string());
        }
        Err(e) => tracing::warn!(path = FONT_FILE_PATH, error = %e, "font not loaded"),
    }

    ctx.set_fonts(fonts);

    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(FONT_SIZE_HEADING, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(FONT_SIZE_BODY, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::new(FONT_SIZE_MONOSPACE, egui::FontFamily::Monospace),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::new(FONT_SIZE_BUTTON, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::new(FONT_SIZE_SMALL, egui::FontFamily::Proportional),
    );

    ctx.set_style(style);
}
