use eframe::egui;
use single_track_player::app::PlayerApp;
use single_track_player::config::PlayerConfig;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), eframe::Error> {
    let (config, config_error) = PlayerConfig::load_or_default();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some((path, err)) = config_error {
        warn!(path = %path.display(), error = %err, "ignoring config, using defaults");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Audio Player",
        options,
        Box::new(|_cc| Ok(Box::new(PlayerApp::new(config)))),
    )
}
