mod api;
mod app;
mod config;
mod paths;
mod router;
mod session;
mod ui;

use crate::api::HttpProjectApi;
use crate::app::Sliverhand;
use crate::config::load_cfg;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sliverhand=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let mut api_url = None;
    if let Some(url_index) = args.iter().position(|arg| arg == "--api-url") {
        if let Some(next_arg) = args.get(url_index + 1) {
            api_url = Some(next_arg.clone());
        } else {
            eprintln!("{}", USAGE_TEXT);
            std::process::exit(1);
        }
    }

    let mut options = load_cfg();
    options.apply_env_overrides();
    options.apply_overrides(api_url, None);
    if args.iter().any(|arg| arg == "--fullscreen") {
        options.fullscreen = true;
    }

    let api = match HttpProjectApi::new(
        &options.api_base_url,
        options.request_timeout(),
        options.credentials.clone(),
    ) {
        Ok(api) => api,
        Err(e) => {
            error!(error = %e, "failed to build the API client");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Sliverhand")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([360.0, 420.0])
            .with_fullscreen(options.fullscreen),
        ..Default::default()
    };

    info!(api = %options.api_base_url, "starting Sliverhand");

    eframe::run_native(
        "Sliverhand",
        native_options,
        Box::new(|cc| {
            crate::ui::theme::apply_theme(&cc.egui_ctx);

            Ok(Box::new(Sliverhand::new(options, Box::new(api))))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: sliverhand [OPTIONS]

Options:
    --api-url <url>       Base URL of the Sliverhand API (overrides settings and SLIVERHAND_API_URL)
    --fullscreen          Start the GUI in fullscreen mode
    --help                Print this message

Environment:
    SLIVERHAND_API_URL    Base URL of the Sliverhand API
    SLIVERHAND_API_KEY    API key used instead of the stored one
    RUST_LOG              Log filter, defaults to sliverhand=info
"#;
