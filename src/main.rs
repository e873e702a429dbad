// MailTriage - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading (before logging, so it can set the level)
// 3. Logging initialisation (debug mode support)
// 4. HTTP transport construction
// 5. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use mailtriage::app;

pub use mailtriage::core;
pub use mailtriage::platform;
pub use mailtriage::ui;
pub use mailtriage::util;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Apply the configured theme and body font size.
fn configure_style(ctx: &egui::Context, config: &platform::config::AppConfig) {
    ctx.set_visuals(if config.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let size = config.font_size;
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => size * 1.4,
                egui::TextStyle::Small => size * 0.75,
                _ => size,
            };
        }
    });
}

/// MailTriage - Email classification client.
///
/// Paste an email or pick a .txt/.pdf file, send it to the analysis
/// service and read back its category, priority and a suggested reply.
#[derive(Parser, Debug)]
#[command(name = "MailTriage", version, about)]
struct Cli {
    /// Analysis endpoint URL (overrides config.toml).
    #[arg(short = 'e', long = "endpoint")]
    endpoint: Option<String>,

    /// Prefill the text panel with a built-in sample
    /// (status, suporte, natal, agradecimento).
    #[arg(long = "example")]
    example: Option<String>,

    /// Explicit config file (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config comes first: it may carry the log level.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "MailTriage starting"
    );

    for err in &config_warnings {
        tracing::warn!(error = %err, "Config warning");
    }

    let transport = match platform::http::connect(&config, cli.endpoint) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "Failed to set up the analysis transport");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        endpoint = transport.endpoint(),
        timeout_secs = config.timeout_secs,
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([480.0, 420.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let endpoint = transport.endpoint().to_string();
    let example = cli.example;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_style(&cc.egui_ctx, &config);

            let mut app = gui::MailTriageApp::new(&cc.egui_ctx, Arc::new(transport), endpoint);
            let now = Instant::now();
            if let Some(key) = example {
                app.controller.dispatch(app::controller::Command::Prefill(key), now);
            }
            if let Some(first) = config_warnings.first() {
                app.controller.state.banner.show(
                    util::error::ErrorKind::Local,
                    format!("Configuration problem: {first}"),
                    now,
                );
            }
            Ok(Box::new(app))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch MailTriage GUI: {e}");
        std::process::exit(1);
    }
}
