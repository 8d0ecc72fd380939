mod alerts;
mod cli;
mod context;

use std::path::Path;

use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("emberline=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "emberline=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Emberline v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {path}");
            emberline_config::load_from_path(Path::new(path))
        }
        None => emberline_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        emberline_config::EmberlineConfig::default()
    });
    tracing::info!("Config loaded (theme: {})", config.appearance.theme);

    let ctx = context::AppContext::new(config);

    // Log the initial bridge payloads a rendering shell would consume.
    let about_vm = emberline_ui::about::project(&ctx.about.snapshot());
    let notes_vm = emberline_ui::location_notes::project(&ctx.location_notes.snapshot());
    let sheet_vm = emberline_ui::user_sheet::project(&ctx.user_sheet.snapshot());

    tracing::info!(
        "about: {}",
        serde_json::to_string(&about_vm).unwrap_or_default()
    );
    tracing::info!(
        "location notes: {}",
        serde_json::to_string(&notes_vm).unwrap_or_default()
    );
    tracing::info!(
        "user sheet: {}",
        serde_json::to_string(&sheet_vm).unwrap_or_default()
    );

    tracing::info!("No transport attached; presentation core is ready. Exiting.");
}
