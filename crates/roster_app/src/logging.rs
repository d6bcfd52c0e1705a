//! Terminal logging initialization for roster_app.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Initialize the terminal logger.
///
/// Logs go to stderr so the rendered roster stays alone on stdout. This
/// safely no-ops if another logger has already been initialized.
pub fn initialize() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        build_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
