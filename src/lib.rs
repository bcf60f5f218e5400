//! shotwell-tags - tag statistics and photo timelines from a Shotwell library
//!
//! The library database sits behind the `PhotoStore` trait; everything past
//! the load works on an immutable in-memory `Catalog`.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod mocks;
pub mod photo_id;
pub mod production;
pub mod report;
pub mod stats;
pub mod timestamps;
pub mod traits;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use catalog::Catalog;
pub use cli::{Cli, Mode};
pub use config::{OutputFormat, ReportConfig};
pub use production::ShotwellDatabase;

/// Initialize logging to stderr; stdout is reserved for reports
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "shotwell_tags=debug,shotwell_tags_lib=debug"
    } else {
        "shotwell_tags=warn,shotwell_tags_lib=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the library once and produce the rendered report for `cli`
pub fn build_output(cli: &Cli, config: &ReportConfig) -> anyhow::Result<String> {
    let catalog = {
        let db = ShotwellDatabase::new(&config.db_path);
        tracing::info!(path = %db.path().display(), "Reading Shotwell library");
        Catalog::load(&db)
            .with_context(|| format!("Failed to read {}", config.db_path.display()))?
    };

    let report = commands::execute(&cli.mode(), &catalog, config)?;

    let output = match config.format {
        OutputFormat::Text => report.render_text(config.render_options()),
        OutputFormat::Json => {
            let mut json = report.render_json()?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}

/// Entry point used by the binary
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ReportConfig::resolve(&cli, |key| std::env::var(key).ok())?;
    let output = build_output(&cli, &config)?;
    print!("{}", output);
    Ok(())
}
