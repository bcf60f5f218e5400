//! Runtime configuration resolved from flags, environment and defaults

use std::path::PathBuf;
use chrono::{Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::cli::Cli;
use crate::photo_id::PhotoIdDecoder;
use crate::report::RenderOptions;

/// Shotwell's library database, relative to `$HOME`
pub const DEFAULT_DB_RELATIVE: &str = ".local/share/shotwell/data/photo.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No database given and HOME is not set; pass --db or set SHOTWELL_DB")]
    NoDatabase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub db_path: PathBuf,
    pub photo_id_prefix: String,
    pub format: OutputFormat,
    pub color: bool,
    /// Reference day for age reports; `None` means the current local time
    pub today: Option<NaiveDate>,
}

impl ReportConfig {
    /// Build from parsed flags. `env` looks up environment variables and is
    /// injectable for tests.
    pub fn resolve(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_path = match &cli.db {
            Some(path) => path.clone(),
            None => env("HOME")
                .map(|home| PathBuf::from(home).join(DEFAULT_DB_RELATIVE))
                .ok_or(ConfigError::NoDatabase)?,
        };

        let color = !cli.no_color
            && cli.format == OutputFormat::Text
            && env("NO_COLOR").map_or(true, |v| v.is_empty());

        tracing::debug!(db = %db_path.display(), prefix = %cli.prefix, color, "Resolved config");

        Ok(Self {
            db_path,
            photo_id_prefix: cli.prefix.clone(),
            format: cli.format,
            color,
            today: cli.today,
        })
    }

    pub fn decoder(&self) -> PhotoIdDecoder {
        PhotoIdDecoder::new(self.photo_id_prefix.clone())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { color: self.color }
    }

    /// The moment ages are measured from
    pub fn reference_time(&self) -> NaiveDateTime {
        match self.today {
            Some(day) => day.and_time(chrono::NaiveTime::MIN),
            None => Local::now().naive_local(),
        }
    }
}
