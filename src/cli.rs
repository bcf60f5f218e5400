//! Command-line arguments

use std::path::PathBuf;
use chrono::NaiveDate;
use clap::{ArgGroup, Parser};

use crate::config::OutputFormat;

/// Command-line arguments for shotwell-tags
#[derive(Parser, Debug)]
#[command(name = "shotwell-tags")]
#[command(about = "Shotwell Tags Inspector.")]
#[command(after_help = "If Tag not specified generates a report on all Tags.")]
#[command(version)]
#[command(group(ArgGroup::new("mode").args(["related", "filenames", "dates", "calendar", "age"])))]
pub struct Cli {
    /// Shotwell library database (photo.db)
    #[arg(long, env = "SHOTWELL_DB")]
    pub db: Option<PathBuf>,

    /// Photo-id token prefix to decode
    #[arg(long, default_value = crate::photo_id::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored charts
    #[arg(long)]
    pub no_color: bool,

    /// Measure ages from this day instead of now
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// show related tags given a tag
    #[arg(short = 'r', value_name = "Tag")]
    pub related: Option<String>,

    /// show filenames given a tag
    #[arg(short = 'f', value_name = "Tag")]
    pub filenames: Option<String>,

    /// show dates given a tag
    #[arg(short = 'd', value_name = "Tag")]
    pub dates: Option<String>,

    /// show calendar given a tag
    #[arg(long = "cal", value_name = "Tag")]
    pub calendar: Option<String>,

    /// days since last photo taken given a tag, or "all"
    #[arg(long, value_name = "Tag")]
    pub age: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeTarget {
    All,
    Tag(String),
}

/// The single report an invocation produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Summary,
    Related(String),
    Filenames(String),
    Dates(String),
    Calendar(String),
    Age(AgeTarget),
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if let Some(tag) = &self.related {
            Mode::Related(tag.clone())
        } else if let Some(tag) = &self.filenames {
            Mode::Filenames(tag.clone())
        } else if let Some(tag) = &self.dates {
            Mode::Dates(tag.clone())
        } else if let Some(tag) = &self.calendar {
            Mode::Calendar(tag.clone())
        } else if let Some(tag) = &self.age {
            if tag == "all" {
                Mode::Age(AgeTarget::All)
            } else {
                Mode::Age(AgeTarget::Tag(tag.clone()))
            }
        } else {
            Mode::Summary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("shotwell-tags").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_flags_is_summary() {
        assert_eq!(parse(&[]).unwrap().mode(), Mode::Summary);
    }

    #[test]
    fn test_modes() {
        assert_eq!(parse(&["-r", "flower"]).unwrap().mode(), Mode::Related("flower".into()));
        assert_eq!(parse(&["-f", "flower"]).unwrap().mode(), Mode::Filenames("flower".into()));
        assert_eq!(parse(&["-d", "flower"]).unwrap().mode(), Mode::Dates("flower".into()));
        assert_eq!(parse(&["--cal", "flower"]).unwrap().mode(), Mode::Calendar("flower".into()));
        assert_eq!(parse(&["--age", "all"]).unwrap().mode(), Mode::Age(AgeTarget::All));
        assert_eq!(
            parse(&["--age", "veg"]).unwrap().mode(),
            Mode::Age(AgeTarget::Tag("veg".into()))
        );
    }

    #[test]
    fn test_modes_are_exclusive() {
        let err = parse(&["-r", "flower", "-d", "veg"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_today_must_be_a_date() {
        assert!(parse(&["--today", "2021-02-01"]).is_ok());
        assert!(parse(&["--today", "yesterday"]).is_err());
    }
}
