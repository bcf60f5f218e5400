//! One function per report, each returning a complete `Report`

use tracing::info;

use crate::catalog::Catalog;
use crate::cli::{AgeTarget, Mode};
use crate::config::ReportConfig;
use crate::photo_id::PhotoIdDecoder;
use crate::report::Report;
use crate::stats::{self, ReportError};

/// Tag counts over the whole library
pub fn summary(catalog: &Catalog) -> Report {
    Report::Summary {
        photo_count: catalog.photos().len(),
        tag_count: stats::tag_count(catalog),
        tags: stats::tag_counts(catalog),
    }
}

pub fn related(catalog: &Catalog, tag: &str) -> Report {
    Report::Related {
        tag: tag.to_string(),
        tags: stats::related_tags(catalog, tag),
    }
}

pub fn filenames(
    catalog: &Catalog,
    decoder: &PhotoIdDecoder,
    tag: &str,
) -> Result<Report, ReportError> {
    let filenames = catalog
        .photos_for(tag, decoder)?
        .into_iter()
        .map(|p| p.filename.clone())
        .collect();
    Ok(Report::Filenames {
        tag: tag.to_string(),
        filenames,
    })
}

pub fn dates(catalog: &Catalog, decoder: &PhotoIdDecoder, tag: &str) -> Result<Report, ReportError> {
    let dates = stats::dates_for_tag(catalog, decoder, tag)?;
    let per_day = stats::daily_counts(&dates);
    Ok(Report::Dates {
        tag: tag.to_string(),
        dates,
        per_day,
    })
}

pub fn calendar(
    catalog: &Catalog,
    decoder: &PhotoIdDecoder,
    tag: &str,
) -> Result<Report, ReportError> {
    let dates = stats::dates_for_tag(catalog, decoder, tag)?;
    let per_day = stats::daily_counts(&dates);
    Ok(Report::Calendar {
        tag: tag.to_string(),
        dates,
        per_day,
    })
}

pub fn age(
    catalog: &Catalog,
    decoder: &PhotoIdDecoder,
    target: &AgeTarget,
    now: chrono::NaiveDateTime,
) -> Result<Report, ReportError> {
    match target {
        AgeTarget::All => Ok(Report::AllAges {
            ages: stats::all_tag_ages(catalog, decoder, now)?,
        }),
        AgeTarget::Tag(tag) => Ok(Report::Age(stats::tag_age(catalog, decoder, tag, now)?)),
    }
}

/// Run the report selected by `mode`
pub fn execute(mode: &Mode, catalog: &Catalog, config: &ReportConfig) -> Result<Report, ReportError> {
    info!(mode = ?mode, "Building report");
    let decoder = config.decoder();
    match mode {
        Mode::Summary => Ok(summary(catalog)),
        Mode::Related(tag) => Ok(related(catalog, tag)),
        Mode::Filenames(tag) => filenames(catalog, &decoder, tag),
        Mode::Dates(tag) => dates(catalog, &decoder, tag),
        Mode::Calendar(tag) => calendar(catalog, &decoder, tag),
        Mode::Age(target) => age(catalog, &decoder, target, config.reference_time()),
    }
}
