//! Capture time reconstruction from photo filenames
//!
//! Phones and messaging apps each name photos their own way. Every name is
//! pushed through an ordered list of rewrites until it reads
//! `YYYYMMDD_HHMMSS`, then parsed strictly. The rewrites are not
//! commutative: the messaging and counter forms must be rewritten before
//! the generic "letters_" prefix strip, otherwise they leave behind a shape
//! that no longer parses or parses to the wrong time.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Layout every name must reach before parsing.
pub const CANONICAL_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Layout used when listing dates.
pub const DISPLAY_FORMAT: &str = "%Y %d %b %H:%M";

/// Characters removed from the end of the final path segment.
const EXTENSION_LEN: usize = 4;

static CANONICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8}_[0-9]{6}$").unwrap());

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("Unrecognized filename {path:?}: normalized to {normalized:?}, expected YYYYMMDD_HHMMSS")]
    UnrecognizedName { path: String, normalized: String },

    #[error("Invalid date in filename {path:?} ({normalized:?}): {source}")]
    InvalidDateTime {
        path: String,
        normalized: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Filename conventions the rewrite chain knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `(1)` style copy markers, anywhere in the name
    DuplicateMarker,
    /// `IMG-20210615-WA0003`, no time of day
    WhatsApp,
    /// `IMG_20210615_123456_2`, trailing burst counter
    CameraCounter,
    /// `signal-2021-06-15-123456`
    Signal,
    /// `WP_20160315_14_22_05_Pro`
    WindowsPhonePro,
    /// `WP_20160315_001`, no time of day
    WindowsPhone,
    /// `IMG_20210615_123456`, `VID_...`, `Foo-Bar_...` and stacked prefixes
    PrefixedDateTime,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::DuplicateMarker => "duplicate_marker",
            Dialect::WhatsApp => "whatsapp",
            Dialect::CameraCounter => "camera_counter",
            Dialect::Signal => "signal",
            Dialect::WindowsPhonePro => "windows_phone_pro",
            Dialect::WindowsPhone => "windows_phone",
            Dialect::PrefixedDateTime => "prefixed_date_time",
        }
    }
}

/// One step of the chain: every match of `pattern` is replaced
pub struct RewriteRule {
    pub dialect: Dialect,
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl RewriteRule {
    fn new(dialect: Dialect, pattern: &str, replacement: &'static str) -> Self {
        Self {
            dialect,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

/// The rewrite chain, in the order it is applied.
///
/// `WindowsPhonePro` glues its three two-digit groups into the time field
/// as they stand; whatever they meant on the device, that is what is kept.
pub static REWRITE_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::new(Dialect::DuplicateMarker, r"\(\d\)", ""),
        RewriteRule::new(Dialect::WhatsApp, r"IMG-(\d+?)-WA\d+", "${1}_000000"),
        RewriteRule::new(Dialect::CameraCounter, r"IMG_(\d+?)_(\d+?)_\d+", "${1}_${2}"),
        RewriteRule::new(
            Dialect::Signal,
            r"signal-(\d\d\d\d)-(\d\d)-(\d\d)-(\d\d\d\d\d\d)",
            "${1}${2}${3}_${4}",
        ),
        RewriteRule::new(
            Dialect::WindowsPhonePro,
            r"WP_(\d+?)_(\d\d)_(\d\d)_(\d\d)_Pro",
            "${1}_${2}${3}${4}",
        ),
        RewriteRule::new(Dialect::WindowsPhone, r"WP_(\d+?)_\d+", "${1}_000000"),
        RewriteRule::new(
            Dialect::PrefixedDateTime,
            r"([A-Z,a-z,-]+_)+(\d+)_(\d+)",
            "${2}_${3}",
        ),
    ]
});

/// Final path segment without its extension.
///
/// Assumes a three letter extension: exactly four characters are cut, so
/// `.jpeg` leaves a stray `.` behind and names shorter than four characters
/// come out empty.
pub fn strip_path(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    let cut = name
        .char_indices()
        .rev()
        .nth(EXTENSION_LEN - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &name[..cut]
}

/// Run a bare name through every rewrite, in order
pub fn normalize_name(name: &str) -> String {
    let mut current = name.to_string();
    for rule in REWRITE_RULES.iter() {
        let rewritten = rule.pattern.replace_all(&current, rule.replacement);
        if rewritten != current {
            debug!(dialect = rule.dialect.as_str(), from = %current, to = %rewritten, "Rewrote filename");
            current = rewritten.into_owned();
        }
    }
    current
}

/// Parse a normalized name. `path` is only used for error reporting.
pub fn parse_canonical(path: &str, normalized: &str) -> Result<NaiveDateTime, TimestampError> {
    if !CANONICAL.is_match(normalized) {
        return Err(TimestampError::UnrecognizedName {
            path: path.to_string(),
            normalized: normalized.to_string(),
        });
    }

    NaiveDateTime::parse_from_str(normalized, CANONICAL_FORMAT).map_err(|source| {
        TimestampError::InvalidDateTime {
            path: path.to_string(),
            normalized: normalized.to_string(),
            source,
        }
    })
}

/// Capture time of a single file path
pub fn reconstruct_one(path: &str) -> Result<NaiveDateTime, TimestampError> {
    let normalized = normalize_name(strip_path(path));
    parse_canonical(path, &normalized)
}

/// Capture times for all `paths`, ascending.
///
/// The first name that cannot be reconstructed fails the whole batch.
pub fn reconstruct<'a, I>(paths: I) -> Result<Vec<NaiveDateTime>, TimestampError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut dates = paths
        .into_iter()
        .map(reconstruct_one)
        .collect::<Result<Vec<_>, _>>()?;
    dates.sort();
    Ok(dates)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}
