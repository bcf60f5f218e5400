//! Report values and their console rendering
//!
//! Commands build a complete `Report` before anything is printed, so a
//! failure never leaves half a report on stdout.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::stats::{DayCount, TagAge, TagCount};

pub mod calendar;
pub mod chart;
pub mod text;

/// Output produced by one invocation
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Summary {
        photo_count: usize,
        tag_count: usize,
        tags: Vec<TagCount>,
    },
    Related {
        tag: String,
        tags: Vec<TagCount>,
    },
    Filenames {
        tag: String,
        filenames: Vec<String>,
    },
    Dates {
        tag: String,
        dates: Vec<NaiveDateTime>,
        per_day: Vec<DayCount>,
    },
    Calendar {
        tag: String,
        dates: Vec<NaiveDateTime>,
        per_day: Vec<DayCount>,
    },
    Age(TagAge),
    AllAges {
        ages: Vec<TagAge>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit 24-bit ANSI colors
    pub color: bool,
}

impl Report {
    pub fn render_text(&self, options: RenderOptions) -> String {
        match self {
            Report::Summary {
                photo_count,
                tag_count,
                tags,
            } => text::summary(*photo_count, *tag_count, tags),
            Report::Related { tags, .. } => text::related(tags),
            Report::Filenames { filenames, .. } => text::filenames(filenames),
            Report::Dates {
                tag,
                dates,
                per_day,
            } => {
                let mut out = text::dates(dates);
                out.push_str(&chart::render(tag, per_day, options));
                out
            }
            Report::Calendar {
                tag,
                dates,
                per_day,
            } => {
                let mut out = text::dates(dates);
                out.push_str(&calendar::render(tag, per_day, options));
                out
            }
            Report::Age(age) => text::age(age),
            Report::AllAges { ages } => text::all_ages(ages),
        }
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// sRGB color used by the chart renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb`
    pub const fn hex(v: u32) -> Self {
        Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }
}

const RESET: &str = "\x1b[0m";

/// Wrap `s` in a background (and optional foreground) color
pub(crate) fn paint(s: &str, bg: Rgb, fg: Option<Rgb>) -> String {
    let mut out = format!("\x1b[48;2;{};{};{}m", bg.0, bg.1, bg.2);
    if let Some(fg) = fg {
        out.push_str(&format!("\x1b[38;2;{};{};{}m", fg.0, fg.1, fg.2));
    }
    out.push_str(s);
    out.push_str(RESET);
    out
}
