//! Plain text reports

use std::fmt::Write;
use chrono::NaiveDateTime;

use crate::stats::{TagAge, TagCount};
use crate::timestamps::format_timestamp;

pub fn summary(photo_count: usize, tag_count: usize, tags: &[TagCount]) -> String {
    let mut out = format!("Photo count {}\nTag count {}\n", photo_count, tag_count);
    for t in tags {
        let _ = writeln!(out, "{} {}", t.tag, t.count);
    }
    out
}

/// Two aligned columns, counts right-justified
pub fn related(tags: &[TagCount]) -> String {
    let name_width = tags.iter().map(|t| t.tag.chars().count()).max().unwrap_or(0);
    let count_width = tags.iter().map(|t| t.count.to_string().len()).max().unwrap_or(0);

    let mut out = String::new();
    for t in tags {
        let _ = writeln!(
            out,
            "{:<name_width$}    {:>count_width$}",
            t.tag,
            t.count,
            name_width = name_width,
            count_width = count_width
        );
    }
    out
}

pub fn filenames(filenames: &[String]) -> String {
    format!("{}\n", filenames.join(" "))
}

pub fn dates(dates: &[NaiveDateTime]) -> String {
    let mut out = String::new();
    for d in dates {
        out.push_str(&format_timestamp(d));
        out.push('\n');
    }
    out
}

pub fn age(age: &TagAge) -> String {
    format!("days since last photo given tag {} - {}\n", age.tag, age.days)
}

pub fn all_ages(ages: &[TagAge]) -> String {
    let mut out = String::from("Days since last photo\n");
    for a in ages {
        let _ = writeln!(out, "({}, {})", a.tag, a.days);
    }
    out
}
