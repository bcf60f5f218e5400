//! Photos-per-day bar chart with month bands

use std::fmt::Write;
use chrono::Datelike;

use super::{paint, RenderOptions, Rgb};
use crate::stats::DayCount;

/// Background band per month, January first
pub const MONTH_COLORS: [Rgb; 12] = [
    Rgb::hex(0xffa500),
    Rgb::hex(0xffee55),
    Rgb::hex(0xffee33),
    Rgb::hex(0xffcc33),
    Rgb::hex(0xffcc00),
    Rgb::hex(0xffcc22),
    Rgb::hex(0xffcc44),
    Rgb::hex(0xffaa33),
    Rgb::hex(0xffaa00),
    Rgb::hex(0xff8800),
    Rgb::hex(0xff8822),
    Rgb::hex(0xee8822),
];

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "July", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const BAR_COLOR: Rgb = Rgb::hex(0x002f4f);

/// Longest bar, in cells
const MAX_BAR: usize = 40;

/// Cells for `count` when the busiest day gets `MAX_BAR`
fn bar_len(count: usize, max: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    ((count * MAX_BAR + max - 1) / max).max(1)
}

/// One row per day. The day of month is only labelled on days with photos;
/// the month name marks the first row of each month band.
pub fn render(tag: &str, per_day: &[DayCount], options: RenderOptions) -> String {
    let mut out = format!("PhotoCount per Day - {}\n", tag);
    let max = per_day.iter().map(|d| d.count).max().unwrap_or(0);

    let mut previous_month = None;
    for d in per_day {
        let month = (d.day.year(), d.day.month0());
        let month_label = if previous_month != Some(month) {
            MONTH_NAMES[d.day.month0() as usize]
        } else {
            ""
        };
        previous_month = Some(month);

        let day_label = if d.count > 0 {
            d.day.day().to_string()
        } else {
            String::new()
        };
        let count_label = if d.count > 0 {
            d.count.to_string()
        } else {
            String::new()
        };

        let bar_char = if options.color { "█" } else { "#" };
        let bar = bar_char.repeat(bar_len(d.count, max));
        let row = format!(
            "{:<4} {:>2} {:<width$} {:>3}",
            month_label,
            day_label,
            bar,
            count_label,
            width = MAX_BAR
        );

        if options.color {
            out.push_str(&paint(&row, MONTH_COLORS[d.day.month0() as usize], Some(BAR_COLOR)));
            out.push('\n');
        } else {
            let _ = writeln!(out, "{}", row.trim_end());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const PLAIN: RenderOptions = RenderOptions { color: false };

    fn dc(m: u32, d: u32, count: usize) -> DayCount {
        DayCount {
            day: NaiveDate::from_ymd_opt(2021, m, d).unwrap(),
            count,
        }
    }

    #[test]
    fn test_bar_len_scales_to_max() {
        assert_eq!(bar_len(0, 5), 0);
        assert_eq!(bar_len(5, 5), MAX_BAR);
        assert_eq!(bar_len(1, 1000), 1);
    }

    #[test]
    fn test_plain_rows() {
        let out = render("flower", &[dc(1, 31, 2), dc(2, 1, 0), dc(2, 2, 1)], PLAIN);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "PhotoCount per Day - flower");
        assert!(lines[1].starts_with("Jan  31 ####"));
        assert!(lines[1].ends_with(" 2"));
        assert_eq!(lines[2], "Feb");
        assert!(lines[3].starts_with("      2 ####"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_july_label() {
        let out = render("t", &[dc(7, 4, 1)], PLAIN);
        assert!(out.lines().nth(1).unwrap().starts_with("July  4 #"));
    }

    #[test]
    fn test_color_rows_use_month_band() {
        let out = render("t", &[dc(1, 1, 1)], RenderOptions { color: true });
        assert!(out.contains("\x1b[48;2;255;165;0m"));
        assert!(out.contains("█"));
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(render("t", &[], PLAIN), "PhotoCount per Day - t\n");
    }
}
