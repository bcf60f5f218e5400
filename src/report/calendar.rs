//! Year-at-a-glance heatmap of photos per day

use std::collections::HashMap;
use std::fmt::Write;
use chrono::{Datelike, NaiveDate};

use super::chart::MONTH_NAMES;
use super::{paint, RenderOptions, Rgb};
use crate::stats::DayCount;

/// Yellow-green ramp, lightest for the quietest day
const YL_GN: [Rgb; 9] = [
    Rgb::hex(0xffffe5),
    Rgb::hex(0xf7fcb9),
    Rgb::hex(0xd9f0a3),
    Rgb::hex(0xaddd8e),
    Rgb::hex(0x78c679),
    Rgb::hex(0x41ab5d),
    Rgb::hex(0x238443),
    Rgb::hex(0x006837),
    Rgb::hex(0x004529),
];

/// Days of the year outside the counted range
const FILL: Rgb = Rgb::hex(0xf5f5f5);

const SHADES: [char; 4] = ['░', '▒', '▓', '█'];

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Ramp position of `count`, 0 for the quietest day, 8 for the busiest
fn level(count: usize, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    (count * (YL_GN.len() - 1) + max / 2) / max
}

/// Monday-start week column of `day` within its year
fn week_column(day: NaiveDate) -> usize {
    let jan1 = NaiveDate::from_ymd_opt(day.year(), 1, 1).unwrap_or(day);
    let offset = jan1.weekday().num_days_from_monday() as usize;
    (day.ordinal0() as usize + offset) / 7
}

fn cell(count: Option<usize>, max: usize, options: RenderOptions) -> String {
    match (count, options.color) {
        (None, true) => paint("  ", FILL, None),
        (None, false) => "  ".to_string(),
        (Some(c), true) => paint("  ", YL_GN[level(c, max)], None),
        (Some(0), false) => "· ".to_string(),
        (Some(c), false) => {
            let shade = SHADES[((c * SHADES.len()).saturating_sub(1) / max).min(SHADES.len() - 1)];
            format!("{}{}", shade, shade)
        }
    }
}

fn legend(max: usize, options: RenderOptions) -> String {
    let steps: String = if options.color {
        YL_GN.iter().map(|c| paint("  ", *c, None)).collect()
    } else {
        std::iter::once("· ".to_string())
            .chain(SHADES.iter().map(|s| format!("{}{}", s, s)))
            .collect()
    };
    format!("0 {} {}\n", steps, max)
}

fn render_year(
    out: &mut String,
    year: i32,
    counts: &HashMap<NaiveDate, usize>,
    max: usize,
    options: RenderOptions,
) {
    let (Some(first), Some(last)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return;
    };
    let columns = week_column(last) + 1;

    let mut header = vec![' '; columns * 2];
    for month in 1..=12 {
        if let Some(start) = NaiveDate::from_ymd_opt(year, month, 1) {
            let col = week_column(start) * 2;
            for (i, ch) in MONTH_NAMES[month as usize - 1].chars().take(3).enumerate() {
                if let Some(slot) = header.get_mut(col + i) {
                    *slot = ch;
                }
            }
        }
    }
    let _ = writeln!(out, "{}", year);
    let _ = writeln!(out, "    {}", header.iter().collect::<String>().trim_end());

    for (row, name) in WEEKDAYS.iter().enumerate() {
        let mut cells = vec!["  ".to_string(); columns];
        let mut day = first;
        while day <= last {
            if day.weekday().num_days_from_monday() as usize == row {
                cells[week_column(day)] = cell(counts.get(&day).copied(), max, options);
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        let line = format!("{} {}", name, cells.concat());
        let _ = writeln!(out, "{}", if options.color { line.as_str() } else { line.trim_end() });
    }
}

/// One block per calendar year covered by `per_day`
pub fn render(tag: &str, per_day: &[DayCount], options: RenderOptions) -> String {
    let mut out = format!("{}- photos per day\n", tag);
    let (Some(first), Some(last)) = (per_day.first(), per_day.last()) else {
        return out;
    };

    let counts: HashMap<NaiveDate, usize> = per_day.iter().map(|d| (d.day, d.count)).collect();
    let max = per_day.iter().map(|d| d.count).max().unwrap_or(0);

    for year in first.day.year()..=last.day.year() {
        render_year(&mut out, year, &counts, max, options);
        out.push('\n');
    }
    out.push_str(&legend(max, options));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: RenderOptions = RenderOptions { color: false };

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_column_monday_start() {
        // 2021-01-01 is a Friday
        assert_eq!(week_column(d(2021, 1, 1)), 0);
        assert_eq!(week_column(d(2021, 1, 3)), 0);
        assert_eq!(week_column(d(2021, 1, 4)), 1);
        assert_eq!(week_column(d(2021, 12, 31)), 52);
    }

    #[test]
    fn test_level_bounds() {
        assert_eq!(level(0, 10), 0);
        assert_eq!(level(10, 10), 8);
        assert_eq!(level(0, 0), 0);
    }

    #[test]
    fn test_plain_calendar_marks_days() {
        let per_day = vec![
            DayCount { day: d(2021, 1, 4), count: 4 },
            DayCount { day: d(2021, 1, 5), count: 0 },
            DayCount { day: d(2021, 1, 6), count: 1 },
        ];
        let out = render("flower", &per_day, PLAIN);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "flower- photos per day");
        assert_eq!(lines[1], "2021");
        assert!(lines[2].trim_start().starts_with("Jan"));
        // Monday 4th is the busiest day, column 1
        assert_eq!(lines[3], "Mon   ██");
        assert_eq!(lines[4], "Tue   ·");
        assert_eq!(lines[5], "Wed   ░░");
        assert_eq!(lines[6], "Thu");
        assert!(out.ends_with("0 · ░░▒▒▓▓██ 4\n"));
    }

    #[test]
    fn test_spans_years() {
        let per_day = vec![
            DayCount { day: d(2020, 12, 31), count: 1 },
            DayCount { day: d(2021, 1, 1), count: 1 },
        ];
        let out = render("t", &per_day, PLAIN);
        assert!(out.contains("\n2020\n"));
        assert!(out.contains("\n2021\n"));
    }

    #[test]
    fn test_empty_calendar() {
        assert_eq!(render("t", &[], PLAIN), "t- photos per day\n");
    }
}
