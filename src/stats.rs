//! Tag statistics: counts, co-occurrence, recency

use std::collections::{HashMap, HashSet};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::catalog::Catalog;
use crate::photo_id::{PhotoIdDecoder, PhotoIdError};
use crate::timestamps::{self, TimestampError};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    PhotoId(#[from] PhotoIdError),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    #[error("No photos found for tag {0:?}")]
    NoPhotos(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagAge {
    pub tag: String,
    pub last_photo: NaiveDateTime,
    pub days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub day: NaiveDate,
    pub count: usize,
}

/// Occurrences per tag name; every name in `seed` is listed even at 0
fn count_by_tag<'a>(
    seed: impl Iterator<Item = &'a str>,
    tags: impl Iterator<Item = &'a str>,
) -> Vec<TagCount> {
    let mut counts: HashMap<&str, usize> = seed.map(|tag| (tag, 0)).collect();
    for tag in tags {
        *counts.entry(tag).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect()
}

/// Number of distinct tag names
pub fn tag_count(catalog: &Catalog) -> usize {
    catalog.tag_names().len()
}

/// Photos per tag, fewest first (ties by name). Tags without any photo
/// tokens are listed with 0.
pub fn tag_counts(catalog: &Catalog) -> Vec<TagCount> {
    let mut counts = count_by_tag(
        catalog.tag_names().iter().map(String::as_str),
        catalog.relation().iter().map(|r| r.tag.as_str()),
    );
    counts.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.tag.cmp(&b.tag)));
    counts
}

/// How often every tag appears on the photos carrying `tag`, most first.
///
/// `tag` itself is included, so its own count leads the list.
pub fn related_tags(catalog: &Catalog, tag: &str) -> Vec<TagCount> {
    let tokens: HashSet<&str> = catalog.tokens_for(tag).into_iter().collect();
    let shared = catalog
        .relation()
        .iter()
        .filter(|r| tokens.contains(r.token.as_str()))
        .map(|r| r.tag.as_str());

    let mut counts = count_by_tag(std::iter::empty(), shared);
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    counts
}

/// Reconstructed capture times of a tag's photos, ascending
pub fn dates_for_tag(
    catalog: &Catalog,
    decoder: &PhotoIdDecoder,
    tag: &str,
) -> Result<Vec<NaiveDateTime>, ReportError> {
    let photos = catalog.photos_for(tag, decoder)?;
    let dates = timestamps::reconstruct(photos.iter().map(|p| p.filename.as_str()))?;
    debug!(tag = %tag, photos = photos.len(), "Reconstructed dates");
    Ok(dates)
}

/// Whole days from `then` to `now`, rounded down
pub fn days_between(then: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (now - then).num_seconds().div_euclid(86_400)
}

/// Days since the most recent photo of `tag`
pub fn tag_age(
    catalog: &Catalog,
    decoder: &PhotoIdDecoder,
    tag: &str,
    now: NaiveDateTime,
) -> Result<TagAge, ReportError> {
    let dates = dates_for_tag(catalog, decoder, tag)?;
    let last_photo = *dates
        .last()
        .ok_or_else(|| ReportError::NoPhotos(tag.to_string()))?;

    Ok(TagAge {
        tag: tag.to_string(),
        last_photo,
        days: days_between(last_photo, now),
    })
}

/// `tag_age` for every tag, most recently photographed first
pub fn all_tag_ages(
    catalog: &Catalog,
    decoder: &PhotoIdDecoder,
    now: NaiveDateTime,
) -> Result<Vec<TagAge>, ReportError> {
    let mut ages = tag_counts(catalog)
        .iter()
        .map(|c| tag_age(catalog, decoder, &c.tag, now))
        .collect::<Result<Vec<_>, _>>()?;
    ages.sort_by_key(|a| a.days);
    Ok(ages)
}

/// Photos per calendar day from the first to the last date, zero-filled
pub fn daily_counts(dates: &[NaiveDateTime]) -> Vec<DayCount> {
    let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
    for d in dates {
        *per_day.entry(d.date()).or_insert(0) += 1;
    }

    let (Some(first), Some(last)) = (per_day.keys().min(), per_day.keys().max()) else {
        return Vec::new();
    };

    let mut days = Vec::new();
    let mut day = *first;
    while day <= *last {
        days.push(DayCount {
            day,
            count: per_day.get(&day).copied().unwrap_or(0),
        });
        day += Duration::days(1);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::InMemoryPhotoStore;
    use crate::traits::TagRow;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog() -> Catalog {
        let store = InMemoryPhotoStore::new()
            .with_photo(1, "/p/IMG_20210101_100000.jpg")
            .with_photo(2, "/p/IMG-20210103-WA0001.jpg")
            .with_photo(3, "/p/signal-2021-01-02-083000.jpg")
            .with_photo(4, "/p/WP_20200505_001.jpg")
            .with_tag("flower", &[1, 2])
            .with_tag("veg", &[2, 3])
            .with_tag("tree", &[4]);
        Catalog::load(&store).unwrap()
    }

    #[test]
    fn test_tag_counts_ascending() {
        let counts = tag_counts(&catalog());
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.tag.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("tree", 1), ("flower", 2), ("veg", 2)]);
        assert_eq!(tag_count(&catalog()), 3);
    }

    #[test]
    fn test_tag_without_photos_counts_zero() {
        let tags = vec![
            TagRow {
                id: 1,
                name: "unsorted".to_string(),
                photo_id_list: None,
                time_created: None,
            },
            TagRow {
                id: 2,
                name: "flower".to_string(),
                photo_id_list: Some("thumb01,".to_string()),
                time_created: None,
            },
        ];
        let catalog = Catalog::from_rows(&tags, vec![]);

        let counts = tag_counts(&catalog);
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.tag.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("unsorted", 0), ("flower", 1)]);
        assert_eq!(tag_count(&catalog), counts.len());
    }

    #[test]
    fn test_all_tag_ages_fails_on_tag_without_photos() {
        let tags = vec![TagRow {
            id: 1,
            name: "unsorted".to_string(),
            photo_id_list: None,
            time_created: None,
        }];
        let catalog = Catalog::from_rows(&tags, vec![]);
        let now = day(2021, 2, 1).and_hms_opt(0, 0, 0).unwrap();

        let err = all_tag_ages(&catalog, &PhotoIdDecoder::default(), now).unwrap_err();
        assert!(matches!(err, ReportError::NoPhotos(ref t) if t == "unsorted"));
    }

    #[test]
    fn test_related_tags() {
        let related = related_tags(&catalog(), "flower");
        let pairs: Vec<(&str, usize)> = related.iter().map(|c| (c.tag.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("flower", 2), ("veg", 1)]);
    }

    #[test]
    fn test_related_tags_unknown_tag_is_empty() {
        assert!(related_tags(&catalog(), "cactus").is_empty());
    }

    #[test]
    fn test_dates_for_tag_sorted() {
        let dates = dates_for_tag(&catalog(), &PhotoIdDecoder::default(), "veg").unwrap();
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].date(), day(2021, 1, 2));
        assert_eq!(dates[1].date(), day(2021, 1, 3));
    }

    #[test]
    fn test_days_between_rounds_down() {
        let then = day(2021, 1, 1).and_hms_opt(18, 0, 0).unwrap();
        assert_eq!(days_between(then, day(2021, 1, 3).and_hms_opt(12, 0, 0).unwrap()), 1);
        assert_eq!(days_between(then, day(2021, 1, 1).and_hms_opt(12, 0, 0).unwrap()), -1);
    }

    #[test]
    fn test_tag_age_uses_latest_photo() {
        let now = day(2021, 1, 13).and_hms_opt(0, 0, 0).unwrap();
        let age = tag_age(&catalog(), &PhotoIdDecoder::default(), "flower", now).unwrap();
        assert_eq!(age.last_photo.date(), day(2021, 1, 3));
        assert_eq!(age.days, 10);
    }

    #[test]
    fn test_tag_age_unknown_tag_fails() {
        let now = day(2021, 1, 13).and_hms_opt(0, 0, 0).unwrap();
        let err = tag_age(&catalog(), &PhotoIdDecoder::default(), "cactus", now).unwrap_err();
        assert!(matches!(err, ReportError::NoPhotos(ref t) if t == "cactus"));
    }

    #[test]
    fn test_all_tag_ages_most_recent_first() {
        let now = day(2021, 2, 1).and_hms_opt(0, 0, 0).unwrap();
        let ages = all_tag_ages(&catalog(), &PhotoIdDecoder::default(), now).unwrap();
        let tags: Vec<&str> = ages.iter().map(|a| a.tag.as_str()).collect();
        // flower and veg both last seen on 01-03; tie keeps count order
        assert_eq!(tags, vec!["flower", "veg", "tree"]);
    }

    #[test]
    fn test_daily_counts_zero_filled() {
        let dates = [
            day(2021, 1, 1).and_hms_opt(9, 0, 0).unwrap(),
            day(2021, 1, 1).and_hms_opt(10, 0, 0).unwrap(),
            day(2021, 1, 4).and_hms_opt(0, 0, 0).unwrap(),
        ];
        let counts: Vec<usize> = daily_counts(&dates).iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![2, 0, 0, 1]);
        assert!(daily_counts(&[]).is_empty());
    }
}
