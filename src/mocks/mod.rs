//! Test doubles for dependency injection
//!
//! Provides an in-memory photo store so catalogs can be built without a
//! database file.

use crate::photo_id;
use crate::traits::{LibraryRows, PhotoRow, PhotoStore, StoreError, TagRow};

// ============================================================================
// InMemoryPhotoStore
// ============================================================================

/// In-memory photo store for testing
#[derive(Clone, Default)]
pub struct InMemoryPhotoStore {
    tags: Vec<TagRow>,
    photos: Vec<PhotoRow>,
}

impl InMemoryPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag row with a raw, already delimited photo-id list
    pub fn with_tag_list(mut self, name: &str, photo_id_list: &str) -> Self {
        let id = self.tags.len() as i64 + 1;
        self.tags.push(TagRow {
            id,
            name: name.to_string(),
            photo_id_list: Some(photo_id_list.to_string()),
            time_created: None,
        });
        self
    }

    /// Add a tag attached to the given photo ids, written the way Shotwell
    /// writes them (`thumb` tokens with a trailing comma)
    pub fn with_tag(self, name: &str, photo_ids: &[i64]) -> Self {
        let list: String = photo_ids
            .iter()
            .map(|id| format!("{},", photo_id::encode(photo_id::DEFAULT_PREFIX, *id)))
            .collect();
        self.with_tag_list(name, &list)
    }

    /// Add a photo with only an id and a path
    pub fn with_photo(mut self, id: i64, filename: &str) -> Self {
        self.photos.push(PhotoRow {
            id,
            filename: filename.to_string(),
            width: None,
            height: None,
            filesize: None,
            timestamp: None,
            exposure_time: None,
            rating: None,
            title: None,
            has_gps: None,
            gps_lat: None,
            gps_lon: None,
        });
        self
    }
}

impl PhotoStore for InMemoryPhotoStore {
    fn load(&self) -> Result<LibraryRows, StoreError> {
        let mut photos = self.photos.clone();
        photos.sort_by_key(|p| p.id);
        Ok(LibraryRows {
            tags: self.tags.clone(),
            photos,
        })
    }
}
