//! Read-only access to the two Shotwell tables the reports need

use std::path::PathBuf;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Unsupported schema: {0}")]
    UnsupportedSchema(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::DatabaseError(e.to_string())
    }
}

/// One row of TagTable, as stored
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagRow {
    pub id: i64,
    pub name: String,
    /// Comma separated photo-id tokens, often with a trailing comma
    pub photo_id_list: Option<String>,
    pub time_created: Option<i64>,
}

/// One row of PhotoTable (the subset of columns the tool reads)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoRow {
    pub id: i64,
    pub filename: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub filesize: Option<i64>,
    pub timestamp: Option<i64>,
    pub exposure_time: Option<i64>,
    pub rating: Option<i64>,
    pub title: Option<String>,
    pub has_gps: Option<i64>,
    pub gps_lat: Option<f64>,
    pub gps_lon: Option<f64>,
}

/// Both tables, read from one snapshot of the library
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryRows {
    pub tags: Vec<TagRow>,
    /// Ascending by id
    pub photos: Vec<PhotoRow>,
}

/// Trait for loading the raw tables
///
/// Production: Shotwell's photo.db via rusqlite
/// Testing: In-memory rows
#[cfg_attr(test, mockall::automock)]
pub trait PhotoStore {
    /// All rows of TagTable and PhotoTable
    fn load(&self) -> Result<LibraryRows, StoreError>;
}
