use rusqlite::{Connection, OpenFlags};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::traits::{LibraryRows, PhotoRow, PhotoStore, StoreError, TagRow};

/// Columns only present in the current PhotoTable schema.
const GPS_COLUMNS: [&str; 3] = ["has_gps", "gps_lat", "gps_lon"];

/// Shotwell library database (`photo.db`).
///
/// `load` opens one read-only connection, reads TagTable and PhotoTable
/// through it and drops it before returning, so both tables come from the
/// same file. Nothing is ever written.
pub struct ShotwellDatabase {
    db_path: PathBuf,
}

impl ShotwellDatabase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn open_db(&self) -> Result<Connection, StoreError> {
        if !self.db_path.exists() {
            warn!("Shotwell database not found at: {}", self.db_path.display());
            return Err(StoreError::FileNotFound(self.db_path.clone()));
        }

        debug!("Opening Shotwell database: {}", self.db_path.display());

        Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(StoreError::from)
    }

    fn photo_columns(conn: &Connection) -> Result<HashSet<String>, StoreError> {
        let mut stmt = conn.prepare("PRAGMA table_info(PhotoTable)")?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(columns)
    }

    fn read_tags(conn: &Connection) -> Result<Vec<TagRow>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, name, photo_id_list, time_created FROM TagTable ORDER BY id",
        )?;

        let tags = stmt
            .query_map([], |row| {
                Ok(TagRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    photo_id_list: row.get(2)?,
                    time_created: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        info!("Loaded {} tag rows", tags.len());
        Ok(tags)
    }

    fn read_photos(conn: &Connection) -> Result<Vec<PhotoRow>, StoreError> {
        let columns = Self::photo_columns(conn)?;
        if columns.is_empty() {
            return Err(StoreError::UnsupportedSchema("PhotoTable is missing".to_string()));
        }
        if let Some(missing) = GPS_COLUMNS.iter().find(|c| !columns.contains(**c)) {
            return Err(StoreError::UnsupportedSchema(format!(
                "PhotoTable has no {} column (legacy schema)",
                missing
            )));
        }

        let mut stmt = conn.prepare(
            "SELECT id, filename, width, height, filesize, timestamp, exposure_time,
                    rating, title, has_gps, gps_lat, gps_lon
             FROM PhotoTable
             ORDER BY id",
        )?;

        let photos = stmt
            .query_map([], |row| {
                Ok(PhotoRow {
                    id: row.get(0)?,
                    filename: row.get(1)?,
                    width: row.get(2)?,
                    height: row.get(3)?,
                    filesize: row.get(4)?,
                    timestamp: row.get(5)?,
                    exposure_time: row.get(6)?,
                    rating: row.get(7)?,
                    title: row.get(8)?,
                    has_gps: row.get(9)?,
                    gps_lat: row.get(10)?,
                    gps_lon: row.get(11)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        info!("Loaded {} photo rows", photos.len());
        Ok(photos)
    }
}

impl PhotoStore for ShotwellDatabase {
    fn load(&self) -> Result<LibraryRows, StoreError> {
        let conn = self.open_db()?;
        let tags = Self::read_tags(&conn)?;
        let photos = Self::read_photos(&conn)?;
        drop(conn);
        debug!("Closed Shotwell database");
        Ok(LibraryRows { tags, photos })
    }
}
