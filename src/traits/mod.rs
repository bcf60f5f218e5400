//! Trait definitions for dependency injection
//!
//! The photo database is abstracted behind a trait so reports can be tested
//! without a Shotwell library on disk.

mod photo_store;

pub use photo_store::{LibraryRows, PhotoRow, PhotoStore, StoreError, TagRow};

#[cfg(test)]
pub use photo_store::MockPhotoStore;
