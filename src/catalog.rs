//! In-memory tag and photo tables, loaded once per run

use std::collections::{BTreeSet, HashMap, HashSet};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::photo_id::{PhotoIdDecoder, PhotoIdError};
use crate::traits::{PhotoRow, PhotoStore, StoreError, TagRow};

/// One (tag name, photo-id token) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagToken {
    pub tag: String,
    pub token: String,
}

/// Split each tag's delimited list into one row per token.
///
/// Trailing commas leave empty segments behind; those are dropped. Repeated
/// tokens are kept.
pub fn expand_tag_rows(rows: &[TagRow]) -> Vec<TagToken> {
    let mut relation = Vec::new();
    for row in rows {
        let Some(list) = row.photo_id_list.as_deref() else {
            warn!(tag = %row.name, "Tag has no photo id list");
            continue;
        };
        relation.extend(
            list.split(',')
                .filter(|token| !token.is_empty())
                .map(|token| TagToken {
                    tag: row.name.clone(),
                    token: token.to_string(),
                }),
        );
    }
    relation
}

/// Photos addressable by id, iterated in ascending id order
#[derive(Debug, Default)]
pub struct PhotoTable {
    order: Vec<i64>,
    by_id: HashMap<i64, PhotoRow>,
}

impl PhotoTable {
    pub fn new(mut rows: Vec<PhotoRow>) -> Self {
        rows.sort_by_key(|p| p.id);
        let order = rows.iter().map(|p| p.id).collect();
        let by_id = rows.into_iter().map(|p| (p.id, p)).collect();
        Self { order, by_id }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Photos whose id is in `ids`, ascending by id
    pub fn select(&self, ids: &HashSet<i64>) -> Vec<&PhotoRow> {
        for id in ids.iter().filter(|id| !self.by_id.contains_key(*id)) {
            debug!(photo_id = *id, "Tagged photo missing from PhotoTable");
        }
        self.order
            .iter()
            .filter(|id| ids.contains(*id))
            .filter_map(|id| self.by_id.get(id))
            .collect()
    }
}

/// Everything a report needs, read from the store up front
#[derive(Debug)]
pub struct Catalog {
    relation: Vec<TagToken>,
    names: BTreeSet<String>,
    photos: PhotoTable,
}

impl Catalog {
    /// Read both tables fully; the store is not touched again afterwards
    pub fn load(store: &dyn PhotoStore) -> Result<Self, StoreError> {
        let rows = store.load()?;
        Ok(Self::from_rows(&rows.tags, rows.photos))
    }

    pub fn from_rows(tags: &[TagRow], photos: Vec<PhotoRow>) -> Self {
        let relation = expand_tag_rows(tags);
        info!(
            tags = tags.len(),
            tokens = relation.len(),
            photos = photos.len(),
            "Catalog loaded"
        );
        Self {
            relation,
            names: tags.iter().map(|t| t.name.clone()).collect(),
            photos: PhotoTable::new(photos),
        }
    }

    pub fn relation(&self) -> &[TagToken] {
        &self.relation
    }

    pub fn photos(&self) -> &PhotoTable {
        &self.photos
    }

    /// Distinct tag names in TagTable, including tags without photos
    pub fn tag_names(&self) -> &BTreeSet<String> {
        &self.names
    }

    /// Tokens attached to `tag`, in load order. Unknown tags give none.
    pub fn tokens_for(&self, tag: &str) -> Vec<&str> {
        self.relation
            .iter()
            .filter(|r| r.tag == tag)
            .map(|r| r.token.as_str())
            .collect()
    }

    /// Photos tagged with `tag`, ascending by id.
    ///
    /// Every token has to decode; one bad token fails the whole lookup.
    pub fn photos_for(
        &self,
        tag: &str,
        decoder: &PhotoIdDecoder,
    ) -> Result<Vec<&PhotoRow>, PhotoIdError> {
        let ids = self
            .tokens_for(tag)
            .into_iter()
            .map(|token| decoder.decode(token))
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(self.photos.select(&ids))
    }
}
