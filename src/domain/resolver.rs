//! Item lookup by id, with or without an explicit bucket

use crate::errors::{DohError, Result};
use crate::schemas::{BucketKind, Item, ProjectIndex, BUCKET_PRIORITY};

/// Type argument accepted by `get-item`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSelector {
    /// Scan every bucket in priority order
    Auto,
    /// Look only in the named bucket
    Bucket(BucketKind),
}

impl std::str::FromStr for ItemSelector {
    type Err = DohError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "auto" {
            return Ok(ItemSelector::Auto);
        }
        s.parse::<BucketKind>()
            .map(ItemSelector::Bucket)
            .map_err(|_| DohError::UnknownType(s.to_string()))
    }
}

/// Look up an item in one bucket.
///
/// # Returns
/// A copy of the stored item with `item_type` set to the bucket name
///
/// # Errors
/// * `ItemNotFound` - If the bucket has no item with this id
pub fn resolve_by_type(index: &ProjectIndex, id: &str, bucket: BucketKind) -> Result<Item> {
    index
        .items
        .bucket(bucket)
        .get(id)
        .map(|item| item.clone().with_item_type(bucket))
        .ok_or_else(|| DohError::ItemNotFound {
            id: id.to_string(),
            item_type: Some(bucket.singular().to_string()),
        })
}

/// Look up an item in every bucket, following `BUCKET_PRIORITY`.
///
/// The first bucket holding the id wins; duplicates in later buckets are
/// not reported.
///
/// # Errors
/// * `ItemNotFound` - If no bucket has an item with this id
pub fn resolve_auto(index: &ProjectIndex, id: &str) -> Result<Item> {
    BUCKET_PRIORITY
        .iter()
        .find_map(|&bucket| {
            index
                .items
                .bucket(bucket)
                .get(id)
                .map(|item| item.clone().with_item_type(bucket))
        })
        .ok_or_else(|| DohError::ItemNotFound {
            id: id.to_string(),
            item_type: None,
        })
}

/// Dispatch on a parsed selector
pub fn resolve_item(index: &ProjectIndex, id: &str, selector: ItemSelector) -> Result<Item> {
    match selector {
        ItemSelector::Auto => resolve_auto(index, id),
        ItemSelector::Bucket(bucket) => resolve_by_type(index, id, bucket),
    }
}
