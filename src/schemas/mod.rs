//! Schema types for the DOH project index and session sidecar

mod bucket;
mod index;
mod session;

pub use bucket::{BucketKind, BUCKET_PRIORITY};
pub use index::{Bucket, Counters, Item, Items, Metadata, ProjectIndex, ITEM_TYPE_FIELD};
pub use session::SessionState;
