//! Domain logic: item resolution and statistics

mod resolver;
mod stats;


pub use resolver::{resolve_auto, resolve_by_type, resolve_item, ItemSelector};
pub use stats::{
    aggregate, ItemCounts, ProjectSummary, SessionSummary, Stats, TaskStatus, TaskStatusCounts,
    NONE, UNKNOWN,
};
