//! Project statistics over the index and session sidecar

use serde::Serialize;

use crate::schemas::{BucketKind, ProjectIndex, SessionState};

/// Placeholder for missing project metadata
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for an unset session field
pub const NONE: &str = "None";

/// Status buckets reported for tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Active,
    Completed,
}

impl TaskStatus {
    /// Map a raw `status` value to a reported bucket.
    ///
    /// `done` is an alias for `completed`. Anything else is not reported.
    pub fn classify(status: &str) -> Option<TaskStatus> {
        match status {
            "pending" => Some(TaskStatus::Pending),
            "active" => Some(TaskStatus::Active),
            "completed" | "done" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub last_updated: String,
    pub next_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemCounts {
    pub tasks: usize,
    pub epics: usize,
    pub features: usize,
    pub prds: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskStatusCounts {
    pub pending: usize,
    pub active: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub current_epic: String,
    pub current_task: String,
}

/// Aggregate view printed by `project-stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub project: ProjectSummary,
    pub items: ItemCounts,
    pub task_status: TaskStatusCounts,
    pub session: SessionSummary,
}

/// Compute statistics for an index and session.
///
/// Pure: neither input is modified and equal inputs give equal output.
pub fn aggregate(index: &ProjectIndex, session: &SessionState) -> Stats {
    let count = |kind: BucketKind| index.items.bucket(kind).len();

    let mut task_status = TaskStatusCounts::default();
    for status in index.items.tasks.values().filter_map(|t| t.status()) {
        match TaskStatus::classify(status) {
            Some(TaskStatus::Pending) => task_status.pending += 1,
            Some(TaskStatus::Active) => task_status.active += 1,
            Some(TaskStatus::Completed) => task_status.completed += 1,
            None => {}
        }
    }

    Stats {
        project: ProjectSummary {
            name: or_placeholder(index.metadata.project_name.as_deref(), UNKNOWN),
            last_updated: or_placeholder(index.metadata.updated_at.as_deref(), UNKNOWN),
            next_id: index.counters.next_id.unwrap_or(0),
        },
        items: ItemCounts {
            tasks: count(BucketKind::Tasks),
            epics: count(BucketKind::Epics),
            features: count(BucketKind::Features),
            prds: count(BucketKind::Prds),
        },
        task_status,
        session: SessionSummary {
            current_epic: or_placeholder(session.current_epic.as_deref(), NONE),
            current_task: or_placeholder(session.current_task.as_deref(), NONE),
        },
    }
}

// Empty strings count as missing.
fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}
