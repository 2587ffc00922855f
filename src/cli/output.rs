//! Rendering of command results for stdout

use serde::Serialize;

use crate::domain::Stats;
use crate::schemas::Item;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// A value a command hands back for display
#[derive(Debug, Clone, Copy)]
pub enum Output<'a> {
    Item(&'a Item),
    Stats(&'a Stats),
}

/// Render a command result.
///
/// Items have no human layout and are always rendered as JSON.
pub fn present(output: Output<'_>, format: OutputFormat) -> String {
    match (output, format) {
        (Output::Item(item), _) => to_pretty_json(item),
        (Output::Stats(stats), OutputFormat::Json) => to_pretty_json(stats),
        (Output::Stats(stats), OutputFormat::Human) => render_stats_report(stats),
    }
}

/// Pretty JSON with two-space indentation.
fn to_pretty_json<T: Serialize>(value: &T) -> String {
    // String-keyed maps and plain structs cannot fail to serialize
    serde_json::to_string_pretty(value).expect("item and stats values always serialize")
}

fn render_stats_report(stats: &Stats) -> String {
    let lines = [
        "DOH Project Statistics".to_string(),
        "=".repeat(21),
        String::new(),
        format!("Project: {}", stats.project.name),
        format!("Last Updated: {}", stats.project.last_updated),
        format!("Next ID: {}", stats.project.next_id),
        String::new(),
        "Items Summary:".to_string(),
        format!("  Tasks: {}", stats.items.tasks),
        format!("  Epics: {}", stats.items.epics),
        format!("  Features: {}", stats.items.features),
        format!("  PRDs: {}", stats.items.prds),
        String::new(),
        "Task Status:".to_string(),
        format!("  Pending: {}", stats.task_status.pending),
        format!("  Active: {}", stats.task_status.active),
        format!("  Completed: {}", stats.task_status.completed),
        String::new(),
        "Current Session:".to_string(),
        format!("  Epic: {}", stats.session.current_epic),
        format!("  Task: {}", stats.session.current_task),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregate;
    use crate::schemas::{BucketKind, ProjectIndex, SessionState};

    fn sample_stats() -> Stats {
        let index: ProjectIndex = serde_json::from_str(
            r#"{
                "items": {"tasks": {"T1": {"status": "pending"}, "T2": {"status": "done"}},
                          "prds": {"P1": {}}},
                "counters": {"next_id": 3},
                "metadata": {"project_name": "demo", "updated_at": "2026-05-01"}
            }"#,
        )
        .unwrap();
        let session = SessionState {
            current_epic: Some("E1".into()),
            current_task: Some("T1".into()),
        };
        aggregate(&index, &session)
    }

    #[test]
    fn test_human_report_layout() {
        let report = present(Output::Stats(&sample_stats()), OutputFormat::Human);
        let expected = "\
DOH Project Statistics
=====================

Project: demo
Last Updated: 2026-05-01
Next ID: 3

Items Summary:
  Tasks: 2
  Epics: 0
  Features: 0
  PRDs: 1

Task Status:
  Pending: 1
  Active: 0
  Completed: 1

Current Session:
  Epic: E1
  Task: T1";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_stats_json_is_pretty() {
        let text = present(Output::Stats(&sample_stats()), OutputFormat::Json);
        assert!(text.starts_with("{\n  \"project\": {\n    \"name\": \"demo\""));

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, serde_json::to_value(sample_stats()).unwrap());
    }

    #[test]
    fn test_item_renders_json_in_any_format() {
        let item: Item = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        let item = item.with_item_type(BucketKind::Tasks);

        let expected = "{\n  \"status\": \"pending\",\n  \"item_type\": \"tasks\"\n}";
        assert_eq!(present(Output::Item(&item), OutputFormat::Json), expected);
        assert_eq!(present(Output::Item(&item), OutputFormat::Human), expected);
    }

    #[test]
    fn test_format_from_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Human);
    }
}
