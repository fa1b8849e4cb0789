use serde::Serialize;

use crate::model::{UndoRecord, UndoState};
use crate::ops::{ListSession, Notice};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub position: usize,
    pub label: String,
    pub checked: bool,
}

#[derive(Serialize)]
pub struct UndoRecordJson {
    pub id: u64,
    pub label: String,
    pub original_position: usize,
    pub title: String,
    pub state: UndoState,
}

#[derive(Serialize)]
pub struct NoticeJson {
    pub line: usize,
    #[serde(flatten)]
    pub notice: Notice,
}

#[derive(Serialize)]
pub struct ReplayJson {
    pub notices: Vec<NoticeJson>,
    pub items: Vec<ItemJson>,
    pub session_active: bool,
    pub pending: Vec<UndoRecordJson>,
}

pub fn items_to_json(session: &ListSession) -> Vec<ItemJson> {
    session
        .store()
        .iter()
        .enumerate()
        .map(|(position, label)| ItemJson {
            position,
            label: label.to_string(),
            checked: session.selection().is_checked(position),
        })
        .collect()
}

pub fn record_to_json(record: &UndoRecord) -> UndoRecordJson {
    UndoRecordJson {
        id: record.id.0,
        label: record.label.clone(),
        original_position: record.original_position,
        title: record.title.clone(),
        state: record.state,
    }
}

pub fn replay_to_json(session: &ListSession, notices: Vec<(usize, Notice)>) -> ReplayJson {
    ReplayJson {
        notices: notices
            .into_iter()
            .map(|(line, notice)| NoticeJson { line, notice })
            .collect(),
        items: items_to_json(session),
        session_active: session.controller().is_active(),
        pending: session.undo_queue().pending().map(record_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Format one row: checkbox, position, label
pub fn format_item_line(position: usize, label: &str, checked: bool) -> String {
    let mark = if checked { "[x]" } else { "[ ]" };
    format!("{} {:>3}  {}", mark, position, label)
}

/// Format one notice prefixed by its script line
pub fn format_notice_line(line: usize, notice: &Notice) -> String {
    format!("{:>4}: {}", line, notice)
}

/// Summary block printed after a replay
pub fn format_replay_summary(session: &ListSession) -> Vec<String> {
    let mut lines = Vec::new();
    let store = session.store();
    lines.push(format!("items ({}):", store.len()));
    let labels: Vec<&str> = store.iter().collect();
    if !labels.is_empty() {
        lines.push(format!("  {}", labels.join(" ")));
    }

    let checked = session.selection().checked_positions();
    if !checked.is_empty() {
        lines.push(format!(
            "checked: {}",
            checked
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    let pending: Vec<&UndoRecord> = session.undo_queue().pending().collect();
    if !pending.is_empty() {
        lines.push("pending:".to_string());
        for record in pending {
            lines.push(format!(
                "  {} {} (from {})",
                record.id, record.title, record.original_position
            ));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppConfig, ItemStore};
    use crate::ops::ListEvent;
    use pretty_assertions::assert_eq;
    use std::time::Instant;

    #[test]
    fn item_line_marks_checked() {
        assert_eq!(format_item_line(3, "milk", true), "[x]   3  milk");
        assert_eq!(format_item_line(12, "eggs", false), "[ ]  12  eggs");
    }

    #[test]
    fn summary_lists_pending_records() {
        let mut session = ListSession::new(ItemStore::numbered(4), &AppConfig::default());
        session.handle(ListEvent::SwipeDismiss(1), Instant::now());
        assert_eq!(
            format_replay_summary(&session),
            vec![
                "items (3):".to_string(),
                "  0 2 3".to_string(),
                "pending:".to_string(),
                "  #1 1 deleted (from 1)".to_string(),
            ]
        );
    }

    #[test]
    fn json_report_flattens_notices() {
        let mut session = ListSession::new(ItemStore::numbered(3), &AppConfig::default());
        let notices = session.handle(ListEvent::ItemTapped(0), Instant::now());
        let report = replay_to_json(&session, notices.into_iter().map(|n| (1, n)).collect());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["notices"][0]["line"], 1);
        assert_eq!(value["notices"][0]["notice"], "toast");
        assert_eq!(value["items"][2]["label"], "2");
        assert_eq!(value["session_active"], false);
    }
}
