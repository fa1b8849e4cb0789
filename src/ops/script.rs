use std::time::{Duration, Instant};

use crate::model::ActionId;

use super::list_session::{ListEvent, ListSession, Notice};

/// Error parsing a replay script
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: '{command}' needs {expected}")]
    MissingArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },
    #[error("line {line}: '{value}' is not a position")]
    BadPosition { line: usize, value: String },
    #[error("line {line}: unexpected extra input '{extra}'")]
    TrailingInput { line: usize, extra: String },
}

/// One scripted user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Tap(usize),
    Check(usize),
    Uncheck(usize),
    Swipe(usize),
    SelectAll,
    Delete,
    Finish,
    Undo,
    /// Revoke the first pending delete with this label
    Revoke(String),
    /// Let the undo window run out
    Elapse,
    Teardown,
}

/// A parsed step with the script line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub step: Step,
}

/// Parse a replay script. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let mut words = content.split_whitespace();
        let command = words.next().unwrap_or_default();
        let arg = words.next();
        let rest: Vec<&str> = words.collect();

        let step = match command {
            "tap" => Step::Tap(position_arg(line, command, arg)?),
            "check" => Step::Check(position_arg(line, command, arg)?),
            "uncheck" => Step::Uncheck(position_arg(line, command, arg)?),
            "swipe" => Step::Swipe(position_arg(line, command, arg)?),
            "revoke" => {
                let label = arg.ok_or_else(|| ScriptError::MissingArgument {
                    line,
                    command: command.to_string(),
                    expected: "a label",
                })?;
                Step::Revoke(label.to_string())
            }
            "select-all" | "delete" | "finish" | "undo" | "elapse" | "teardown" => {
                if let Some(extra) = arg {
                    return Err(ScriptError::TrailingInput {
                        line,
                        extra: extra.to_string(),
                    });
                }
                match command {
                    "select-all" => Step::SelectAll,
                    "delete" => Step::Delete,
                    "finish" => Step::Finish,
                    "undo" => Step::Undo,
                    "elapse" => Step::Elapse,
                    _ => Step::Teardown,
                }
            }
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: other.to_string(),
                });
            }
        };

        if let Some(extra) = rest.first() {
            return Err(ScriptError::TrailingInput {
                line,
                extra: extra.to_string(),
            });
        }
        steps.push(ScriptLine { line, step });
    }
    Ok(steps)
}

fn position_arg(line: usize, command: &str, arg: Option<&str>) -> Result<usize, ScriptError> {
    let value = arg.ok_or_else(|| ScriptError::MissingArgument {
        line,
        command: command.to_string(),
        expected: "a position",
    })?;
    value.parse().map_err(|_| ScriptError::BadPosition {
        line,
        value: value.to_string(),
    })
}

/// Feed parsed steps through a session on a synthetic clock that starts at
/// `start` and only moves on `elapse`. Returns every notice tagged with the
/// line that caused it.
pub fn replay(
    session: &mut ListSession,
    steps: &[ScriptLine],
    start: Instant,
) -> Vec<(usize, Notice)> {
    let mut now = start;
    let mut out = Vec::new();
    for ScriptLine { line, step } in steps {
        let notices = match step {
            Step::Elapse => {
                now += session.undo_queue().window() + Duration::from_millis(1);
                session.tick(now)
            }
            Step::Revoke(label) => match session.undo_queue().find_pending(label) {
                Some(id) => session.handle(ListEvent::Revoke(id), now),
                None => {
                    tracing::debug!(line, label = %label, "nothing pending to revoke");
                    Vec::new()
                }
            },
            other => match to_event(other) {
                Some(event) => session.handle(event, now),
                None => Vec::new(),
            },
        };
        out.extend(notices.into_iter().map(|n| (*line, n)));
    }
    out
}

fn to_event(step: &Step) -> Option<ListEvent> {
    let event = match step {
        Step::Tap(p) => ListEvent::ItemTapped(*p),
        Step::Check(p) => ListEvent::CheckedChanged {
            position: *p,
            checked: true,
        },
        Step::Uncheck(p) => ListEvent::CheckedChanged {
            position: *p,
            checked: false,
        },
        Step::Swipe(p) => ListEvent::SwipeDismiss(*p),
        Step::SelectAll => ListEvent::ActionInvoked(ActionId::SelectAll),
        Step::Delete => ListEvent::ActionInvoked(ActionId::Delete),
        Step::Finish => ListEvent::SessionEnded,
        Step::Undo => ListEvent::Undo,
        Step::Teardown => ListEvent::Teardown,
        Step::Revoke(_) | Step::Elapse => return None,
    };
    Some(event)
}
