//! Render log for tfprompt.
//!
//! Each successful render can be appended to an NDJSON file (one JSON object
//! per line) so agent runs can be traced back to the exact prompt inputs.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (`render`, `check`)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `variant`, `operation`: Catalog key, when the action targets one template
//! - `details`: Freeform object with action-specific details
//!
//! ```no_run
//! use tfprompt::events::{Event, EventAction, append_event};
//! use tfprompt::prompt::{Operation, Variant};
//! use serde_json::json;
//!
//! let event = Event::new(EventAction::Render)
//!     .with_template(Variant::Standard, Operation::Create)
//!     .with_details(json!({"resource_name": "aws_batch_job_queue"}));
//! append_event("renders.ndjson", &event)?;
//! # Ok::<(), tfprompt::error::PromptError>(())
//! ```

use crate::error::{PromptError, Result};
use crate::prompt::{Operation, Variant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A prompt was rendered.
    Render,
    /// The whole catalog was checked.
    Check,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Render => write!(f, "render"),
            EventAction::Check => write!(f, "check"),
        }
    }
}

/// An event record for the render log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            variant: None,
            operation: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the catalog key this event refers to.
    pub fn with_template(mut self, variant: Variant, operation: Operation) -> Self {
        self.variant = Some(variant);
        self.operation = Some(operation);
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| PromptError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log at `path`.
///
/// The file and its parent directory are created if they don't exist. Each
/// append writes exactly one line with a trailing newline.
pub fn append_event<P: AsRef<Path>>(path: P, event: &Event) -> Result<()> {
    let path = path.as_ref();
    let json_line = event.to_ndjson_line()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                PromptError::UserError(format!(
                    "failed to create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PromptError::UserError(format!(
                "failed to open render log '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        PromptError::UserError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Read all events from the log at `path`. A missing file yields no events.
pub fn read_events<P: AsRef<Path>>(path: P) -> Result<Vec<Event>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        PromptError::UserError(format!(
            "failed to read render log '{}': {}",
            path.display(),
            e
        ))
    })?;

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| {
                PromptError::UserError(format!(
                    "failed to parse event on line {} of '{}': {}",
                    i + 1,
                    path.display(),
                    e
                ))
            })
        })
        .collect()
}
