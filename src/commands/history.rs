//! Implementation of the `tfprompt history` command.
//!
//! Prints the most recent entries of the configured render log.

use crate::cli::HistoryArgs;
use tfprompt::config::Config;
use tfprompt::error::{PromptError, Result};
use tfprompt::events::{Event, read_events};

/// Execute the `tfprompt history` command.
pub fn cmd_history(args: HistoryArgs, config: &Config) -> Result<()> {
    let log = config.render_log.as_ref().ok_or_else(|| {
        PromptError::UserError(
            "no render log configured.\n\n\
             Set `render_log` in tfprompt.yaml to record renders."
                .to_string(),
        )
    })?;

    let events = read_events(log)?;
    if events.is_empty() {
        println!("No renders recorded in {}", log.display());
        return Ok(());
    }

    for event in recent(&events, args.limit) {
        println!("{}", format_event(event));
    }

    Ok(())
}

fn recent(events: &[Event], limit: usize) -> &[Event] {
    &events[events.len().saturating_sub(limit)..]
}

fn format_event(event: &Event) -> String {
    let target = match (event.variant, event.operation) {
        (Some(v), Some(op)) => format!("{}/{}", v, op),
        _ => "-".to_string(),
    };
    let resource = event
        .details
        .get("resource_name")
        .and_then(|v| v.as_str())
        .unwrap_or("");

    format!(
        "{}  {:<6} {:<22} {}  {}",
        event.ts.format("%Y-%m-%d %H:%M:%S UTC"),
        event.action.to_string(),
        target,
        event.actor,
        resource
    )
    .trim_end()
    .to_string()
}
