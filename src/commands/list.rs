//! Implementation of the `tfprompt list` command.
//!
//! Lists catalog entries with the slots a caller must supply and the slots
//! the renderer computes itself.

use super::parse_variant;
use crate::cli::ListArgs;
use serde::Serialize;
use tfprompt::error::{PromptError, Result};
use tfprompt::prompt::{Catalog, Operation, Variant, is_system_slot};

/// One row of the listing.
#[derive(Debug, Serialize)]
struct Entry {
    variant: Variant,
    operation: Operation,
    slots: Vec<String>,
    computed: Vec<String>,
}

/// Execute the `tfprompt list` command.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    let filter = args.variant.as_deref().map(parse_variant).transpose()?;
    let entries = collect_entries(Catalog::global(), filter)?;

    if args.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| PromptError::UserError(format!("failed to serialize listing: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", format_table(&entries));
    }

    Ok(())
}

fn collect_entries(catalog: &Catalog, filter: Option<Variant>) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for template in catalog.entries() {
        if filter.is_some_and(|v| v != template.variant) {
            continue;
        }
        let (computed, slots): (Vec<String>, Vec<String>) =
            template.slots()?.into_iter().partition(|s| is_system_slot(s));
        entries.push(Entry {
            variant: template.variant,
            operation: template.operation,
            slots,
            computed,
        });
    }
    Ok(entries)
}

fn format_table(entries: &[Entry]) -> String {
    let mut out = format!("{:<14} {:<10} {}\n", "VARIANT", "OPERATION", "SLOTS");
    for entry in entries {
        let mut slots = entry.slots.join(", ");
        if !entry.computed.is_empty() {
            if !slots.is_empty() {
                slots.push_str(", ");
            }
            slots.push_str(&format!("({})", entry.computed.join(", ")));
        }
        if slots.is_empty() {
            slots.push('-');
        }
        out.push_str(&format!(
            "{:<14} {:<10} {}\n",
            entry.variant.as_str(),
            entry.operation.as_str(),
            slots
        ));
    }
    out
}
