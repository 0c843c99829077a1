//! Implementation of the `tfprompt show` command.
//!
//! Prints a raw template, with its slots unexpanded.

use super::lookup;
use crate::cli::ShowArgs;
use tfprompt::config::Config;
use tfprompt::error::Result;
use tfprompt::prompt::Catalog;

/// Execute the `tfprompt show` command.
pub fn cmd_show(args: ShowArgs, config: &Config) -> Result<()> {
    let template = lookup(
        Catalog::global(),
        args.variant.as_deref(),
        &args.operation,
        config,
    )?;

    let slots = template.slots()?;
    eprintln!(
        "{}/{} (slots: {})",
        template.variant,
        template.operation,
        if slots.is_empty() {
            "none".to_string()
        } else {
            slots.join(", ")
        }
    );
    print!("{}", template.text());

    Ok(())
}
