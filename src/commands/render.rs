//! Implementation of the `tfprompt render` command.
//!
//! Renders one template and prints it, or writes it to a file.

use super::lookup;
use crate::cli::RenderArgs;
use chrono::NaiveDate;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;
use tfprompt::config::Config;
use tfprompt::error::{PromptError, Result};
use tfprompt::events::{Event, EventAction, append_event};
use tfprompt::prompt::{
    Catalog, HostEnvironment, RESOURCE_NAME, RenderParameters, Renderer, SystemEnvironment,
    Variant, WORKING_DIRECTORY, is_system_slot,
};

/// Shape of a Terraform resource type: lower-case words joined by underscores.
static RESOURCE_TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)+$").expect("Invalid resource type regex")
});

/// Host values with optional command-line overrides.
struct HostOverrides {
    machine: Option<String>,
    date: Option<NaiveDate>,
}

impl HostEnvironment for HostOverrides {
    fn machine(&self) -> String {
        self.machine
            .clone()
            .unwrap_or_else(|| SystemEnvironment.machine())
    }

    fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| SystemEnvironment.today())
    }
}

/// Execute the `tfprompt render` command.
pub fn cmd_render(args: RenderArgs, config: &Config) -> Result<()> {
    let catalog = Catalog::global();
    let template = lookup(catalog, args.variant.as_deref(), &args.operation, config)?;

    let params = build_params(&args, config);
    if let Some(name) = params.get(RESOURCE_NAME) {
        if let Some(warning) = resource_name_warning(template.variant, name) {
            eprintln!("Warning: {}", warning);
        }
    }

    let renderer = Renderer::with_environment(
        catalog,
        HostOverrides {
            machine: args.machine.clone(),
            date: args.date,
        },
    );
    let rendered = renderer.render_template(template, &params)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|e| {
                PromptError::UserError(format!(
                    "failed to write prompt to '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            eprintln!(
                "Wrote {}/{} prompt to {}",
                template.variant,
                template.operation,
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    if let Some(log) = &config.render_log {
        let event = Event::new(EventAction::Render)
            .with_template(template.variant, template.operation)
            .with_details(json!({
                "resource_name": params.get(RESOURCE_NAME),
                "working_directory": params.get(WORKING_DIRECTORY),
                "output": args.output.as_ref().map(|p| p.display().to_string()),
                "bytes": rendered.len(),
            }));
        append_event(log, &event)?;
    }

    Ok(())
}

/// Collect slot values: named flags, then `--param`, then config defaults.
fn build_params(args: &RenderArgs, config: &Config) -> RenderParameters {
    let mut params = RenderParameters::new();

    for (key, value) in &args.params {
        if is_system_slot(key) {
            eprintln!(
                "Warning: ignoring --param {}, it is computed at render time",
                key
            );
            continue;
        }
        params.insert(key.clone(), value.clone());
    }

    if let Some(name) = &args.resource_name {
        params.insert(RESOURCE_NAME, name.clone());
    }
    if let Some(dir) = &args.working_directory {
        params.insert(WORKING_DIRECTORY, dir.clone());
    }

    config.apply_defaults(&mut params);
    params
}

/// Describe why `name` does not look like a resource type of `variant`'s
/// provider, if it doesn't.
fn resource_name_warning(variant: Variant, name: &str) -> Option<String> {
    if !RESOURCE_TYPE_REGEX.is_match(name) {
        return Some(format!(
            "'{}' does not look like a Terraform resource type (e.g. {}example_thing)",
            name,
            variant.resource_prefix()
        ));
    }

    // `awscc_` also starts with `aws`, so check the longer prefix first.
    let is_awscc = name.starts_with(Variant::CloudControl.resource_prefix());
    let matches = match variant {
        Variant::Standard => name.starts_with(Variant::Standard.resource_prefix()) && !is_awscc,
        Variant::CloudControl => is_awscc,
    };

    if matches {
        None
    } else {
        Some(format!(
            "'{}' is not a {} provider resource (expected prefix '{}')",
            name,
            variant,
            variant.resource_prefix()
        ))
    }
}
