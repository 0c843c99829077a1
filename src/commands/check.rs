//! Implementation of the `tfprompt check` command.
//!
//! Renders every catalog entry with sample values and verifies that no slot
//! markers survive substitution.

use serde_json::json;
use tfprompt::config::Config;
use tfprompt::error::{PromptError, Result};
use tfprompt::events::{Event, EventAction, append_event};
use tfprompt::prompt::{
    Catalog, HostEnvironment, RenderParameters, Renderer, Template, unresolved_slots,
};

/// Working directory used for sample renders.
const SAMPLE_WORKING_DIRECTORY: &str = "/tmp/tfprompt-check";

/// Outcome of checking one template.
#[derive(Debug)]
struct CheckResult {
    name: String,
    problem: Option<String>,
}

/// Execute the `tfprompt check` command.
pub fn cmd_check(config: &Config) -> Result<()> {
    let renderer = Renderer::new();
    let results = check_catalog(&renderer);

    let failed = results.iter().filter(|r| r.problem.is_some()).count();
    for result in &results {
        match &result.problem {
            None => println!("ok    {}", result.name),
            Some(problem) => println!("FAIL  {}: {}", result.name, problem),
        }
    }
    println!();
    println!("{} checked, {} failed", results.len(), failed);

    if let Some(log) = &config.render_log {
        let event = Event::new(EventAction::Check)
            .with_details(json!({"checked": results.len(), "failed": failed}));
        append_event(log, &event)?;
    }

    if failed > 0 {
        return Err(PromptError::UserError(format!(
            "{} of {} templates failed the check",
            failed,
            results.len()
        )));
    }

    Ok(())
}

fn check_catalog<E: HostEnvironment>(renderer: &Renderer<'_, E>) -> Vec<CheckResult> {
    renderer
        .catalog()
        .entries()
        .into_iter()
        .map(|template| CheckResult {
            name: format!("{}/{}", template.variant, template.operation),
            problem: check_template(renderer, template).err(),
        })
        .collect()
}

fn check_template<E: HostEnvironment>(
    renderer: &Renderer<'_, E>,
    template: &Template,
) -> std::result::Result<(), String> {
    let params = sample_params(template);
    let rendered = renderer
        .render_template(template, &params)
        .map_err(|e| e.to_string())?;

    let unresolved = unresolved_slots(template, &rendered).map_err(|e| e.to_string())?;
    if !unresolved.is_empty() {
        return Err(format!("unresolved slots: {}", unresolved.join(", ")));
    }
    if rendered.trim().is_empty() {
        return Err("rendered to empty text".to_string());
    }
    Ok(())
}

fn sample_params(template: &Template) -> RenderParameters {
    RenderParameters::new()
        .with_resource_name(format!(
            "{}batch_job_queue",
            template.variant.resource_prefix()
        ))
        .with_working_directory(SAMPLE_WORKING_DIRECTORY)
}
