//! Renders catalog templates with caller parameters and host values.

use super::catalog::{Catalog, Operation, Template, Variant};
use super::environment::{
    CURRENT_DATE_SLOT, HostEnvironment, MACHINE_SLOT, SystemEnvironment, format_long_date,
};
use super::params::RenderParameters;
use super::template;
use crate::error::{PromptError, Result};
use std::collections::HashMap;

/// Stateless renderer over a catalog and a host environment.
///
/// Host values are read on every call and never cached, so system prompts
/// rendered on different days or hosts differ.
#[derive(Debug, Clone)]
pub struct Renderer<'c, E = SystemEnvironment> {
    catalog: &'c Catalog,
    env: E,
}

impl Renderer<'static, SystemEnvironment> {
    /// Renderer over the global catalog and the real host.
    pub fn new() -> Self {
        Self::with_environment(Catalog::global(), SystemEnvironment)
    }
}

impl Default for Renderer<'static, SystemEnvironment> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c, E: HostEnvironment> Renderer<'c, E> {
    pub fn with_environment(catalog: &'c Catalog, env: E) -> Self {
        Self { catalog, env }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Render the template for `variant` and `operation`.
    pub fn render(
        &self,
        variant: Variant,
        operation: Operation,
        params: &RenderParameters,
    ) -> Result<String> {
        let template = self.catalog.lookup(variant, operation)?;
        self.render_template(template, params)
    }

    /// Render a template looked up by variant and operation names.
    pub fn render_named(
        &self,
        variant: &str,
        operation: &str,
        params: &RenderParameters,
    ) -> Result<String> {
        let template = self.catalog.lookup_named(variant, operation)?;
        self.render_template(template, params)
    }

    /// Render a specific template.
    ///
    /// Every slot is checked before any substitution happens; the first slot
    /// (in order of appearance) with no value fails the whole call.
    pub fn render_template(&self, template: &Template, params: &RenderParameters) -> Result<String> {
        let slots = template.slots()?;
        let mut values = HashMap::with_capacity(slots.len());

        for slot in slots {
            let value = match slot.as_str() {
                MACHINE_SLOT => self.env.machine(),
                CURRENT_DATE_SLOT => format_long_date(self.env.today()),
                name => params
                    .get(name)
                    .ok_or_else(|| PromptError::MissingParameter {
                        slot: name.to_string(),
                    })?
                    .to_string(),
            };
            values.insert(slot, value);
        }

        Ok(template::render_template(template.text(), &values)?)
    }
}

/// Render with the global catalog and the real host.
pub fn render(variant: Variant, operation: Operation, params: &RenderParameters) -> Result<String> {
    Renderer::new().render(variant, operation, params)
}

/// Render by names with the global catalog and the real host.
pub fn render_named(variant: &str, operation: &str, params: &RenderParameters) -> Result<String> {
    Renderer::new().render_named(variant, operation, params)
}

/// Slot markers of `template` that still appear verbatim in `rendered`.
pub fn unresolved_slots(template: &Template, rendered: &str) -> Result<Vec<String>> {
    Ok(template
        .slots()?
        .into_iter()
        .filter(|slot| rendered.contains(&format!("{{{}}}", slot)))
        .collect())
}
