//! Prompt catalog and rendering.
//!
//! This module provides:
//!
//! - **Catalog**: embedded templates keyed by provider variant and operation
//! - **Template**: `{slot}` substitution engine
//! - **Renderer**: slot validation, host values, and substitution
//!
//! # Template Syntax
//!
//! ```text
//! Generate Terraform documentation for {resource_name}.
//! 1. Navigate to the working directory {working_directory} using cd.
//! resource "aws_batch_job_queue" "test_queue" {{ ... }}
//! ```
//!
//! Use `{{` and `}}` to render literal braces. The `machine` and
//! `current_date` slots are filled by the renderer.

mod catalog;
mod environment;
mod params;
mod renderer;
mod template;


pub use catalog::{Catalog, Operation, Template, Variant};
pub use environment::{
    CURRENT_DATE_SLOT, FixedEnvironment, HostEnvironment, MACHINE_SLOT, SYSTEM_SLOTS,
    SystemEnvironment, format_long_date, is_system_slot,
};
pub use params::{RESOURCE_NAME, RenderParameters, WORKING_DIRECTORY};
pub use renderer::{Renderer, render, render_named, unresolved_slots};
pub use template::{TemplateError, render_template, slots};
