//! tfprompt: prompt catalog and renderer for agent-driven Terraform workflows.
//!
//! The catalog holds two independent sets of prompts, one for the standard
//! AWS provider and one for the AWSCC (Cloud Control) provider. The renderer
//! fills their slots from caller parameters and host values.
//!
//! ```
//! use tfprompt::prompt::{Operation, RenderParameters, Variant, render};
//!
//! let params = RenderParameters::new()
//!     .with_resource_name("aws_batch_job_queue")
//!     .with_working_directory("/tmp/work");
//! let prompt = render(Variant::Standard, Operation::Create, &params)?;
//! assert!(prompt.contains("aws_batch_job_queue.html.markdown"));
//! # Ok::<(), tfprompt::error::PromptError>(())
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod prompt;
