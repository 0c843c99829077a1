//! Error types for tfprompt.
//!
//! Uses thiserror for derive macros. Catalog and renderer failures are
//! structured so callers can tell which slot or template was at fault.

use crate::exit_codes;
use crate::prompt::TemplateError;
use thiserror::Error;

/// Main error type for tfprompt operations.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The variant/operation pair does not exist in the catalog.
    #[error("no template for variant '{variant}' and operation '{operation}'")]
    NotFound { variant: String, operation: String },

    /// A slot referenced by the template was not supplied.
    #[error("missing required parameter '{slot}'")]
    MissingParameter { slot: String },

    /// The template text itself is malformed.
    #[error("invalid template: {0}")]
    Template(#[from] TemplateError),

    /// Bad arguments, invalid config, or a filesystem failure.
    #[error("{0}")]
    UserError(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::NotFound { .. } => exit_codes::NOT_FOUND,
            PromptError::MissingParameter { .. } => exit_codes::MISSING_PARAMETER,
            PromptError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            PromptError::UserError(_) => exit_codes::USER_ERROR,
        }
    }

    pub(crate) fn not_found(variant: impl Into<String>, operation: impl Into<String>) -> Self {
        PromptError::NotFound {
            variant: variant.into(),
            operation: operation.into(),
        }
    }
}

/// Result type alias for tfprompt operations.
pub type Result<T> = std::result::Result<T, PromptError>;
