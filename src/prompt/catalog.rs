//! The prompt catalog.
//!
//! Templates are embedded in the binary and keyed by [`Variant`] and
//! [`Operation`]. The catalog is built once on first use and never mutated
//! afterwards; every lookup returns a shared reference into it.

use super::template::{self, TemplateError};
use crate::error::{PromptError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Provider variant a set of prompts targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// The standard AWS provider (documentation pages).
    #[default]
    #[serde(alias = "aws")]
    Standard,
    /// The AWSCC provider, backed by the Cloud Control API (schema-derived examples).
    #[serde(alias = "cloud_control", alias = "awscc")]
    CloudControl,
}

impl Variant {
    /// All variants, in catalog order.
    pub const ALL: [Variant; 2] = [Variant::Standard, Variant::CloudControl];

    /// Parse a variant from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "aws" => Some(Self::Standard),
            "cloud-control" | "cloud_control" | "awscc" => Some(Self::CloudControl),
            _ => None,
        }
    }

    /// Canonical name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::CloudControl => "cloud-control",
        }
    }

    /// Prefix Terraform resource types carry in this variant's provider.
    pub fn resource_prefix(&self) -> &'static str {
        match self {
            Variant::Standard => "aws_",
            Variant::CloudControl => "awscc_",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task category a prompt addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// System capability preamble.
    System,
    Create,
    Update,
    Delete,
    Review,
    Cleanup,
    Summary,
}

impl Operation {
    /// All operations, in catalog order.
    pub const ALL: [Operation; 7] = [
        Operation::System,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
        Operation::Review,
        Operation::Cleanup,
        Operation::Summary,
    ];

    /// Parse an operation from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Some(Self::System),
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            "review" => Some(Self::Review),
            "cleanup" | "cleaner" => Some(Self::Cleanup),
            "summary" => Some(Self::Summary),
            _ => None,
        }
    }

    /// Canonical name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::System => "system",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Review => "review",
            Operation::Cleanup => "cleanup",
            Operation::Summary => "summary",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub variant: Variant,
    pub operation: Operation,
    text: &'static str,
}

impl Template {
    pub const fn new(variant: Variant, operation: Operation, text: &'static str) -> Self {
        Self {
            variant,
            operation,
            text,
        }
    }

    /// Raw template text, slots unexpanded.
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Slot names referenced by the text, in order of first appearance.
    pub fn slots(&self) -> std::result::Result<Vec<String>, TemplateError> {
        template::slots(self.text)
    }
}

macro_rules! embedded {
    ($variant:ident, $operation:ident, $path:literal) => {
        Template::new(
            Variant::$variant,
            Operation::$operation,
            include_str!($path),
        )
    };
}

fn embedded_templates() -> Vec<Template> {
    vec![
        embedded!(Standard, System, "templates/standard/system.txt"),
        embedded!(Standard, Create, "templates/standard/create.txt"),
        embedded!(Standard, Update, "templates/standard/update.txt"),
        embedded!(Standard, Delete, "templates/standard/delete.txt"),
        embedded!(Standard, Review, "templates/standard/review.txt"),
        embedded!(Standard, Cleanup, "templates/standard/cleanup.txt"),
        embedded!(Standard, Summary, "templates/standard/summary.txt"),
        embedded!(CloudControl, System, "templates/cloud_control/system.txt"),
        embedded!(CloudControl, Create, "templates/cloud_control/create.txt"),
        embedded!(CloudControl, Update, "templates/cloud_control/update.txt"),
        embedded!(CloudControl, Delete, "templates/cloud_control/delete.txt"),
        embedded!(CloudControl, Review, "templates/cloud_control/review.txt"),
        embedded!(CloudControl, Cleanup, "templates/cloud_control/cleanup.txt"),
        embedded!(CloudControl, Summary, "templates/cloud_control/summary.txt"),
    ]
}

static GLOBAL: LazyLock<Catalog> = LazyLock::new(|| Catalog::from_templates(embedded_templates()));

/// Read-only collection of templates keyed by variant and operation.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: HashMap<(Variant, Operation), Template>,
}

impl Catalog {
    /// The process-wide catalog of embedded templates.
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    /// Build a catalog from a list of templates. Later entries replace
    /// earlier ones with the same key.
    pub fn from_templates<I>(templates: I) -> Self
    where
        I: IntoIterator<Item = Template>,
    {
        Self {
            templates: templates
                .into_iter()
                .map(|t| ((t.variant, t.operation), t))
                .collect(),
        }
    }

    /// Look up the template for a variant and operation.
    pub fn lookup(&self, variant: Variant, operation: Operation) -> Result<&Template> {
        self.templates
            .get(&(variant, operation))
            .ok_or_else(|| PromptError::not_found(variant.as_str(), operation.as_str()))
    }

    /// Look up a template by variant and operation names.
    ///
    /// Unknown names fail the same way as a missing pair.
    pub fn lookup_named(&self, variant: &str, operation: &str) -> Result<&Template> {
        match (Variant::from_str(variant), Operation::from_str(operation)) {
            (Some(v), Some(op)) => self.lookup(v, op),
            _ => Err(PromptError::not_found(variant, operation)),
        }
    }

    /// All templates, ordered by variant and then operation.
    pub fn entries(&self) -> Vec<&Template> {
        let mut entries: Vec<&Template> = self.templates.values().collect();
        entries.sort_by_key(|t| (t.variant, t.operation));
        entries
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
