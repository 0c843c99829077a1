//! Command implementations for tfprompt.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod history;
mod list;
mod render;
mod show;

use crate::cli::{Cli, Command};
use tfprompt::config::Config;
use tfprompt::error::{PromptError, Result};
use tfprompt::prompt::{Catalog, Template, Variant};

/// Dispatch a command to its implementation.
///
/// The config is resolved once here and handed to every command.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        PromptError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::Render(args) => render::cmd_render(args, &config),
        Command::List(args) => list::cmd_list(args),
        Command::Show(args) => show::cmd_show(args, &config),
        Command::Check => check::cmd_check(&config),
        Command::History(args) => history::cmd_history(args, &config),
    }
}

/// Look up a template, falling back to the config's default variant.
fn lookup<'c>(
    catalog: &'c Catalog,
    variant: Option<&str>,
    operation: &str,
    config: &Config,
) -> Result<&'c Template> {
    let variant = variant.unwrap_or_else(|| config.default_variant.as_str());
    catalog.lookup_named(variant, operation)
}

/// Parse an optional variant filter given on the command line.
fn parse_variant(name: &str) -> Result<Variant> {
    Variant::from_str(name).ok_or_else(|| {
        PromptError::UserError(format!(
            "unknown variant '{}'. Expected one of: {}",
            name,
            Variant::ALL.map(|v| v.as_str()).join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfprompt::prompt::Operation;

    #[test]
    fn test_lookup_uses_config_default_variant() {
        let config = Config::from_yaml("default_variant: cloud-control").unwrap();
        let template = lookup(Catalog::global(), None, "create", &config).unwrap();
        assert_eq!(template.variant, Variant::CloudControl);
        assert_eq!(template.operation, Operation::Create);
    }

    #[test]
    fn test_lookup_explicit_variant_wins() {
        let config = Config::from_yaml("default_variant: cloud-control").unwrap();
        let template = lookup(Catalog::global(), Some("standard"), "create", &config).unwrap();
        assert_eq!(template.variant, Variant::Standard);
    }

    #[test]
    fn test_lookup_unknown_operation() {
        let err = lookup(Catalog::global(), None, "nonexistent_op", &Config::default()).unwrap_err();
        assert!(matches!(err, PromptError::NotFound { .. }));
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!(parse_variant("awscc").unwrap(), Variant::CloudControl);
        let err = parse_variant("gcp").unwrap_err();
        assert!(err.to_string().contains("standard, cloud-control"));
    }
}
