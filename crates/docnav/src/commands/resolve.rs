//! `docnav resolve` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::Config;
use docnav_descriptor::{ResolvedSidebar, SidebarItem};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Route to resolve (e.g., /guide/getting-started).
    route: String,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ResolveArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let Some(resolved) = config.descriptor().sidebar.resolve(&self.route) else {
            output.warning(&format!("No sidebar section matches {}", self.route));
            return Ok(());
        };

        output.highlight(&format!("{} -> {}", self.route, resolved.prefix));
        for line in render_sidebar(&resolved) {
            output.info(&line);
        }
        Ok(())
    }
}

/// Render groups and items as an indented outline.
fn render_sidebar(resolved: &ResolvedSidebar<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    for group in resolved.groups {
        let marker = match group.collapsed {
            Some(true) => " [collapsed]",
            _ => "",
        };
        lines.push(format!("{}{marker}", group.text));
        render_items(&group.items, 1, &mut lines);
    }
    lines
}

fn render_items(items: &[SidebarItem], depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for item in items {
        match &item.link {
            Some(link) => lines.push(format!("{indent}{} ({link})", item.text)),
            None => lines.push(format!("{indent}{}", item.text)),
        }
        render_items(&item.items, depth + 1, lines);
    }
}
