//! `docnav export` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use docnav_config::{CliSettings, Config, HostConfig};

use crate::error::CliError;
use crate::output::Output;

/// Output format for the exported configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    Json,
    Yaml,
    Toml,
}

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long, env = "DOCNAV_TITLE")]
    title: Option<String>,
}

impl ExportArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            title: self.title,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let rendered = render(&config.to_host_config(), self.format)?;

        if let Some(path) = self.output {
            std::fs::write(&path, rendered)?;
            output.success(&format!("Configuration written to {}", path.display()));
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
        Ok(())
    }
}

/// Serialize the host configuration, ending with a newline.
fn render(host: &HostConfig<'_>, format: ExportFormat) -> Result<String, CliError> {
    let mut rendered = match format {
        ExportFormat::Json => serde_json::to_string_pretty(host)?,
        ExportFormat::Yaml => serde_yaml::to_string(host)?,
        ExportFormat::Toml => toml::to_string_pretty(host)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
