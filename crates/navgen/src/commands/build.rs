//! `navgen build` command implementation.

use std::path::PathBuf;

use clap::Args;
use console::Term;
use navgen_core::SidebarNode;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the sidebar JSON to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, discovery, or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (config, nav) = self.source.build_sidebar()?;
        if nav.is_empty() {
            output.warning(&format!(
                "No source files found in {}",
                config.sources_resolved.source_dir.display()
            ));
        }

        let json = render_json(&nav, self.compact)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, format!("{json}\n"))?;
                output.success(&format!(
                    "Wrote {} groups to {}",
                    nav.len(),
                    path.display()
                ));
            }
            None => Term::stdout().write_line(&json)?,
        }

        Ok(())
    }
}

/// Serialize sidebar nodes to JSON.
fn render_json(nav: &[SidebarNode], compact: bool) -> Result<String, serde_json::Error> {
    if compact {
        serde_json::to_string(nav)
    } else {
        serde_json::to_string_pretty(nav)
    }
}
