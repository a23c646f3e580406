//! `navgen summary` command implementation.

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the summary command.
#[derive(Args)]
pub(crate) struct SummaryArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl SummaryArgs {
    /// Execute the summary command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or discovery fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (config, nav) = self.source.build_sidebar()?;

        output.heading(&format!(
            "Sidebar for {}",
            config.sources_resolved.source_dir.display()
        ));

        if nav.is_empty() {
            output.warning("No source files found");
            return Ok(());
        }

        for node in &nav {
            output.group(&node.label, node.items.len());
        }
        let items = nav.iter().map(|node| node.items.len()).sum();
        output.totals(nav.len(), items);

        Ok(())
    }
}
