//! CLI command implementations.

mod build;
mod summary;

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use navgen_config::{CliSettings, Config};
use navgen_core::{LabelDictionary, SidebarBuilder, SidebarNode, SidebarOptions, SortOrder};
use navgen_fs::GlobLister;

pub(crate) use build::BuildArgs;
pub(crate) use summary::SummaryArgs;

use crate::error::CliError;

/// Sidebar ordering accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum OrderArg {
    /// Keep discovery order.
    Discovery,
    /// Sort groups by type code and items by name.
    Name,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Discovery => Self::Discovery,
            OrderArg::Name => Self::Name,
        }
    }
}

/// Source selection arguments shared by all commands.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover navgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source directory to scan (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Structural suffix, e.g. "abap" (overrides config).
    #[arg(long)]
    suffix: Option<String>,

    /// Only include files of this type code; repeatable (overrides config).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    types: Vec<String>,

    /// Prefix for sidebar links (overrides config).
    #[arg(long, env = "NAVGEN_LINK_PREFIX", allow_hyphen_values = true)]
    link_prefix: Option<String>,

    /// Group and item ordering (overrides config).
    #[arg(long, value_enum)]
    order: Option<OrderArg>,

    /// Enable verbose output (info-level logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SourceArgs {
    /// Collect overrides for the loaded configuration.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            source_dir: self.source_dir.clone(),
            suffix: self.suffix.clone(),
            types: (!self.types.is_empty()).then(|| self.types.clone()),
            link_prefix: self.link_prefix.clone(),
            order: self.order.map(SortOrder::from),
        }
    }

    /// Load configuration with CLI overrides applied.
    fn load_config(&self) -> Result<Config, CliError> {
        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        Ok(config)
    }

    /// Load configuration, discover source files and build the sidebar.
    fn build_sidebar(&self) -> Result<(Config, Vec<SidebarNode>), CliError> {
        let config = self.load_config()?;
        let source_dir = &config.sources_resolved.source_dir;
        tracing::info!(source_dir = %source_dir.display(), "Building sidebar");

        let lister = GlobLister::new(source_dir.clone());
        let nav = SidebarBuilder::new(lister, sidebar_options(&config)).build()?;
        Ok((config, nav))
    }
}

/// Map loaded configuration to sidebar builder options.
///
/// Configured labels are layered over the built-in dictionary.
fn sidebar_options(config: &Config) -> SidebarOptions {
    let mut labels = LabelDictionary::builtin();
    labels.extend(config.labels.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    SidebarOptions {
        suffix: config.sources_resolved.suffix.clone(),
        labels,
        link_prefix: config.sidebar.link_prefix.clone(),
        order: config.sidebar.order,
        types: config.sources_resolved.types.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        source: SourceArgs,
    }

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("navgen.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_cli_settings_from_args() {
        let cli = TestCli::parse_from([
            "navgen",
            "--source-dir",
            "/src",
            "--suffix",
            "md",
            "-t",
            "intf",
            "--type",
            "clas",
            "--link-prefix",
            "/api",
            "--order",
            "name",
        ]);

        let settings = cli.source.cli_settings();

        assert_eq!(settings.source_dir, Some(PathBuf::from("/src")));
        assert_eq!(settings.suffix.as_deref(), Some("md"));
        assert_eq!(
            settings.types,
            Some(vec!["intf".to_owned(), "clas".to_owned()])
        );
        assert_eq!(settings.link_prefix.as_deref(), Some("/api"));
        assert_eq!(settings.order, Some(SortOrder::Name));
    }

    #[test]
    fn test_cli_settings_without_types_keeps_config() {
        let cli = TestCli::parse_from(["navgen"]);

        let settings = cli.source.cli_settings();

        assert!(settings.types.is_none());
        assert!(settings.order.is_none());
    }

    #[test]
    fn test_sidebar_options_layers_labels_over_builtin() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(
            temp_dir.path(),
            r#"
[sidebar]
link_prefix = "/reference"
order = "name"

[labels]
clas = "Classes"
"#,
        );
        let config = Config::load(Some(path.as_path()), None).unwrap();

        let options = sidebar_options(&config);

        assert_eq!(options.labels.resolve("intf"), "Interfaces");
        assert_eq!(options.labels.resolve("clas"), "Classes");
        assert_eq!(options.link_prefix, "/reference");
        assert_eq!(options.order, SortOrder::Name);
        assert_eq!(options.suffix, "abap");
    }

    #[test]
    fn test_build_sidebar_from_config_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(temp_dir.path(), "abap/src/zif_a.intf.abap");
        touch(temp_dir.path(), "abap/src/zcl_b.clas.abap");
        let path = write_config(temp_dir.path(), "");
        let cli = TestCli::parse_from([
            "navgen",
            "--config",
            path.to_str().unwrap(),
            "--type",
            "intf",
        ]);

        let (config, nav) = cli.source.build_sidebar().unwrap();

        assert_eq!(
            config.sources_resolved.source_dir,
            temp_dir.path().join("abap")
        );
        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].label, "Interfaces");
        assert_eq!(nav[0].items[0].link, "/abap/intf/zif_a");
    }

    #[test]
    fn test_build_sidebar_missing_source_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "[sources]\nsource_dir = \"missing\"\n");
        let cli = TestCli::parse_from(["navgen", "--config", path.to_str().unwrap()]);

        let err = cli.source.build_sidebar().unwrap_err();

        assert!(matches!(err, CliError::List(_)));
        assert!(err.to_string().contains("Not found"));
    }
}
