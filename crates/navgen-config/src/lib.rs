//! Configuration management for navgen.
//!
//! Parses `navgen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `sources.source_dir`
//! - `sidebar.link_prefix`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use navgen_core::SortOrder;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override source directory.
    pub source_dir: Option<PathBuf>,
    /// Override structural suffix.
    pub suffix: Option<String>,
    /// Override type filter.
    pub types: Option<Vec<String>>,
    /// Override link prefix.
    pub link_prefix: Option<String>,
    /// Override sidebar ordering.
    pub order: Option<SortOrder>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navgen.toml";

/// Default source directory, relative to the config file.
const DEFAULT_SOURCE_DIR: &str = "abap";

/// Default structural suffix.
const DEFAULT_SUFFIX: &str = "abap";

/// Characters with special meaning in glob patterns.
const GLOB_METACHARS: &[char] = &['*', '?', '[', ']', '{', '}'];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source discovery configuration (paths are relative strings from TOML).
    #[serde(default)]
    sources: SourcesConfigRaw,
    /// Sidebar output configuration.
    pub sidebar: SidebarConfig,
    /// Type code to group label overrides.
    pub labels: BTreeMap<String, String>,

    /// Resolved sources configuration (set after loading).
    #[serde(skip)]
    pub sources_resolved: SourcesConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw sources configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourcesConfigRaw {
    source_dir: Option<String>,
    suffix: Option<String>,
    types: Option<Vec<String>>,
}

/// Resolved sources configuration with absolute paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourcesConfig {
    /// Root directory scanned for source files.
    pub source_dir: PathBuf,
    /// Structural suffix without the leading dot.
    pub suffix: String,
    /// Restrict discovery to these type codes.
    pub types: Option<Vec<String>>,
}

/// Sidebar output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Prefix prepended to every link.
    pub link_prefix: String,
    /// Group and item ordering.
    pub order: SortOrder,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            link_prefix: "/abap".to_owned(),
            order: SortOrder::default(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`sidebar.link_prefix`").
        field: String,
        /// Error message (e.g., "${`DOCS_PREFIX`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a field to contain none of the given characters.
fn require_no_chars(value: &str, field: &str, forbidden: &[char]) -> Result<(), ConfigError> {
    if let Some(c) = value.chars().find(|c| forbidden.contains(c)) {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain '{c}'"
        )));
    }
    Ok(())
}

/// Strip one leading dot from a suffix (`.abap` -> `abap`).
fn normalize_suffix(suffix: &str) -> String {
    suffix.strip_prefix('.').unwrap_or(suffix).to_owned()
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `navgen.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The final
    /// configuration is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the resulting values are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.sources_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(suffix) = &settings.suffix {
            self.sources_resolved.suffix = normalize_suffix(suffix);
        }
        if let Some(types) = &settings.types {
            self.sources_resolved.types = Some(types.clone());
        }
        if let Some(link_prefix) = &settings.link_prefix {
            self.sidebar.link_prefix.clone_from(link_prefix);
        }
        if let Some(order) = settings.order {
            self.sidebar.order = order;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(current)
    }

    /// Search for config file starting at `dir` and walking up.
    fn discover_config_from(mut current: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            sources: SourcesConfigRaw::default(),
            sidebar: SidebarConfig::default(),
            labels: BTreeMap::new(),
            sources_resolved: SourcesConfig {
                source_dir: base.join(DEFAULT_SOURCE_DIR),
                suffix: DEFAULT_SUFFIX.to_owned(),
                types: None,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_sources()?;
        self.validate_sidebar()?;
        self.validate_labels()?;
        Ok(())
    }

    /// Validate sources configuration.
    fn validate_sources(&self) -> Result<(), ConfigError> {
        let suffix = &self.sources_resolved.suffix;
        require_non_empty(suffix, "sources.suffix")?;
        require_no_chars(suffix, "sources.suffix", &['/', '\\'])?;
        require_no_chars(suffix, "sources.suffix", GLOB_METACHARS)?;

        for type_code in self.sources_resolved.types.iter().flatten() {
            require_non_empty(type_code, "sources.types")?;
            // A dot would make the type code unreachable by last-dot splitting
            require_no_chars(type_code, "sources.types", &['/', '\\', '.'])?;
            require_no_chars(type_code, "sources.types", GLOB_METACHARS)?;
        }

        Ok(())
    }

    /// Validate sidebar configuration.
    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        if self.sidebar.link_prefix.ends_with('/') {
            return Err(ConfigError::Validation(
                "sidebar.link_prefix cannot end with '/'".to_owned(),
            ));
        }
        Ok(())
    }

    /// Validate label overrides.
    fn validate_labels(&self) -> Result<(), ConfigError> {
        for (type_code, label) in &self.labels {
            require_non_empty(type_code, "labels")?;
            require_non_empty(label, &format!("labels.{type_code}"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source_dir) = self.sources.source_dir {
            self.sources.source_dir = Some(expand::expand_env(source_dir, "sources.source_dir")?);
        }

        self.sidebar.link_prefix =
            expand::expand_env(&self.sidebar.link_prefix, "sidebar.link_prefix")?;

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.sources_resolved = SourcesConfig {
            source_dir: config_dir.join(
                self.sources
                    .source_dir
                    .as_deref()
                    .unwrap_or(DEFAULT_SOURCE_DIR),
            ),
            suffix: self
                .sources
                .suffix
                .as_deref()
                .map_or_else(|| DEFAULT_SUFFIX.to_owned(), normalize_suffix),
            types: self.sources.types.clone(),
        };
    }
}
