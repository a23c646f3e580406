//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use std::env::VarError;

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Values without `${` are returned as is. Bare `$VAR` is left untouched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let expanded = shellexpand::env_with_context(value, lookup).map_err(|e| {
        let reason = match e.cause {
            VarError::NotPresent => "not set",
            VarError::NotUnicode(_) => "is not valid UTF-8",
        };
        ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} {reason}", e.var_name),
        }
    })?;
    Ok(expanded.into_owned())
}

fn lookup(var: &str) -> Result<Option<String>, VarError> {
    std::env::var(var).map(Some)
}
