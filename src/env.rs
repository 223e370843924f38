//! Environment resolution with the development overlay.
//!
//! When `DEVELOPMENT_MODE` is exactly `"true"`, a variable `DEV_<NAME>` takes
//! precedence over `<NAME>`. Lookups go through [`EnvSource`] so callers can
//! resolve against something other than the process environment.

use crate::error::ConfigError;
use std::collections::HashMap;

/// Flag variable that turns the `DEV_` overlay on.
pub const DEVELOPMENT_MODE_VAR: &str = "DEVELOPMENT_MODE";

/// Prefix of overlay variables.
pub const DEV_PREFIX: &str = "DEV_";

pub trait EnvSource {
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads the process environment. Non-unicode values are treated as unset.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment, mostly for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        MapEnv {
            vars: HashMap::new(),
        }
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

pub fn is_development_mode(source: &impl EnvSource) -> bool {
    source.get(DEVELOPMENT_MODE_VAR).as_deref() == Some("true")
}

/// `DEV_<name>` in development mode when set, otherwise `<name>` (possibly unset).
pub fn resolve_environment_variable(source: &impl EnvSource, name: &str) -> Option<String> {
    if is_development_mode(source) {
        if let Some(overlay) = source.get(&format!("{}{}", DEV_PREFIX, name)) {
            return Some(overlay);
        }
    }
    source.get(name)
}

/// Like [`resolve_environment_variable`] but unset or empty is a configuration error.
/// With `trim`, surrounding whitespace is removed and a blank value also fails.
pub fn require_environment_variable(
    source: &impl EnvSource,
    name: &str,
    trim: bool,
) -> Result<String, ConfigError> {
    let value = resolve_environment_variable(source, name)
        .ok_or_else(|| ConfigError::MissingVariable(name.to_string()))?;
    let value = if trim { value.trim().to_string() } else { value };
    if value.is_empty() {
        return Err(ConfigError::MissingVariable(name.to_string()));
    }
    Ok(value)
}

pub fn resolve_env(name: &str) -> Option<String> {
    resolve_environment_variable(&ProcessEnv, name)
}

pub fn require_env(name: &str) -> Result<String, ConfigError> {
    require_environment_variable(&ProcessEnv, name, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_wins_in_development_mode() {
        let env = MapEnv::new()
            .with("DEVELOPMENT_MODE", "true")
            .with("API_KEY", "prod")
            .with("DEV_API_KEY", "dev");
        assert_eq!(resolve_environment_variable(&env, "API_KEY").as_deref(), Some("dev"));
    }

    #[test]
    fn overlay_ignored_unless_flag_is_literally_true() {
        for flag in ["TRUE", "1", "yes", ""] {
            let env = MapEnv::new()
                .with("DEVELOPMENT_MODE", flag)
                .with("API_KEY", "prod")
                .with("DEV_API_KEY", "dev");
            assert_eq!(resolve_environment_variable(&env, "API_KEY").as_deref(), Some("prod"));
        }
    }

    #[test]
    fn falls_back_to_plain_name() {
        let env = MapEnv::new().with("DEVELOPMENT_MODE", "true").with("API_KEY", "prod");
        assert_eq!(resolve_environment_variable(&env, "API_KEY").as_deref(), Some("prod"));
        assert_eq!(resolve_environment_variable(&env, "UNSET"), None);
    }

    #[test]
    fn require_rejects_missing_and_blank() {
        let env = MapEnv::new().with("BLANK", "   ").with("EMPTY", "").with("PADDED", " v ");
        assert_eq!(
            require_environment_variable(&env, "UNSET", true),
            Err(ConfigError::MissingVariable("UNSET".into()))
        );
        assert!(require_environment_variable(&env, "EMPTY", false).is_err());
        assert!(require_environment_variable(&env, "BLANK", true).is_err());
        assert_eq!(require_environment_variable(&env, "BLANK", false).unwrap(), "   ");
        assert_eq!(require_environment_variable(&env, "PADDED", true).unwrap(), "v");
        assert_eq!(require_environment_variable(&env, "PADDED", false).unwrap(), " v ");
    }

    #[test]
    fn process_env_wrappers() {
        let name = "METAVERSE_WEB_TEST_NEVER_SET";
        assert_eq!(resolve_env(name), None);
        assert_eq!(require_env(name), Err(ConfigError::MissingVariable(name.into())));
    }
}
