//! Configuration for the electron-configuration engine.
//!
//! Settings can be built in code, taken from [`EngineConfig::default`], or
//! parsed from a TOML document with the same keys as the embedded
//! `default.config.toml`. Missing keys fall back to their defaults.

use std::sync::OnceLock;

use serde::Deserialize;

use super::error::Error;
use super::fill::FillOrder;

const DEFAULT_CONFIG_TOML: &str = include_str!("../../resources/default.config.toml");

static DEFAULT_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Highest shell the fill order may visit; subshell labels run out past `7i`.
pub const MAX_SUPPORTED_SHELL: u32 = 7;

/// Handling of electrons a configuration pass cannot place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnassignedPolicy {
    /// Fail with [`Error::UnassignedElectrons`].
    #[default]
    Strict,
    /// Keep leftovers in [`Atom::unassigned`](crate::Atom::unassigned) and succeed.
    Stash,
}

/// Settings shared by every configuration pass of an atom.
///
/// # Examples
///
/// ```
/// use orbital_forge::{EngineConfig, UnassignedPolicy};
///
/// let config = EngineConfig::from_toml_str("max_shell = 3").unwrap();
/// assert_eq!(config.max_shell, 3);
/// assert_eq!(config.unassigned_policy, UnassignedPolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Highest principal quantum number visited by the fill order.
    #[serde(default = "default_max_shell")]
    pub max_shell: u32,

    /// What to do with electrons left over after a pass.
    #[serde(default)]
    pub unassigned_policy: UnassignedPolicy,
}

fn default_max_shell() -> u32 {
    6
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_shell: default_max_shell(),
            unassigned_policy: UnassignedPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        let config: EngineConfig = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.max_shell == 0 || self.max_shell > MAX_SUPPORTED_SHELL {
            return Err(Error::invalid_config(format!(
                "max_shell must be between 1 and {MAX_SUPPORTED_SHELL}, got {}",
                self.max_shell
            )));
        }
        Ok(())
    }

    pub fn fill_order(&self) -> FillOrder {
        FillOrder::new(self.max_shell)
    }

    pub fn with_policy(self, unassigned_policy: UnassignedPolicy) -> Self {
        Self {
            unassigned_policy,
            ..self
        }
    }
}

/// Returns the custom configuration if given, otherwise the embedded default.
pub fn load_config(custom_toml: Option<&str>) -> Result<EngineConfig, Error> {
    match custom_toml {
        Some(toml) => EngineConfig::from_toml_str(toml),
        None => Ok(*default_config()),
    }
}

pub fn default_config() -> &'static EngineConfig {
    DEFAULT_CONFIG.get_or_init(|| {
        toml::from_str(DEFAULT_CONFIG_TOML)
            .expect("Failed to parse embedded default configuration. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = EngineConfig::default();
        assert_eq!(config.max_shell, 6);
        assert_eq!(config.unassigned_policy, UnassignedPolicy::Strict);
        assert_eq!(config.fill_order().capacity(), 182);
    }

    #[test]
    fn embedded_default_matches_code_default() {
        assert_eq!(*default_config(), EngineConfig::default());
        assert_eq!(load_config(None).unwrap(), EngineConfig::default());
    }

    #[test]
    fn parses_policy_and_shell() {
        let config = load_config(Some("max_shell = 2\nunassigned_policy = \"stash\"")).unwrap();
        assert_eq!(config.max_shell, 2);
        assert_eq!(config.unassigned_policy, UnassignedPolicy::Stash);
    }

    #[test]
    fn rejects_out_of_range_shell() {
        let err = EngineConfig::from_toml_str("max_shell = 9").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(EngineConfig::from_toml_str("max_shell = 0").is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = EngineConfig::from_toml_str("shells = 3").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn with_policy_keeps_shell() {
        let config = EngineConfig {
            max_shell: 3,
            ..Default::default()
        }
        .with_policy(UnassignedPolicy::Stash);
        assert_eq!(config.max_shell, 3);
        assert_eq!(config.unassigned_policy, UnassignedPolicy::Stash);
    }
}
