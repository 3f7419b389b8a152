//! Configuration types for molecular analysis.
//!
//! - [`AnalysisConfig`] — Main configuration struct for [`analyze`](super::analyze)
//! - [`DiscoveryStrategy`] — How structure discovery finds reverse bonds

use serde::Deserialize;

/// Main configuration for the analysis pipeline.
///
/// # Examples
///
/// ```
/// use serum_forge::{AnalysisConfig, DiscoveryStrategy};
///
/// // Default configuration (full reverse scan)
/// let default = AnalysisConfig::default();
/// assert_eq!(default.discovery, DiscoveryStrategy::ReverseScan);
///
/// // Indexed discovery for large datasets
/// let indexed = AnalysisConfig {
///     discovery: DiscoveryStrategy::Indexed,
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Strategy used to follow bonds recorded only on the other endpoint.
    pub discovery: DiscoveryStrategy,
}

/// Strategy for discovering molecules that bond *to* the current molecule.
///
/// Both strategies yield identical structures with identical member order;
/// they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscoveryStrategy {
    /// Scan the whole store for referrers of every visited molecule.
    ///
    /// Cost grows with component size times store size.
    #[default]
    #[serde(alias = "scan")]
    ReverseScan,
    /// Build a forward and reverse adjacency index once per discovery call.
    ///
    /// Cost is linear in the number of stored bond references.
    Indexed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = AnalysisConfig::default();
        assert_eq!(config.discovery, DiscoveryStrategy::ReverseScan);
    }

    #[test]
    fn deserializes_from_toml() {
        let config: AnalysisConfig = toml::from_str(r#"discovery = "indexed""#).unwrap();
        assert_eq!(config.discovery, DiscoveryStrategy::Indexed);

        let config: AnalysisConfig = toml::from_str(r#"discovery = "scan""#).unwrap();
        assert_eq!(config.discovery, DiscoveryStrategy::ReverseScan);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: AnalysisConfig = toml::from_str("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<AnalysisConfig, _> = toml::from_str("strategy = \"indexed\"");
        assert!(result.is_err());
    }
}
