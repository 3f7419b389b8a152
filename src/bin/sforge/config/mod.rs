use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use serum_forge::AnalysisConfig;
use serum_forge::io::ReportConfig;

use crate::cli::{DiscoveryOptions, ReportOptions};

/// Contents of a `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
}

impl ConfigFile {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

pub fn build_analysis_config(base: AnalysisConfig, opts: &DiscoveryOptions) -> AnalysisConfig {
    match opts.discovery {
        Some(discovery) => AnalysisConfig {
            discovery: discovery.into(),
        },
        None => base,
    }
}

pub fn build_report_config(base: ReportConfig, opts: &ReportOptions) -> ReportConfig {
    ReportConfig {
        human_label: opts.human_label.clone().unwrap_or(base.human_label),
        vitales_label: opts.vitales_label.clone().unwrap_or(base.vitales_label),
        precision: opts.precision.unwrap_or(base.precision),
    }
}
