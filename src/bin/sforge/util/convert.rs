use serum_forge::DiscoveryStrategy;
use serum_forge::io::Format;

use crate::cli;

impl From<cli::InputFormat> for Format {
    fn from(f: cli::InputFormat) -> Self {
        match f {
            cli::InputFormat::Toml => Self::Toml,
            cli::InputFormat::Text => Self::Text,
        }
    }
}

impl From<cli::OutputFormat> for Format {
    fn from(f: cli::OutputFormat) -> Self {
        match f {
            cli::OutputFormat::Report => Self::Report,
            cli::OutputFormat::Toml => Self::Toml,
        }
    }
}

impl From<cli::Discovery> for DiscoveryStrategy {
    fn from(d: cli::Discovery) -> Self {
        match d {
            cli::Discovery::Scan => Self::ReverseScan,
            cli::Discovery::Indexed => Self::Indexed,
        }
    }
}

pub fn discovery_display_name(strategy: DiscoveryStrategy) -> &'static str {
    match strategy {
        DiscoveryStrategy::ReverseScan => "reverse scan",
        DiscoveryStrategy::Indexed => "adjacency index",
    }
}
