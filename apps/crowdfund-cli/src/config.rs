use crate::error::CliResult;
use crowdfund_client::{ClientConfig, Cluster};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::path::{Path, PathBuf};

/// CLI configuration file structure (YAML)
///
/// ```yaml
/// cluster: devnet
/// commitment: confirmed
/// preflight_commitment: processed
/// program_id: Bhw3VHBAGiqKrAgPdSjG1oJVd4psHvfQfY5EieWP3b14
/// keypair_path: /home/me/.config/solana/id.json
/// trusted: true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(flatten)]
    pub client: ClientConfig,

    /// Keypair file the local signing agent signs with
    #[serde(default = "default_keypair_path")]
    pub keypair_path: PathBuf,

    /// Whether the signing agent may reconnect without asking
    #[serde(default)]
    pub trusted: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            keypair_path: default_keypair_path(),
            trusted: false,
        }
    }
}

impl CliConfig {
    /// Load `path`, or the default config file if it exists, or built-in defaults
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Command-line flags win over the file
    pub fn with_overrides(
        mut self,
        cluster: Option<Cluster>,
        keypair_path: Option<PathBuf>,
        program_id: Option<Pubkey>,
    ) -> Self {
        if let Some(cluster) = cluster {
            self.client.cluster = cluster;
        }
        if let Some(keypair_path) = keypair_path {
            self.keypair_path = keypair_path;
        }
        if let Some(program_id) = program_id {
            self.client.program_id = program_id;
        }
        self
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// `~/.config/solana/id.json`, where the Solana CLI keeps its default keypair
fn default_keypair_path() -> PathBuf {
    home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("solana")
        .join("id.json")
}

fn default_config_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(".config").join("crowdfund").join("config.yml"))
}
