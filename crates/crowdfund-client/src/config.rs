use crate::errors::{ClientError, ClientResult};
use crowdfund_sdk::{AddressFinder, PROGRAM_ID};
use serde::{Deserialize, Serialize};
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    pubkey::Pubkey,
};
use std::{fmt, str::FromStr};

/// Which Solana cluster to talk to. In config files it is the same string
/// `--url` takes: a moniker or an http(s) URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
    /// Any other JSON-RPC endpoint
    Custom(String),
}

impl Cluster {
    pub fn rpc_url(&self) -> &str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
            Cluster::Custom(url) => url,
        }
    }
}

impl FromStr for Cluster {
    type Err = ClientError;

    fn from_str(s: &str) -> ClientResult<Self> {
        match s {
            "devnet" | "d" => Ok(Cluster::Devnet),
            "testnet" | "t" => Ok(Cluster::Testnet),
            "mainnet-beta" | "mainnet" | "m" => Ok(Cluster::MainnetBeta),
            "localnet" | "localhost" | "l" => Ok(Cluster::Localnet),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(Cluster::Custom(url.to_string()))
            }
            other => Err(ClientError::InvalidConfig(format!(
                "Unknown cluster '{other}' (expected devnet, testnet, mainnet-beta, localnet or an http(s) URL)"
            ))),
        }
    }
}

impl TryFrom<String> for Cluster {
    type Error = ClientError;

    fn try_from(s: String) -> ClientResult<Self> {
        s.parse()
    }
}

impl From<Cluster> for String {
    fn from(cluster: Cluster) -> Self {
        cluster.to_string()
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::Devnet => write!(f, "devnet"),
            Cluster::Testnet => write!(f, "testnet"),
            Cluster::MainnetBeta => write!(f, "mainnet-beta"),
            Cluster::Localnet => write!(f, "localnet"),
            Cluster::Custom(url) => write!(f, "{url}"),
        }
    }
}

/// Connection settings shared by every crowdfund RPC operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub cluster: Cluster,

    /// Commitment used for reads and for confirming sent transactions
    #[serde(default = "default_commitment")]
    pub commitment: CommitmentLevel,

    /// Commitment the node simulates against before accepting a transaction
    #[serde(default = "default_preflight_commitment")]
    pub preflight_commitment: CommitmentLevel,

    /// Address the crowdfund program is deployed at
    #[serde(default = "default_program_id", with = "pubkey_string")]
    pub program_id: Pubkey,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::default(),
            commitment: default_commitment(),
            preflight_commitment: default_preflight_commitment(),
            program_id: default_program_id(),
        }
    }
}

impl ClientConfig {
    pub fn rpc_url(&self) -> &str {
        self.cluster.rpc_url()
    }

    pub fn commitment_config(&self) -> CommitmentConfig {
        CommitmentConfig {
            commitment: self.commitment,
        }
    }

    pub fn address_finder(&self) -> AddressFinder {
        AddressFinder::with_program_id(self.program_id)
    }
}

fn default_commitment() -> CommitmentLevel {
    CommitmentLevel::Confirmed
}

fn default_preflight_commitment() -> CommitmentLevel {
    CommitmentLevel::Processed
}

fn default_program_id() -> Pubkey {
    PROGRAM_ID
}

/// Pubkeys in config files are base58 strings, not byte arrays
mod pubkey_string {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(|e| D::Error::custom(format!("invalid pubkey '{s}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.cluster, Cluster::Devnet);
        assert_eq!(config.rpc_url(), "https://api.devnet.solana.com");
        assert_eq!(config.commitment, CommitmentLevel::Confirmed);
        assert_eq!(config.preflight_commitment, CommitmentLevel::Processed);
        assert_eq!(config.program_id, PROGRAM_ID);
        assert_eq!(config.address_finder(), AddressFinder::default());
    }

    #[test]
    fn test_cluster_from_str() {
        assert_eq!("devnet".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!("mainnet".parse::<Cluster>().unwrap(), Cluster::MainnetBeta);
        assert_eq!(
            "http://10.0.0.2:8899".parse::<Cluster>().unwrap(),
            Cluster::Custom("http://10.0.0.2:8899".to_string())
        );
        assert!(matches!(
            "moonnet".parse::<Cluster>(),
            Err(ClientError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_yaml_partial_config_uses_defaults() {
        let config: ClientConfig = serde_yaml::from_str("cluster: localnet\n").unwrap();
        assert_eq!(config.rpc_url(), "http://127.0.0.1:8899");
        assert_eq!(config.commitment, CommitmentLevel::Confirmed);
        assert_eq!(config.program_id, PROGRAM_ID);
    }

    #[test]
    fn test_yaml_full_config() {
        let program_id = Pubkey::new_unique();
        let yaml = format!(
            "cluster: https://rpc.example.org\ncommitment: finalized\npreflight_commitment: confirmed\nprogram_id: {program_id}\n"
        );

        let config: ClientConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.rpc_url(), "https://rpc.example.org");
        assert_eq!(config.commitment, CommitmentLevel::Finalized);
        assert_eq!(config.preflight_commitment, CommitmentLevel::Confirmed);
        assert_eq!(config.program_id, program_id);

        let round_tripped: ClientConfig =
            serde_yaml::from_str(&serde_yaml::to_string(&config).unwrap()).unwrap();
        assert_eq!(round_tripped, config);
    }

    #[test]
    fn test_yaml_cluster_is_a_plain_string() {
        for cluster in [
            Cluster::Devnet,
            Cluster::MainnetBeta,
            Cluster::Custom("http://10.0.0.2:8899".to_string()),
        ] {
            let written = format!("cluster: {cluster}\n");
            let config: ClientConfig = serde_yaml::from_str(&written).unwrap();
            assert_eq!(config.cluster, cluster);

            let yaml = serde_yaml::to_string(&cluster).unwrap();
            assert_eq!(serde_yaml::from_str::<Cluster>(&yaml).unwrap(), cluster);
        }

        assert!(serde_yaml::from_str::<ClientConfig>("cluster: moonnet\n").is_err());
    }

    #[test]
    fn test_yaml_rejects_bad_program_id() {
        let result: Result<ClientConfig, _> = serde_yaml::from_str("program_id: not-a-key\n");
        assert!(result.is_err());
    }
}
