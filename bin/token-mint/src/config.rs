//! Project configuration: named networks and the compiler pin.
//!
//! Without a config file the built-in [`MintConfig::default`] applies, which
//! targets Sepolia and reads the key from `PRIVATE_KEY`.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};
use url::Url;

use crate::{constants::config as defaults, error::Error};

/// Root project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintConfig {
    /// Solidity compiler version the project's contracts are built with.
    #[serde(default = "defaults::default_solidity")]
    pub solidity: String,
    /// Network used when none is selected explicitly.
    #[serde(default = "defaults::default_network")]
    pub default_network: String,
    /// Networks by name.
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkConfig>,
}

/// A network the mint can be sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint (http, https, ws or wss).
    pub url: Url,
    /// Environment variable holding the signer's private key.
    #[serde(default = "defaults::default_private_key_env")]
    pub private_key_env: String,
    /// Chain id the endpoint must report, if pinned.
    pub chain_id: Option<u64>,
    /// Blocks that must include the mint before the run succeeds.
    #[serde(default = "defaults::default_confirmations")]
    pub confirmations: u64,
}

impl Default for MintConfig {
    fn default() -> Self {
        let sepolia = NetworkConfig {
            url: defaults::DEFAULT_NETWORK_URL
                .parse()
                .expect("default network url is valid"),
            private_key_env: defaults::default_private_key_env(),
            chain_id: Some(defaults::DEFAULT_CHAIN_ID),
            confirmations: defaults::DEFAULT_CONFIRMATIONS,
        };
        Self {
            solidity: defaults::default_solidity(),
            default_network: defaults::default_network(),
            networks: BTreeMap::from([(defaults::default_network(), sepolia)]),
        }
    }
}

impl MintConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> eyre::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.networks.is_empty() {
            return Err(Error::NoNetworks);
        }
        self.network(None)?;
        if let Some((name, _)) = self.networks.iter().find(|(_, n)| n.confirmations == 0) {
            return Err(Error::ZeroConfirmations(name.clone()));
        }
        Ok(())
    }

    /// Look up a network by name, falling back to `default_network`.
    pub fn network<'a>(
        &'a self,
        name: Option<&'a str>,
    ) -> Result<(&'a str, &'a NetworkConfig), Error> {
        let name = name.unwrap_or(self.default_network.as_str());
        self.networks
            .get(name)
            .map(|network| (name, network))
            .ok_or_else(|| Error::UnknownNetwork {
                name: name.to_string(),
                available: self.networks.keys().cloned().collect::<Vec<_>>().join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_sepolia() {
        let config = MintConfig::default();
        assert_eq!(config.solidity, "0.8.20");

        let (name, network) = config.network(None).unwrap();
        assert_eq!(name, "sepolia");
        assert_eq!(network.private_key_env, "PRIVATE_KEY");
        assert_eq!(network.chain_id, Some(11_155_111));
        assert_eq!(network.confirmations, 1);
        config.validate().unwrap();
    }

    #[test]
    fn parses_minimal_network_with_defaults() {
        let config = MintConfig::from_toml(
            r#"
            default_network = "local"

            [networks.local]
            url = "http://127.0.0.1:8545"
            "#,
        )
        .unwrap();

        assert_eq!(config.solidity, "0.8.20");
        let (name, network) = config.network(None).unwrap();
        assert_eq!(name, "local");
        assert_eq!(network.url.as_str(), "http://127.0.0.1:8545/");
        assert_eq!(network.private_key_env, "PRIVATE_KEY");
        assert_eq!(network.chain_id, None);
        assert_eq!(network.confirmations, 1);
    }

    #[test]
    fn explicit_network_overrides_default() {
        let config = MintConfig::from_toml(
            r#"
            [networks.sepolia]
            url = "https://rpc.example"
            chain_id = 11155111

            [networks.local]
            url = "ws://127.0.0.1:8546"
            private_key_env = "LOCAL_KEY"
            confirmations = 3
            "#,
        )
        .unwrap();

        let (name, network) = config.network(Some("local")).unwrap();
        assert_eq!(name, "local");
        assert_eq!(network.private_key_env, "LOCAL_KEY");
        assert_eq!(network.confirmations, 3);

        let err = config.network(Some("mainnet")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown network `mainnet`, configured networks: local, sepolia"
        );
    }

    #[test]
    fn rejects_invalid_configs() {
        assert!(MintConfig::from_toml("solidity = \"0.8.20\"").is_err());

        // default network must exist
        assert!(
            MintConfig::from_toml(
                r#"
                [networks.local]
                url = "http://127.0.0.1:8545"
                "#,
            )
            .is_err()
        );

        assert!(
            MintConfig::from_toml(
                r#"
                [networks.sepolia]
                url = "http://127.0.0.1:8545"
                confirmations = 0
                "#,
            )
            .is_err()
        );

        assert!(
            MintConfig::from_toml(
                r#"
                [networks.sepolia]
                url = "not a url"
                "#,
            )
            .is_err()
        );
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mint.toml");
        std::fs::write(&path, toml::to_string(&MintConfig::default()).unwrap()).unwrap();

        assert_eq!(MintConfig::load(&path).unwrap(), MintConfig::default());
        assert!(MintConfig::load(dir.path().join("missing.toml")).is_err());
    }
}
