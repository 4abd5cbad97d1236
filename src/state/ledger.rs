use crate::{
    config::ServiceConfig,
    types::{ChannelKey, LedgerReader, OnChainChannel, StoreError},
};
use async_trait::async_trait;
use ethers::{
    contract::abigen,
    providers::{Http, Provider},
    types::Address,
};
use std::sync::Arc;

abigen!(
    MultiPartyEscrow,
    r#"[
        function channels(uint256) external view returns (uint256, address, address, address, bytes32, uint256, uint256)
    ]"#
);

/// Reads channel terms from the MultiPartyEscrow contract.
#[derive(Clone)]
pub struct EthersLedgerReader {
    contract: MultiPartyEscrow<Provider<Http>>,
}

impl EthersLedgerReader {
    pub fn new(rpc_url: &str, escrow: Address) -> Result<Self, StoreError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| StoreError::Backend(format!("invalid ethereum rpc url: {}", e)))?;
        Ok(Self {
            contract: MultiPartyEscrow::new(escrow, Arc::new(provider)),
        })
    }

    /// Returns `None` when the config does not name a ledger endpoint.
    pub fn from_config(config: &ServiceConfig) -> Result<Option<Self>, StoreError> {
        match (&config.ethereum_rpc, config.escrow_address) {
            (Some(rpc), Some(escrow)) => Self::new(rpc, escrow).map(Some),
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl LedgerReader for EthersLedgerReader {
    async fn get(&self, key: &ChannelKey) -> Result<Option<OnChainChannel>, StoreError> {
        let (nonce, sender, signer, recipient, group_id, value, expiration) = self
            .contract
            .channels(key.id)
            .call()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        // Unknown ids read back as zeroed structs.
        if sender.is_zero() {
            return Ok(None);
        }

        Ok(Some(OnChainChannel {
            id: key.id,
            nonce,
            sender,
            signer,
            recipient,
            group_id,
            value,
            expiration,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_without_ledger() {
        let reader = EthersLedgerReader::from_config(&ServiceConfig::default()).unwrap();
        assert!(reader.is_none());
    }

    #[test]
    fn test_from_config_with_ledger() {
        let config = ServiceConfig {
            ethereum_rpc: Some("http://localhost:8545".to_string()),
            escrow_address: Some(Address::random()),
            ..Default::default()
        };

        let reader = EthersLedgerReader::from_config(&config).unwrap();
        assert!(reader.is_some());
    }

    #[test]
    fn test_rejects_malformed_rpc_url() {
        let result = EthersLedgerReader::new("not a url", Address::random());
        assert!(matches!(result, Err(StoreError::Backend(_))));
    }
}
