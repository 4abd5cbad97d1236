//! Collaborators the reconciler reads from.
//!
//! The local channel store and the ledger are separate traits so each can
//! fail independently.

use super::{Channel, ChannelKey, OnChainChannel, Payment, StoreError};
use async_trait::async_trait;
use ethers::types::{Address, SignatureError};

#[async_trait]
pub trait ChannelStore: Send + Sync {
    async fn get(&self, key: &ChannelKey) -> Result<Option<Channel>, StoreError>;
}

#[async_trait]
pub trait LedgerReader: Send + Sync {
    async fn get(&self, key: &ChannelKey) -> Result<Option<OnChainChannel>, StoreError>;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn get(&self, payment_id: &str) -> Result<Option<Payment>, StoreError>;
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Recovers the address that produced `signature` over `message`.
    async fn recover_signer(
        &self,
        message: &[u8],
        signature: &[u8],
    ) -> Result<Address, SignatureError>;
}
