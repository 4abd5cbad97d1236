//! In-memory collaborators for embedding the service and for tests.

use crate::types::{
    Channel, ChannelKey, ChannelStore, LedgerReader, OnChainChannel, Payment, PaymentStore,
    StoreError,
};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryChannelStore {
    channels: Arc<RwLock<HashMap<ChannelKey, Channel>>>,
}

impl InMemoryChannelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, channel: Channel) {
        self.channels
            .write()
            .await
            .insert(ChannelKey::from(channel.id), channel);
    }
}

#[async_trait]
impl ChannelStore for InMemoryChannelStore {
    async fn get(&self, key: &ChannelKey) -> Result<Option<Channel>, StoreError> {
        Ok(self.channels.read().await.get(key).cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryLedger {
    channels: Arc<RwLock<HashMap<ChannelKey, OnChainChannel>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, channel: OnChainChannel) {
        self.channels
            .write()
            .await
            .insert(ChannelKey::from(channel.id), channel);
    }
}

#[async_trait]
impl LedgerReader for InMemoryLedger {
    async fn get(&self, key: &ChannelKey) -> Result<Option<OnChainChannel>, StoreError> {
        Ok(self.channels.read().await.get(key).cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<String, Payment>>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `payment` under its own id.
    pub async fn insert(&self, payment: Payment) {
        self.payments
            .write()
            .await
            .insert(payment.id.clone(), payment);
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn get(&self, payment_id: &str) -> Result<Option<Payment>, StoreError> {
        Ok(self.payments.read().await.get(payment_id).cloned())
    }
}
