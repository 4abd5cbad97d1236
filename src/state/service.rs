//! Reconciles the locally tracked channel state with the escrow contract.

use crate::{
    types::{
        Authenticator, Channel, ChannelKey, ChannelState, ChannelStore, LedgerReader,
        PaymentStore, StateError,
    },
    utils::crypto::{channel_id_message, payment_id},
};
use ethers::types::U256;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Stateless read pipeline over the channel store, the ledger and the
/// payment store. Cloning shares the collaborators.
#[derive(Clone)]
pub struct ChannelStateService {
    channels: Arc<dyn ChannelStore>,
    ledger: Arc<dyn LedgerReader>,
    payments: Arc<dyn PaymentStore>,
    authenticator: Arc<dyn Authenticator>,
}

impl ChannelStateService {
    pub fn new(
        channels: impl ChannelStore + 'static,
        ledger: impl LedgerReader + 'static,
        payments: impl PaymentStore + 'static,
        authenticator: impl Authenticator + 'static,
    ) -> Self {
        Self {
            channels: Arc::new(channels),
            ledger: Arc::new(ledger),
            payments: Arc::new(payments),
            authenticator: Arc::new(authenticator),
        }
    }

    /// Compares the local nonce of `key` with the nonce on the ledger.
    pub async fn check_nonce_consistency(&self, key: &ChannelKey) -> Result<bool, StateError> {
        let storage_channel = match self.channels.get(key).await {
            Ok(Some(channel)) => channel,
            Ok(None) => {
                return Err(StateError::StorageUnavailable {
                    channel_id: key.id,
                    reason: "channel is absent".to_string(),
                })
            }
            Err(e) => {
                return Err(StateError::StorageUnavailable {
                    channel_id: key.id,
                    reason: e.to_string(),
                })
            }
        };

        let ledger_channel = match self.ledger.get(key).await {
            Ok(Some(channel)) => channel,
            Ok(None) => {
                return Err(StateError::LedgerUnavailable {
                    channel_id: key.id,
                    reason: "channel is absent".to_string(),
                })
            }
            Err(e) => {
                return Err(StateError::LedgerUnavailable {
                    channel_id: key.id,
                    reason: e.to_string(),
                })
            }
        };

        Ok(storage_channel.nonce == ledger_channel.nonce)
    }

    /// Returns the latest state of the channel to its signer.
    ///
    /// `signature` must sign the minimal big-endian bytes of `channel_id`.
    /// When the ledger cannot be read the local state is served as if the
    /// nonces matched.
    pub async fn get_channel_state(
        &self,
        channel_id: U256,
        signature: &[u8],
    ) -> Result<ChannelState, StateError> {
        debug!(channel_id = %channel_id, "get_channel_state called");

        let sender = self
            .authenticator
            .recover_signer(&channel_id_message(channel_id), signature)
            .await
            .map_err(StateError::AuthenticationFailed)?;

        let key = ChannelKey::from(channel_id);
        let channel = self
            .channels
            .get(&key)
            .await
            .map_err(StateError::ChannelError)?
            .ok_or(StateError::ChannelNotFound(channel_id))?;

        if channel.signer != sender {
            return Err(StateError::Unauthorized(channel_id));
        }

        match self.check_nonce_consistency(&key).await {
            Ok(true) => Ok(current_state(channel)),
            Ok(false) => self.dual_state(channel).await,
            Err(e @ StateError::LedgerUnavailable { .. }) => {
                info!(
                    channel_id = %channel_id,
                    error = %e,
                    "ledger nonce unavailable, serving local state"
                );
                Ok(current_state(channel))
            }
            Err(e) => Err(e),
        }
    }

    async fn dual_state(&self, channel: Channel) -> Result<ChannelState, StateError> {
        let old_nonce = channel.nonce.checked_sub(U256::one());
        let (signature, old_nonce) = match (channel.signature, old_nonce) {
            (Some(signature), Some(old_nonce)) => (signature, old_nonce),
            _ => {
                error!(
                    channel_id = %channel.id,
                    nonce = %channel.nonce,
                    "local channel nonce differs from the blockchain one, but no signed state to recover from"
                );
                return Err(StateError::InconsistentState(channel.id));
            }
        };

        let payment_id = payment_id(channel.id, old_nonce);
        let payment = match self.payments.get(&payment_id).await {
            Ok(Some(payment)) => payment,
            Ok(None) => {
                error!(
                    channel_id = %channel.id,
                    payment_id = %payment_id,
                    "old payment is not found in storage, nevertheless local channel nonce is not equal to the blockchain one"
                );
                return Err(StateError::InconsistentState(channel.id));
            }
            Err(e) => {
                error!(
                    channel_id = %channel.id,
                    payment_id = %payment_id,
                    error = %e,
                    "unable to extract old payment from storage"
                );
                return Err(StateError::PaymentLookupFailed {
                    payment_id,
                    source: e,
                });
            }
        };

        Ok(ChannelState::DualState {
            nonce: channel.nonce,
            signed_amount: channel.authorized_amount,
            signature,
            old_signed_amount: payment.amount,
            old_signature: payment.signature,
        })
    }
}

fn current_state(channel: Channel) -> ChannelState {
    match channel.signature {
        Some(signature) => ChannelState::Current {
            nonce: channel.nonce,
            signed_amount: channel.authorized_amount,
            signature,
        },
        None => ChannelState::NonceOnly {
            nonce: channel.nonce,
        },
    }
}
