use crate::utils::crypto::{payment_id, u256_to_bytes};
use ethers::types::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Addresses a channel in both the local store and the escrow contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelKey {
    pub id: U256,
}

impl From<U256> for ChannelKey {
    fn from(id: U256) -> Self {
        Self { id }
    }
}

impl fmt::Display for ChannelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Latest off-chain signed state known to the local store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: U256,
    pub signer: Address,
    pub nonce: U256,
    pub authorized_amount: U256,
    /// `None` until the first payment on this nonce has been signed.
    pub signature: Option<Bytes>,
}

/// Channel terms as recorded by the escrow contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnChainChannel {
    pub id: U256,
    pub nonce: U256,
    pub sender: Address,
    pub signer: Address,
    pub recipient: Address,
    pub group_id: [u8; 32],
    pub value: U256,
    pub expiration: U256,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub channel_id: U256,
    pub amount: U256,
    pub signature: Bytes,
}

impl Payment {
    /// Builds a payment keyed the way the reconciler looks it up.
    pub fn at_nonce(channel_id: U256, nonce: U256, amount: U256, signature: Bytes) -> Self {
        Self {
            id: payment_id(channel_id, nonce),
            channel_id,
            amount,
            signature,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChannelStateRequest {
    /// Big-endian unsigned channel id.
    pub channel_id: Bytes,
    /// Signature over the channel id bytes.
    pub signature: Bytes,
}

/// Result of reconciling the local channel against the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelState {
    /// Nothing has been signed on the channel yet.
    NonceOnly { nonce: U256 },
    Current {
        nonce: U256,
        signed_amount: U256,
        signature: Bytes,
    },
    /// A claim is in flight: the client gets both the current state and the
    /// state signed at the previous nonce.
    DualState {
        nonce: U256,
        signed_amount: U256,
        signature: Bytes,
        old_signed_amount: U256,
        old_signature: Bytes,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStateReply {
    pub current_nonce: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_signed_amount: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_signature: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_nonce_signed_amount: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_nonce_signature: Option<Bytes>,
}

fn int_bytes(value: U256) -> Bytes {
    Bytes::from(u256_to_bytes(value))
}

impl From<ChannelState> for ChannelStateReply {
    fn from(state: ChannelState) -> Self {
        match state {
            ChannelState::NonceOnly { nonce } => ChannelStateReply {
                current_nonce: int_bytes(nonce),
                ..Default::default()
            },
            ChannelState::Current {
                nonce,
                signed_amount,
                signature,
            } => ChannelStateReply {
                current_nonce: int_bytes(nonce),
                current_signed_amount: Some(int_bytes(signed_amount)),
                current_signature: Some(signature),
                ..Default::default()
            },
            ChannelState::DualState {
                nonce,
                signed_amount,
                signature,
                old_signed_amount,
                old_signature,
            } => ChannelStateReply {
                current_nonce: int_bytes(nonce),
                current_signed_amount: Some(int_bytes(signed_amount)),
                current_signature: Some(signature),
                old_nonce_signed_amount: Some(int_bytes(old_signed_amount)),
                old_nonce_signature: Some(old_signature),
            },
        }
    }
}
