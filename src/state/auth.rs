use crate::{types::Authenticator, utils::crypto::signed_hash};
use async_trait::async_trait;
use ethers::types::{Address, RecoveryMessage, Signature, SignatureError};

/// Recovers Ethereum addresses from 65-byte `r || s || v` signatures.
///
/// Clients personal-sign (EIP-191) the keccak256 digest of the message.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaAuthenticator;

#[async_trait]
impl Authenticator for EcdsaAuthenticator {
    async fn recover_signer(
        &self,
        message: &[u8],
        signature: &[u8],
    ) -> Result<Address, SignatureError> {
        let signature = Signature::try_from(signature)?;
        let recoverable = RecoveryMessage::Data(signed_hash(message).to_vec());
        signature.recover(recoverable)
    }
}
