use ethers::{types::U256, utils::keccak256};

pub trait U256Ext {
    fn to_be_bytes_vec(&self) -> Vec<u8>;
}

impl U256Ext for U256 {
    fn to_be_bytes_vec(&self) -> Vec<u8> {
        let mut bytes = [0u8; 32];
        self.to_big_endian(&mut bytes);
        bytes.to_vec()
    }
}

/// Minimal big-endian encoding. Zero encodes as an empty slice.
pub fn u256_to_bytes(value: U256) -> Vec<u8> {
    let bytes = value.to_be_bytes_vec();
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes[first..].to_vec()
}

/// Decodes a big-endian unsigned integer, ignoring leading zero bytes.
/// Returns `None` when the value does not fit in 256 bits.
pub fn bytes_to_u256(bytes: &[u8]) -> Option<U256> {
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first..];
    if significant.len() > 32 {
        return None;
    }
    Some(U256::from_big_endian(significant))
}

/// The bytes a client signs to prove it controls a channel.
pub fn channel_id_message(channel_id: U256) -> Vec<u8> {
    u256_to_bytes(channel_id)
}

/// Digest that is personal-signed (EIP-191) by the client.
pub fn signed_hash(message: &[u8]) -> [u8; 32] {
    keccak256(message)
}

/// Storage key of the payment signed for `channel_id` at `nonce`.
///
/// The payment-signing path writes payments under the same key, so the
/// format must not change.
pub fn payment_id(channel_id: U256, nonce: U256) -> String {
    format!("{}/{}", channel_id, nonce)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u256_minimal_encoding() {
        assert_eq!(u256_to_bytes(U256::zero()), Vec::<u8>::new());
        assert_eq!(u256_to_bytes(U256::from(7)), vec![7]);
        assert_eq!(u256_to_bytes(U256::from(0x0102)), vec![1, 2]);
        assert_eq!(u256_to_bytes(U256::MAX), vec![0xff; 32]);
    }

    #[test]
    fn test_bytes_to_u256() {
        assert_eq!(bytes_to_u256(&[]), Some(U256::zero()));
        assert_eq!(bytes_to_u256(&[0, 0, 1, 2]), Some(U256::from(0x0102)));

        let mut padded = vec![0u8; 8];
        padded.extend_from_slice(&[0xff; 32]);
        assert_eq!(bytes_to_u256(&padded), Some(U256::MAX));

        assert_eq!(bytes_to_u256(&[1u8; 33]), None);
    }

    #[test]
    fn test_payment_id_is_decimal() {
        assert_eq!(payment_id(U256::from(7), U256::from(2)), "7/2");
        assert_eq!(
            payment_id(U256::from(1_000_000u64), U256::zero()),
            "1000000/0"
        );
    }

    #[test]
    fn test_channel_id_message_matches_wire_encoding() {
        let id = U256::from(42);
        assert_eq!(channel_id_message(id), vec![42]);
        assert_eq!(signed_hash(&channel_id_message(id)), keccak256([42u8]));
    }
}
