pub mod crypto;

pub use crypto::{bytes_to_u256, channel_id_message, payment_id, signed_hash, u256_to_bytes};
