pub mod channel;
pub mod error;
pub mod ports;

pub use channel::{
    Channel, ChannelKey, ChannelState, ChannelStateReply, ChannelStateRequest, OnChainChannel,
    Payment,
};
pub use error::{StateError, StoreError};
pub use ports::{Authenticator, ChannelStore, LedgerReader, PaymentStore};
