pub mod auth;
pub mod ledger;
pub mod memory;
pub mod service;

pub use auth::EcdsaAuthenticator;
pub use ledger::EthersLedgerReader;
pub use memory::{InMemoryChannelStore, InMemoryLedger, InMemoryPaymentStore};
pub use service::ChannelStateService;
