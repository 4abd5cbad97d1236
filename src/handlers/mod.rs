pub mod state;

pub use state::{channel_state_handler, health_handler};
