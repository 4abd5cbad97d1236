use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ethers::types::U256;
use serde::Serialize;
use thiserror::Error;

/// Failure reported by a channel, payment or ledger backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum StateError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("incorrect signature")]
    AuthenticationFailed(#[source] ethers::types::SignatureError),
    #[error("only channel signer can get latest channel state, channelId: {0}")]
    Unauthorized(U256),
    #[error("channel is not found, channelId: {0}")]
    ChannelNotFound(U256),
    #[error("channel error: {0}")]
    ChannelError(#[source] StoreError),
    #[error("unable to read channel details from storage, channelId: {channel_id}: {reason}")]
    StorageUnavailable { channel_id: U256, reason: String },
    #[error("unable to read channel details from blockchain, channelId: {channel_id}: {reason}")]
    LedgerUnavailable { channel_id: U256, reason: String },
    #[error("unable to read old payment {payment_id} from storage")]
    PaymentLookupFailed {
        payment_id: String,
        #[source]
        source: StoreError,
    },
    #[error("channel has different nonce in local storage and blockchain, channelId: {0}")]
    InconsistentState(U256),
    #[error("request timed out")]
    Timeout,
    #[error("internal error: {0}")]
    Internal(String),
}

impl StateError {
    /// Stable discriminant reported to clients next to the message.
    pub fn kind(&self) -> &'static str {
        match self {
            StateError::InvalidRequest(_) => "invalid_request",
            StateError::AuthenticationFailed(_) => "authentication_failed",
            StateError::Unauthorized(_) => "unauthorized",
            StateError::ChannelNotFound(_) => "channel_not_found",
            StateError::ChannelError(_) => "channel_error",
            StateError::StorageUnavailable { .. } => "storage_unavailable",
            StateError::LedgerUnavailable { .. } => "ledger_unavailable",
            StateError::PaymentLookupFailed { .. } => "payment_lookup_failed",
            StateError::InconsistentState(_) => "inconsistent_state",
            StateError::Timeout => "timeout",
            StateError::Internal(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            StateError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            StateError::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            StateError::Unauthorized(_) => StatusCode::FORBIDDEN,
            StateError::ChannelNotFound(_) => StatusCode::NOT_FOUND,
            StateError::ChannelError(_)
            | StateError::StorageUnavailable { .. }
            | StateError::PaymentLookupFailed { .. }
            | StateError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StateError::LedgerUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            StateError::InconsistentState(_) => StatusCode::CONFLICT,
            StateError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

impl From<JsonRejection> for StateError {
    fn from(rejection: JsonRejection) -> Self {
        StateError::InvalidRequest(rejection.body_text())
    }
}

impl From<StateError> for StatusCode {
    fn from(error: StateError) -> Self {
        error.status()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

impl IntoResponse for StateError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            kind: self.kind(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
