use crate::{
    state::ChannelStateService,
    types::{ChannelStateReply, ChannelStateRequest, StateError},
    utils::crypto::bytes_to_u256,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

pub async fn channel_state_handler(
    State(service): State<ChannelStateService>,
    payload: Result<Json<ChannelStateRequest>, JsonRejection>,
) -> Result<Json<ChannelStateReply>, StateError> {
    let Json(request) = payload?;
    let channel_id = bytes_to_u256(&request.channel_id).ok_or_else(|| {
        StateError::InvalidRequest("channel id does not fit in 256 bits".to_string())
    })?;

    let state = service
        .get_channel_state(channel_id, &request.signature)
        .await?;

    Ok(Json(ChannelStateReply::from(state)))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
