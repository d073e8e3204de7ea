use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use pulsepath_providers::RelayedResponse;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DoctorReply {
    pub reply: String,
}

pub async fn sentiment(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TextRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = payload?;
    let relayed = state.sentiment.analyze(&request.text).await?;
    Ok(relay(relayed))
}

pub async fn doctor(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<DoctorReply>> {
    let Json(request) = payload?;
    let reply = state.chat.chat(&request.text).await?;
    Ok(Json(DoctorReply { reply }))
}

fn relay(relayed: RelayedResponse) -> Response {
    let status = StatusCode::from_u16(relayed.status).unwrap_or(StatusCode::OK);
    let content_type = relayed
        .content_type
        .unwrap_or_else(|| "application/json".to_string());

    (status, [(header::CONTENT_TYPE, content_type)], relayed.body).into_response()
}
