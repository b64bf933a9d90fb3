use axum::{Json, body::Bytes, extract::State};
use serde::{Deserialize, Serialize};

use crate::{dmarc::DmarcResult, net::TxtResolver};

use super::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// A missing field is treated like an empty address
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub dmarc_record: String,
    pub is_dmarc: bool,
    pub dmarc_type: String,
}

impl From<DmarcResult> for VerifyResponse {
    fn from(result: DmarcResult) -> Self {
        Self {
            dmarc_record: result.record,
            is_dmarc: result.is_dmarc,
            dmarc_type: result.policy_type,
        }
    }
}

/// `POST /verify`
///
/// The body is decoded as JSON whatever its Content-Type.
pub async fn verify<R: TxtResolver>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<Json<VerifyResponse>, ApiError> {
    let request: VerifyRequest = serde_json::from_slice(&body).map_err(|err| {
        log::warn!("Rejected request body: {err}");
        ApiError::InvalidJson
    })?;

    let result = state
        .resolver
        .verify_email(&request.email)
        .await
        .inspect_err(|err| log::warn!("Rejected request: {err}"))?;

    let domain = request
        .email
        .split_once('@')
        .map(|(_, domain)| domain.trim())
        .unwrap_or_default();
    log::info!(
        "Verified {domain}: is_dmarc={} policy={}",
        result.is_dmarc,
        result.policy_type
    );

    Ok(Json(result.into()))
}
