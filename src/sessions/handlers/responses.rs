use crate::catalog::models::Image;
use crate::scoring::models::Guess;
use crate::sessions::models::{SessionError, SessionSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummaryResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SessionSummary>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextImageResponse {
    pub error: bool,
    /// `exhausted` once every image of the catalog was shown in this session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<Guess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetSessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionError>,
}
