use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::ApiKey;
use crate::pipeline::{self, EntryPoint, ReportText};

use super::form::SubmissionForm;

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: ReportText,
}

pub async fn extract_insights(
    _key: ApiKey,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<InsightsResponse>> {
    let submission = SubmissionForm::from_multipart(multipart)
        .await?
        .into_submission()?;

    let insights = pipeline::run(&state.llm_client, submission, EntryPoint::Http).await?;

    Ok(Json(InsightsResponse { insights }))
}
