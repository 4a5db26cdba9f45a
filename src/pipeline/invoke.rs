use std::fmt;

use serde::Serialize;

use super::compose::PromptDocument;
use crate::error::AppError;
use crate::llm::{ChatMessage, GenerateRequest, LlmClient};

pub const REPORT_MODEL: &str = "gpt-4-1106-preview";
pub const REPORT_TEMPERATURE: f32 = 0.3;
pub const REPORT_MAX_TOKENS: u32 = 3000;

/// Generated report, passed through exactly as the backend returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReportText(String);

impl ReportText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ReportText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn report_request(prompt: &PromptDocument) -> GenerateRequest {
    GenerateRequest {
        model: REPORT_MODEL.to_string(),
        messages: vec![ChatMessage::user(prompt.as_str())],
        temperature: REPORT_TEMPERATURE,
        max_tokens: REPORT_MAX_TOKENS,
        stage: "consolidate".to_string(),
    }
}

#[tracing::instrument(
    name = "pipeline_stage invoke",
    skip(llm_client, prompt),
    fields(
        pipeline.stage = "invoke",
        prompt.chars = prompt.as_str().len(),
        report.chars,
        report.finish_reason,
    )
)]
pub async fn invoke(llm_client: &LlmClient, prompt: &PromptDocument) -> Result<ReportText, AppError> {
    let resp = llm_client
        .generate(&report_request(prompt))
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    let span = tracing::Span::current();
    span.record("report.chars", resp.content.len());
    span.record("report.finish_reason", resp.finish_reason.as_str());

    if resp.finish_reason == "length" {
        tracing::warn!(
            max_tokens = REPORT_MAX_TOKENS,
            "report hit the output token cap and is likely truncated"
        );
    }

    Ok(ReportText(resp.content))
}
