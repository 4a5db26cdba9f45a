use opentelemetry::KeyValue;

use crate::error::AppError;
use crate::language::LanguageTag;
use crate::llm::LlmClient;
use crate::telemetry::metrics::{PIPELINE_DURATION, REPORT_STRUCTURE_INCOMPLETE, REPORTS_GENERATED};

use super::invoke::ReportText;
use super::sources::{SourceBundle, resolve_transcript};
use super::{compose, extract, invoke, verify};

/// Which surface submitted the request. Both share the same pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Http,
    Ui,
}

impl EntryPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Http => "http",
            EntryPoint::Ui => "ui",
        }
    }
}

/// Raw inputs of one consolidation request, as received from either surface.
#[derive(Debug, Clone)]
pub struct Submission {
    pub client_name: String,
    pub language: LanguageTag,
    pub consultant_notes: String,
    pub transcript_text: String,
    pub discovery_workbook: Option<Vec<u8>>,
    pub transcript_file: Option<Vec<u8>>,
}

impl Submission {
    pub fn new(client_name: impl Into<String>, language: LanguageTag) -> Self {
        Self {
            client_name: client_name.into(),
            language,
            consultant_notes: String::new(),
            transcript_text: String::new(),
            discovery_workbook: None,
            transcript_file: None,
        }
    }
}

#[tracing::instrument(
    name = "pipeline consolidate",
    skip(llm_client, submission),
    fields(
        entry_point = entry_point.as_str(),
        report.language = %submission.language,
        report.has_workbook = submission.discovery_workbook.is_some(),
        report.sections_missing,
        report.duration_ms,
    )
)]
pub async fn run(
    llm_client: &LlmClient,
    submission: Submission,
    entry_point: EntryPoint,
) -> Result<ReportText, AppError> {
    let start = std::time::Instant::now();

    let client_name = submission.client_name.trim();
    if client_name.is_empty() {
        return Err(AppError::MissingClientName);
    }

    // Stage 1: Flatten the discovery workbook
    let discovery = match submission.discovery_workbook.as_deref() {
        Some(bytes) if !bytes.is_empty() => extract::extract(bytes)?,
        _ => String::new(),
    };

    let transcript = resolve_transcript(
        &submission.transcript_text,
        submission.transcript_file.as_deref(),
    )?;

    let bundle = SourceBundle::new(client_name, submission.language)
        .with_discovery(discovery)
        .with_transcript(&transcript)
        .with_notes(&submission.consultant_notes);

    if !bundle.has_primary_source() {
        return Err(AppError::MissingSources);
    }

    // Stage 2: Build the consolidation prompt
    let prompt = compose::compose(&bundle);

    // Stage 3: Single completion call
    let report = invoke::invoke(llm_client, &prompt).await?;

    // Stage 4: Advisory structure check
    let check = verify::inspect_report(report.as_str(), submission.language);
    let span = tracing::Span::current();
    let attrs = [
        KeyValue::new("report.language", submission.language.as_str()),
        KeyValue::new("entry_point", entry_point.as_str()),
    ];

    if !check.is_complete() {
        let missing = check.missing_sections();
        tracing::warn!(
            missing_sections = ?missing,
            titles_matched = check.titles_matched,
            "generated report is missing numbered sections"
        );
        span.record("report.sections_missing", missing.len());
        REPORT_STRUCTURE_INCOMPLETE.add(1, &attrs);
    } else {
        span.record("report.sections_missing", 0);
    }

    let duration = start.elapsed();
    REPORTS_GENERATED.add(1, &attrs);
    PIPELINE_DURATION.record(duration.as_secs_f64(), &attrs);
    span.record("report.duration_ms", duration.as_millis() as u64);

    tracing::info!(
        report.chars = report.as_str().len(),
        "consolidation report generated"
    );

    Ok(report)
}
