use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;

use crate::AppState;
use crate::error::AppError;
use crate::language::LanguageTag;
use crate::pipeline::{self, EntryPoint};
use crate::ui::{form_page, result_page, ui_strings, warning_page};

use super::form::SubmissionForm;

#[derive(Debug, Deserialize)]
pub struct FormQuery {
    pub lang: Option<String>,
}

pub async fn show_form(Query(query): Query<FormQuery>) -> Html<String> {
    let interface = query
        .lang
        .as_deref()
        .and_then(|raw| LanguageTag::parse(raw).ok())
        .unwrap_or(LanguageTag::Portuguese);
    Html(form_page(interface))
}

pub async fn submit_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let form = match SubmissionForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(e) => return render_error(LanguageTag::Portuguese, e),
    };
    let interface = form.interface_language();

    let result = match form.into_submission() {
        Ok(submission) => pipeline::run(&state.llm_client, submission, EntryPoint::Ui).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => (StatusCode::OK, Html(result_page(interface, report.as_str()))),
        Err(e) => render_error(interface, e),
    }
}

fn render_error(interface: LanguageTag, error: AppError) -> (StatusCode, Html<String>) {
    let t = ui_strings(interface);
    let message = match &error {
        AppError::MissingClientName => t.fill_client.to_string(),
        AppError::MissingSources => t.provide_inputs.to_string(),
        AppError::Generation(detail) => {
            tracing::error!(error = %detail, "Generation backend error");
            format!("{} {detail}", t.generation_failed)
        }
        other => other.to_string(),
    };
    (error.status_code(), Html(warning_page(interface, &message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_use_localized_warnings() {
        let (status, Html(body)) = render_error(LanguageTag::Spanish, AppError::MissingClientName);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Por favor, introduce el nombre del cliente."));

        let (_, Html(body)) = render_error(LanguageTag::English, AppError::MissingSources);
        assert!(body.contains("You must provide at least a discovery or transcript."));
    }

    #[test]
    fn test_generation_error_keeps_backend_message() {
        let (status, Html(body)) = render_error(
            LanguageTag::Portuguese,
            AppError::Generation("OpenAI API error (500): boom".into()),
        );
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("Não foi possível gerar o relatório. OpenAI API error (500): boom"));
    }
}
