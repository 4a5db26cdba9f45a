use axum::extract::Multipart;

use crate::error::AppError;
use crate::language::LanguageTag;
use crate::pipeline::Submission;

/// Multipart fields shared by the HTTP endpoint and the HTML form. The
/// Portuguese field names of the first API version are still accepted.
#[derive(Debug, Default)]
pub struct SubmissionForm {
    pub client_name: String,
    pub language: Option<String>,
    pub notes: String,
    pub transcript_text: String,
    pub discovery_file: Option<Vec<u8>>,
    pub transcript_file: Option<Vec<u8>>,
    pub ui_lang: Option<String>,
}

impl SubmissionForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = SubmissionForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                "client_name" | "nome_cliente" => {
                    form.client_name = field.text().await.map_err(multipart_error)?
                }
                "language" | "idioma" => {
                    form.language = Some(field.text().await.map_err(multipart_error)?)
                }
                "notes" | "observacoes" => {
                    form.notes = field.text().await.map_err(multipart_error)?
                }
                "transcript_text" | "texto_transcricao" => {
                    form.transcript_text = field.text().await.map_err(multipart_error)?
                }
                "discovery_file" | "arquivo_discovery" => {
                    form.discovery_file = non_empty(field.bytes().await.map_err(multipart_error)?)
                }
                "transcript_file" | "arquivo_transcricao" => {
                    form.transcript_file = non_empty(field.bytes().await.map_err(multipart_error)?)
                }
                "ui_lang" => form.ui_lang = Some(field.text().await.map_err(multipart_error)?),
                other => tracing::debug!(field = other, "ignoring unknown form field"),
            }
        }

        Ok(form)
    }

    /// Interface language of the HTML form. Falls back to Portuguese.
    pub fn interface_language(&self) -> LanguageTag {
        self.ui_lang
            .as_deref()
            .and_then(|raw| LanguageTag::parse(raw).ok())
            .unwrap_or(LanguageTag::Portuguese)
    }

    pub fn into_submission(self) -> Result<Submission, AppError> {
        let raw_language = self
            .language
            .ok_or_else(|| AppError::InvalidInput("language is required".into()))?;
        let language = LanguageTag::parse(&raw_language)?;

        Ok(Submission {
            client_name: self.client_name,
            language,
            consultant_notes: self.notes,
            transcript_text: self.transcript_text,
            discovery_workbook: self.discovery_file,
            transcript_file: self.transcript_file,
        })
    }
}

// Browsers send an empty part for a file input left blank.
fn non_empty(bytes: axum::body::Bytes) -> Option<Vec<u8>> {
    if bytes.is_empty() {
        None
    } else {
        Some(bytes.to_vec())
    }
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::InvalidInput(format!("malformed multipart body: {}", e.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_submission_parses_language() {
        let form = SubmissionForm {
            client_name: "Acme".into(),
            language: Some("ESPAÑOL".into()),
            notes: "n".into(),
            transcript_text: "t".into(),
            ..Default::default()
        };

        let submission = form.into_submission().unwrap();

        assert_eq!(submission.language, LanguageTag::Spanish);
        assert_eq!(submission.client_name, "Acme");
        assert_eq!(submission.consultant_notes, "n");
        assert_eq!(submission.transcript_text, "t");
        assert!(submission.discovery_workbook.is_none());
    }

    #[test]
    fn test_into_submission_rejects_unknown_language() {
        let form = SubmissionForm {
            language: Some("french".into()),
            ..Default::default()
        };
        assert!(matches!(
            form.into_submission(),
            Err(AppError::UnsupportedLanguage(lang)) if lang == "french"
        ));
    }

    #[test]
    fn test_into_submission_requires_language() {
        let form = SubmissionForm::default();
        assert!(matches!(form.into_submission(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_interface_language_defaults_to_portuguese() {
        assert_eq!(
            SubmissionForm::default().interface_language(),
            LanguageTag::Portuguese
        );
        let form = SubmissionForm {
            ui_lang: Some("en".into()),
            ..Default::default()
        };
        assert_eq!(form.interface_language(), LanguageTag::English);
        let form = SubmissionForm {
            ui_lang: Some("klingon".into()),
            ..Default::default()
        };
        assert_eq!(form.interface_language(), LanguageTag::Portuguese);
    }

    #[test]
    fn test_non_empty_drops_blank_uploads() {
        assert_eq!(non_empty(axum::body::Bytes::new()), None);
        assert_eq!(
            non_empty(axum::body::Bytes::from_static(b"x")),
            Some(b"x".to_vec())
        );
    }
}
