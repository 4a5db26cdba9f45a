use crate::error::AppError;
use crate::language::LanguageTag;

/// The three source texts plus the report parameters for one request.
/// Built once through the `with_*` methods and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBundle {
    discovery_text: String,
    transcript_text: String,
    consultant_notes: String,
    client_name: String,
    target_language: LanguageTag,
}

impl SourceBundle {
    pub fn new(client_name: impl Into<String>, target_language: LanguageTag) -> Self {
        Self {
            discovery_text: String::new(),
            transcript_text: String::new(),
            consultant_notes: String::new(),
            client_name: client_name.into(),
            target_language,
        }
    }

    pub fn with_discovery(mut self, text: impl Into<String>) -> Self {
        self.discovery_text = text.into();
        self
    }

    pub fn with_transcript(mut self, text: &str) -> Self {
        self.transcript_text = text.trim().to_string();
        self
    }

    pub fn with_notes(mut self, text: &str) -> Self {
        self.consultant_notes = text.trim().to_string();
        self
    }

    pub fn discovery_text(&self) -> &str {
        &self.discovery_text
    }

    pub fn transcript_text(&self) -> &str {
        &self.transcript_text
    }

    pub fn consultant_notes(&self) -> &str {
        &self.consultant_notes
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn target_language(&self) -> LanguageTag {
        self.target_language
    }

    /// True when discovery or transcript content is present. Notes alone do
    /// not count as a source.
    pub fn has_primary_source(&self) -> bool {
        !self.discovery_text.trim().is_empty() || !self.transcript_text.is_empty()
    }
}

/// Picks the transcript for a submission. An uploaded file with content wins
/// over pasted text; a file that is not UTF-8 is rejected.
pub fn resolve_transcript(pasted: &str, uploaded: Option<&[u8]>) -> Result<String, AppError> {
    match uploaded {
        Some(bytes) if !bytes.is_empty() => {
            let text = std::str::from_utf8(bytes).map_err(|e| {
                AppError::InvalidInput(format!("transcript file is not valid UTF-8: {e}"))
            })?;
            // Notepad-style BOM
            Ok(text.trim_start_matches('\u{feff}').to_string())
        }
        _ => Ok(pasted.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_trims_transcript_and_notes_only() {
        let bundle = SourceBundle::new("Acme", LanguageTag::English)
            .with_discovery("  [Discovery] Pergunta: a\nResposta: b  ")
            .with_transcript("\n  call text \n")
            .with_notes("  notes  ");

        assert_eq!(
            bundle.discovery_text(),
            "  [Discovery] Pergunta: a\nResposta: b  "
        );
        assert_eq!(bundle.transcript_text(), "call text");
        assert_eq!(bundle.consultant_notes(), "notes");
        assert_eq!(bundle.client_name(), "Acme");
        assert_eq!(bundle.target_language(), LanguageTag::English);
    }

    #[test]
    fn test_new_bundle_defaults_to_empty_sources() {
        let bundle = SourceBundle::new("Acme", LanguageTag::Spanish);
        assert_eq!(bundle.discovery_text(), "");
        assert_eq!(bundle.transcript_text(), "");
        assert_eq!(bundle.consultant_notes(), "");
        assert!(!bundle.has_primary_source());
    }

    #[test]
    fn test_notes_alone_are_not_a_primary_source() {
        let bundle = SourceBundle::new("Acme", LanguageTag::Portuguese).with_notes("só notas");
        assert!(!bundle.has_primary_source());

        let bundle = bundle.with_transcript("cliente falou");
        assert!(bundle.has_primary_source());
    }

    #[test]
    fn test_uploaded_transcript_wins_over_pasted() {
        let text = resolve_transcript("pasted", Some("from file".as_bytes())).unwrap();
        assert_eq!(text, "from file");
    }

    #[test]
    fn test_empty_upload_falls_back_to_pasted() {
        assert_eq!(resolve_transcript("pasted", Some(b"")).unwrap(), "pasted");
        assert_eq!(resolve_transcript("pasted", None).unwrap(), "pasted");
    }

    #[test]
    fn test_upload_strips_byte_order_mark() {
        let bytes = "\u{feff}olá".as_bytes();
        assert_eq!(resolve_transcript("", Some(bytes)).unwrap(), "olá");
    }

    #[test]
    fn test_non_utf8_upload_is_invalid_input() {
        let err = resolve_transcript("pasted", Some(&[0xff, 0xfe, 0x00, 0x41])).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
