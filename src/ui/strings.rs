use crate::language::LanguageTag;

/// Interface text for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct UiStrings {
    pub page_title: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub interface_language: &'static str,
    pub report_language: &'static str,
    pub client_name: &'static str,
    pub upload_workbook: &'static str,
    pub upload_transcript: &'static str,
    pub paste_transcript: &'static str,
    pub consultant_notes: &'static str,
    pub extract_button: &'static str,
    pub fill_client: &'static str,
    pub provide_inputs: &'static str,
    pub analyzing: &'static str,
    pub analyzing_call: &'static str,
    pub consolidating: &'static str,
    pub success: &'static str,
    pub download: &'static str,
    pub generation_failed: &'static str,
    pub back: &'static str,
    pub footer: &'static str,
}

static PORTUGUESE: UiStrings = UiStrings {
    page_title: "Extrator de Insights Multilíngue",
    title: "🧠 Extrator de Insights - Português",
    subtitle: "Faça upload dos arquivos e extraia insights do discovery técnico.",
    interface_language: "🌐 Idioma da interface",
    report_language: "📘 Idioma de geração do relatório",
    client_name: "🧾 Nome do cliente",
    upload_workbook: "📤 Envie o arquivo Excel (.xlsx) do discovery técnico",
    upload_transcript: "📤 Envie arquivo .txt com transcrição (opcional)",
    paste_transcript: "📋 Ou cole aqui a transcrição da call (opcional)",
    consultant_notes: "📝 Observações do consultor (opcional)",
    extract_button: "🚀 Extrair Insights",
    fill_client: "Por favor, preencha o nome do cliente.",
    provide_inputs: "Você deve fornecer ao menos um discovery ou transcrição.",
    analyzing: "🔍 Analisando discovery...",
    analyzing_call: "🎧 Processando transcrição...",
    consolidating: "🧠 Consolidando insights...",
    success: "✅ Insights extraídos com sucesso!",
    download: "📥 Baixar Insights (.txt)",
    generation_failed: "Não foi possível gerar o relatório.",
    back: "← Voltar",
    footer: "🛠️ Desenvolvido por Solutions Team · Powered by OpenAI · MVP interno",
};

static SPANISH: UiStrings = UiStrings {
    page_title: "Extractor de Insights Multilingüe",
    title: "🧠 Extractor de Insights - Español",
    subtitle: "Sube los archivos y extrae insights del discovery técnico.",
    interface_language: "🌐 Idioma de la interfaz",
    report_language: "📘 Idioma para generar el informe",
    client_name: "🧾 Nombre del cliente",
    upload_workbook: "📤 Sube el archivo Excel (.xlsx) del discovery técnico",
    upload_transcript: "📤 Sube archivo .txt con transcripción (opcional)",
    paste_transcript: "📋 O pega aquí la transcripción de la llamada (opcional)",
    consultant_notes: "📝 Observaciones del consultor (opcional)",
    extract_button: "🚀 Extraer Insights",
    fill_client: "Por favor, introduce el nombre del cliente.",
    provide_inputs: "Debes proporcionar al menos un discovery o transcripción.",
    analyzing: "🔍 Analizando discovery...",
    analyzing_call: "🎧 Procesando transcripción...",
    consolidating: "🧠 Consolidando insights...",
    success: "✅ ¡Insights extraídos con éxito!",
    download: "📥 Descargar Insights (.txt)",
    generation_failed: "No fue posible generar el informe.",
    back: "← Volver",
    footer: "🛠️ Desarrollado por Solutions Team · Powered by OpenAI · MVP interno",
};

static ENGLISH: UiStrings = UiStrings {
    page_title: "Multilingual Insights Extractor",
    title: "🧠 Insights Extractor - English",
    subtitle: "Upload the files and extract insights from the technical discovery.",
    interface_language: "🌐 Interface language",
    report_language: "📘 Report generation language",
    client_name: "🧾 Client name",
    upload_workbook: "📤 Upload Excel (.xlsx) file from discovery",
    upload_transcript: "📤 Upload .txt transcript (optional)",
    paste_transcript: "📋 Or paste the call transcript here (optional)",
    consultant_notes: "📝 Consultant's notes (optional)",
    extract_button: "🚀 Extract Insights",
    fill_client: "Please enter the client name.",
    provide_inputs: "You must provide at least a discovery or transcript.",
    analyzing: "🔍 Analyzing discovery...",
    analyzing_call: "🎧 Processing transcript...",
    consolidating: "🧠 Consolidating insights...",
    success: "✅ Insights successfully extracted!",
    download: "📥 Download Insights (.txt)",
    generation_failed: "The report could not be generated.",
    back: "← Back",
    footer: "🛠️ Developed by Solutions Team · Powered by OpenAI · Internal MVP",
};

pub fn ui_strings(language: LanguageTag) -> &'static UiStrings {
    match language {
        LanguageTag::Portuguese => &PORTUGUESE,
        LanguageTag::Spanish => &SPANISH,
        LanguageTag::English => &ENGLISH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_language_has_its_own_record() {
        assert_eq!(ui_strings(LanguageTag::Portuguese).extract_button, "🚀 Extrair Insights");
        assert_eq!(ui_strings(LanguageTag::Spanish).extract_button, "🚀 Extraer Insights");
        assert_eq!(ui_strings(LanguageTag::English).extract_button, "🚀 Extract Insights");
    }

    #[test]
    fn test_lookup_is_stable() {
        for language in LanguageTag::ALL {
            assert!(std::ptr::eq(ui_strings(language), ui_strings(language)));
        }
    }

    #[test]
    fn test_warnings_are_localized() {
        let warnings: Vec<_> = LanguageTag::ALL
            .iter()
            .map(|l| ui_strings(*l).fill_client)
            .collect();
        assert_eq!(
            warnings,
            vec![
                "Por favor, preencha o nome do cliente.",
                "Por favor, introduce el nombre del cliente.",
                "Please enter the client name.",
            ]
        );
    }
}
