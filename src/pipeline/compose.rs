use std::fmt;

use super::sources::SourceBundle;
use super::templates::{ReportTemplate, Section, template_for};

/// Delimits each embedded source text.
pub const SOURCE_FENCE: &str = "\"\"\"";

/// The instruction sent to the generation backend. Always the output of
/// [`compose`] for some bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDocument(String);

impl PromptDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders the consolidation prompt for `bundle` in its target language.
///
/// Source texts are embedded byte-for-byte between [`SOURCE_FENCE`] markers
/// in the order discovery, transcript, notes, followed by the eleven numbered
/// report sections. Pure: equal bundles give equal prompts.
#[tracing::instrument(
    name = "pipeline_stage compose",
    skip(bundle),
    fields(
        pipeline.stage = "compose",
        report.language = %bundle.target_language(),
        prompt.chars,
    )
)]
pub fn compose(bundle: &SourceBundle) -> PromptDocument {
    let template = template_for(bundle.target_language());

    let mut prompt = String::with_capacity(
        4096 + bundle.discovery_text().len()
            + bundle.transcript_text().len()
            + bundle.consultant_notes().len(),
    );

    prompt.push_str(template.language_lock);
    prompt.push_str("\n\n");
    prompt.push_str(&format!(
        "{}: **{}**\n\n",
        template.client_heading,
        bundle.client_name()
    ));
    prompt.push_str(template.sources_intro);
    prompt.push_str("\n\n");

    push_source(&mut prompt, template.discovery_heading, bundle.discovery_text());
    push_source(&mut prompt, template.transcript_heading, bundle.transcript_text());
    push_source(&mut prompt, template.notes_heading, bundle.consultant_notes());

    prompt.push_str(template.merge_instruction);

    for (index, section) in template.sections.iter().enumerate() {
        prompt.push_str("\n\n");
        push_section(&mut prompt, template, index + 1, section);
    }

    tracing::Span::current().record("prompt.chars", prompt.len());

    PromptDocument(prompt)
}

fn push_source(prompt: &mut String, heading: &str, text: &str) {
    prompt.push_str(&format!("{heading}:\n{SOURCE_FENCE}{text}{SOURCE_FENCE}\n\n"));
}

fn push_section(prompt: &mut String, template: &ReportTemplate, number: usize, section: &Section) {
    prompt.push_str(&format!(
        "{number}. {} **{}**",
        section.kind.icon(),
        section.title
    ));
    if section.bulleted {
        prompt.push(' ');
        prompt.push_str(template.bullets_hint);
    }

    for directive in section.directives {
        prompt.push_str(&format!("\n   - {directive}"));
    }
    if section.kind.keeps_details() {
        prompt.push_str(&format!("\n   - {}", template.keep_details));
    }
    if section.kind.requires_fallback() {
        prompt.push_str(&format!(
            "\n   - {} “{}”",
            template.fallback_instruction, template.missing_info
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageTag;
    use crate::pipeline::templates::SectionKind;

    fn bundle(language: LanguageTag) -> SourceBundle {
        SourceBundle::new("Acme Distribuidora", language)
            .with_discovery("[Discovery] Pergunta: Quantos CDs existem?\nResposta: 3 centros")
            .with_transcript("Cliente: usamos SAP e Mercanet.")
            .with_notes("Prioridade é o canal WhatsApp.")
    }

    fn numbered_headings(prompt: &str) -> Vec<usize> {
        prompt
            .lines()
            .filter_map(|line| {
                let (number, rest) = line.split_once(". ")?;
                if rest.contains("**") {
                    number.parse().ok()
                } else {
                    None
                }
            })
            .collect()
    }

    #[test]
    fn test_compose_is_deterministic() {
        for language in LanguageTag::ALL {
            let b = bundle(language);
            assert_eq!(compose(&b), compose(&b));
            assert_eq!(compose(&b), compose(&b.clone()));
        }
    }

    #[test]
    fn test_language_lock_opens_prompt() {
        let cases = vec![
            (LanguageTag::Portuguese, "Responda apenas em **português**"),
            (LanguageTag::Spanish, "Responde solo en **español**"),
            (LanguageTag::English, "Respond only in **English**"),
        ];
        for (language, lock) in cases {
            let prompt = compose(&bundle(language));
            let first_line = prompt.as_str().lines().next().unwrap();
            assert!(first_line.contains(lock), "{language}: {first_line}");
        }
    }

    #[test]
    fn test_client_name_is_embedded() {
        let prompt = compose(&bundle(LanguageTag::English));
        assert!(prompt.as_str().contains("Project with client: **Acme Distribuidora**"));
    }

    #[test]
    fn test_sources_are_fenced_verbatim_in_order() {
        let tricky = "quotes \" ' `{braces}` <b>html</b> \\n and {} placeholders\n  indented";
        let b = SourceBundle::new("Acme", LanguageTag::English)
            .with_discovery(tricky)
            .with_transcript("TRANSCRIPT-MARKER")
            .with_notes("NOTES-MARKER");
        let prompt = compose(&b).to_string();

        let discovery_at = prompt
            .find(&format!("{SOURCE_FENCE}{tricky}{SOURCE_FENCE}"))
            .expect("discovery embedded verbatim");
        let transcript_at = prompt
            .find(&format!("{SOURCE_FENCE}TRANSCRIPT-MARKER{SOURCE_FENCE}"))
            .expect("transcript embedded");
        let notes_at = prompt
            .find(&format!("{SOURCE_FENCE}NOTES-MARKER{SOURCE_FENCE}"))
            .expect("notes embedded");

        assert!(discovery_at < transcript_at);
        assert!(transcript_at < notes_at);
    }

    #[test]
    fn test_eleven_sections_in_every_language() {
        for language in LanguageTag::ALL {
            let prompt = compose(&bundle(language));
            assert_eq!(
                numbered_headings(prompt.as_str()),
                (1..=11).collect::<Vec<_>>(),
                "{language}"
            );
        }
    }

    #[test]
    fn test_section_titles_follow_template_order() {
        for language in LanguageTag::ALL {
            let prompt = compose(&bundle(language)).to_string();
            let template = template_for(language);
            let mut last = 0;
            for (i, section) in template.sections.iter().enumerate() {
                let heading = format!("{}. {} **{}**", i + 1, section.kind.icon(), section.title);
                let at = prompt.find(&heading).unwrap_or_else(|| {
                    panic!("{language}: missing heading {heading:?}");
                });
                assert!(at > last, "{language}: {heading:?} out of order");
                last = at;
            }
        }
    }

    #[test]
    fn test_keep_details_directive_on_context_and_integrations() {
        for language in LanguageTag::ALL {
            let prompt = compose(&bundle(language)).to_string();
            let template = template_for(language);
            assert_eq!(
                prompt.matches(template.keep_details).count(),
                2,
                "{language}"
            );

            let context = section_body(&prompt, 1);
            let integrations = section_body(&prompt, 5);
            assert!(context.contains(template.keep_details), "{language}");
            assert!(integrations.contains(template.keep_details), "{language}");
        }
    }

    #[test]
    fn test_fallback_literal_only_in_operational_section() {
        for language in LanguageTag::ALL {
            let prompt = compose(&bundle(language)).to_string();
            let template = template_for(language);
            let literal = format!("“{}”", template.missing_info);

            assert_eq!(prompt.matches(&literal).count(), 1, "{language}");
            assert!(section_body(&prompt, 11).contains(&literal), "{language}");
        }
    }

    #[test]
    fn test_empty_sources_keep_full_scaffold() {
        let b = SourceBundle::new("Acme", LanguageTag::English);
        let prompt = compose(&b).to_string();

        assert_eq!(prompt.matches(&format!("{SOURCE_FENCE}{SOURCE_FENCE}")).count(), 3);
        assert_eq!(numbered_headings(&prompt).len(), SectionKind::ORDER.len());
        assert!(prompt.contains("Information not provided in the sources."));
    }

    #[test]
    fn test_prompt_ends_with_last_section() {
        let prompt = compose(&bundle(LanguageTag::Portuguese)).to_string();
        assert!(prompt.ends_with("“Informação não fornecida nas fontes.”"));
    }

    fn section_body(prompt: &str, number: usize) -> &str {
        let start = prompt
            .lines()
            .find(|line| line.starts_with(&format!("{number}. ")))
            .and_then(|line| prompt.find(line))
            .expect("section heading");
        let rest = &prompt[start..];
        match rest[1..].find(&format!("\n\n{}. ", number + 1)) {
            Some(end) => &rest[..end + 1],
            None => rest,
        }
    }
}
