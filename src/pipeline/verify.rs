//! Advisory check of a generated report against the eleven-section layout.
//! The report itself is never modified or rejected.

use std::collections::BTreeSet;

use crate::language::LanguageTag;

use super::templates::{SectionKind, template_for};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureCheck {
    pub sections_found: BTreeSet<usize>,
    pub titles_matched: usize,
}

impl StructureCheck {
    pub fn missing_sections(&self) -> Vec<usize> {
        (1..=SectionKind::ORDER.len())
            .filter(|n| !self.sections_found.contains(n))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_sections().is_empty()
    }
}

pub fn inspect_report(report: &str, language: LanguageTag) -> StructureCheck {
    let sections_found = report.lines().filter_map(heading_number).collect();

    let lowered = report.to_lowercase();
    let titles_matched = template_for(language)
        .sections
        .iter()
        .filter(|section| lowered.contains(&section.title.to_lowercase()))
        .count();

    StructureCheck {
        sections_found,
        titles_matched,
    }
}

/// Number of a line like `3. ⚠️ **Risks**`, `## 3. Risks` or `**3. Risks**`.
fn heading_number(line: &str) -> Option<usize> {
    let line = line.trim_start().trim_start_matches('#').trim_start();
    let line = line.trim_start_matches('*');
    let digits_end = line.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 || !matches!(&line[digits_end..digits_end + 1], "." | ")") {
        return None;
    }
    let number: usize = line[..digits_end].parse().ok()?;
    (1..=SectionKind::ORDER.len())
        .contains(&number)
        .then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_number_variants() {
        assert_eq!(heading_number("1. 📌 **Project context**"), Some(1));
        assert_eq!(heading_number("## 10. General observations"), Some(10));
        assert_eq!(heading_number("**11. Operational data**"), Some(11));
        assert_eq!(heading_number("   4) Use cases"), Some(4));
        assert_eq!(heading_number("12. Extra"), None);
        assert_eq!(heading_number("- 3 centros"), None);
        assert_eq!(heading_number("2024 was a good year"), None);
        assert_eq!(heading_number("3"), None);
    }

    #[test]
    fn test_complete_report() {
        let report = (1..=11)
            .map(|n| format!("{n}. Section {n}\n- content"))
            .collect::<Vec<_>>()
            .join("\n\n");

        let check = inspect_report(&report, LanguageTag::English);

        assert!(check.is_complete());
        assert!(check.missing_sections().is_empty());
    }

    #[test]
    fn test_missing_sections_are_reported() {
        let report = "1. 📌 **Project context**\ntext\n\n2. 🌟 **Main objectives of the project**\n\n\
                      11. 📊 **Operational data and commercial rules identified**\n\
                      - Information not provided in the sources.";

        let check = inspect_report(report, LanguageTag::English);

        assert!(!check.is_complete());
        assert_eq!(check.missing_sections(), vec![3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(check.titles_matched, 3);
    }

    #[test]
    fn test_titles_matched_per_language() {
        let report = "1. **Contexto do projeto**\n5. **Integrações mencionadas ou necessárias**";
        assert_eq!(
            inspect_report(report, LanguageTag::Portuguese).titles_matched,
            2
        );
        assert_eq!(inspect_report(report, LanguageTag::Spanish).titles_matched, 0);
    }

    #[test]
    fn test_empty_report() {
        let check = inspect_report("", LanguageTag::Spanish);
        assert_eq!(check.missing_sections().len(), 11);
        assert_eq!(check.titles_matched, 0);
    }
}
