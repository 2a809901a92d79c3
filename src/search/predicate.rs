//! Candidate filter construction
//!
//! The recall half of the search: one case-insensitive substring clause
//! per token and field, OR-combined into a single predicate the backing
//! store can execute in one pass. The predicate is deliberately
//! over-inclusive; the scorer restores precision afterwards.

use serde::Serialize;

use crate::catalog::records::Publication;

/// Searchable fields of a publication and its related projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Description,
    EditorFirstName,
    EditorLastName,
    EditorUsername,
    ProjectTitle,
    ProjectSummary,
}

/// Every field a token is tested against.
pub const SEARCH_FIELDS: [SearchField; 7] = [
    SearchField::Title,
    SearchField::Description,
    SearchField::EditorFirstName,
    SearchField::EditorLastName,
    SearchField::EditorUsername,
    SearchField::ProjectTitle,
    SearchField::ProjectSummary,
];

/// One case-insensitive substring test against a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldContains {
    pub field: SearchField,
    pub needle: String,
}

impl FieldContains {
    pub fn matches(&self, record: &Publication) -> bool {
        match self.field {
            SearchField::Title => contains_ci(&record.title, &self.needle),
            SearchField::Description => contains_ci(&record.description, &self.needle),
            SearchField::EditorFirstName => contains_ci(&record.editor.first_name, &self.needle),
            SearchField::EditorLastName => contains_ci(&record.editor.last_name, &self.needle),
            SearchField::EditorUsername => contains_ci(&record.editor.username, &self.needle),
            SearchField::ProjectTitle => record
                .projects
                .iter()
                .any(|p| contains_ci(&p.title, &self.needle)),
            SearchField::ProjectSummary => record
                .projects
                .iter()
                .any(|p| contains_ci(&p.summary, &self.needle)),
        }
    }
}

/// OR-combination of field tests.
///
/// An empty clause list places no restriction at all — the store returns
/// every record that passes its structured filters. This is how an empty
/// query degrades to a plain catalog browse instead of an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchPredicate {
    pub clauses: Vec<FieldContains>,
}

impl SearchPredicate {
    /// True when the predicate restricts nothing.
    pub fn is_unrestricted(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Evaluate against a single record. A record is a candidate when
    /// any token appears in any field.
    pub fn matches(&self, record: &Publication) -> bool {
        self.is_unrestricted() || self.clauses.iter().any(|clause| clause.matches(record))
    }
}

/// Build the OR-of-everything filter for a token sequence.
pub fn build_predicate(tokens: &[String]) -> SearchPredicate {
    let mut clauses = Vec::with_capacity(tokens.len() * SEARCH_FIELDS.len());
    for token in tokens {
        for field in SEARCH_FIELDS {
            clauses.push(FieldContains {
                field,
                needle: token.clone(),
            });
        }
    }
    SearchPredicate { clauses }
}

/// Case-insensitive substring test shared by the predicate and scorer.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::records::{Person, Project};

    fn sample_record() -> Publication {
        Publication {
            id: 1,
            title: "Guía de Estudiantes".to_string(),
            description: "Orientación para el primer año".to_string(),
            editor: Person {
                first_name: "Ana".to_string(),
                last_name: "Pérez".to_string(),
                username: "aperez".to_string(),
            },
            projects: vec![Project {
                title: "Orientación 2024".to_string(),
                summary: "Programa de acogida".to_string(),
            }],
            ..Publication::default()
        }
    }

    #[test]
    fn test_clause_count() {
        let tokens = vec!["casa".to_string(), "casas".to_string()];
        let predicate = build_predicate(&tokens);
        assert_eq!(predicate.clauses.len(), 2 * SEARCH_FIELDS.len());
    }

    #[test]
    fn test_empty_tokens_is_unrestricted() {
        let predicate = build_predicate(&[]);
        assert!(predicate.is_unrestricted());
        assert!(predicate.matches(&sample_record()));
        assert!(predicate.matches(&Publication::default()));
    }

    #[test]
    fn test_title_match() {
        let predicate = build_predicate(&["estudiantes".to_string()]);
        assert!(predicate.matches(&sample_record()));
    }

    #[test]
    fn test_case_insensitive_match() {
        let predicate = build_predicate(&["guía".to_string()]);
        assert!(predicate.matches(&sample_record()));
    }

    #[test]
    fn test_editor_and_project_fields() {
        assert!(build_predicate(&["aperez".to_string()]).matches(&sample_record()));
        assert!(build_predicate(&["acogida".to_string()]).matches(&sample_record()));
    }

    #[test]
    fn test_no_field_matches() {
        let predicate = build_predicate(&["volcán".to_string()]);
        assert!(!predicate.matches(&sample_record()));
    }

    #[test]
    fn test_or_across_tokens() {
        // Only one of the two tokens appears anywhere; still a candidate.
        let predicate = build_predicate(&["volcán".to_string(), "acogida".to_string()]);
        assert!(predicate.matches(&sample_record()));
    }

    #[test]
    fn test_predicate_serializes() {
        let predicate = build_predicate(&["casa".to_string()]);
        let json = serde_json::to_string(&predicate).unwrap();
        assert!(json.contains("\"field\":\"title\""));
        assert!(json.contains("\"needle\":\"casa\""));
    }
}
