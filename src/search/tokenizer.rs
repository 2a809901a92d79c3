//! Query tokenization and normalization
//!
//! Turns raw user input into the flat token sequence the rest of the
//! pipeline works with: whitespace split, NFC + lowercase normalization,
//! trailing punctuation stripped, short fragments dropped, and every
//! surviving word widened with its morphological variants. The result is
//! de-duplicated in first-seen order.

use unicode_normalization::UnicodeNormalization;

use super::morphology::expand;

/// Minimum usable token length, in characters.
pub const MIN_TOKEN_LEN: usize = 2;

/// Normalize a single query fragment.
///
/// NFC composition, lowercase, trim, then strip trailing
/// non-alphanumeric characters (trailing punctuation like `"tesis,"`).
/// Returns `None` when the remainder is shorter than [`MIN_TOKEN_LEN`].
pub fn normalize_word(fragment: &str) -> Option<String> {
    let composed: String = fragment.nfc().collect();
    let lowered = composed.trim().to_lowercase();
    let word = lowered.trim_end_matches(|c: char| !c.is_alphanumeric());
    if word.chars().count() < MIN_TOKEN_LEN {
        return None;
    }
    Some(word.to_string())
}

/// Tokenize a raw query into normalized tokens plus their variants.
///
/// Empty or whitespace-only input yields an empty vector; this function
/// never fails. Output order is first-seen and deterministic.
pub fn tokenize(query: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for fragment in query.split_whitespace() {
        let Some(word) = normalize_word(fragment) else {
            continue;
        };
        for variant in expand(&word) {
            if !tokens.contains(&variant) {
                tokens.push(variant);
            }
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t \n ").is_empty());
    }

    #[test]
    fn test_short_fragments_dropped() {
        assert!(tokenize("a y o").is_empty());
        // "la" survives the length filter but is too short to expand.
        assert_eq!(tokenize("a la"), vec!["la"]);
    }

    #[test]
    fn test_lowercase_normalization() {
        let tokens = tokenize("EDUCACIÓN");
        assert_eq!(tokens[0], "educación");
    }

    #[test]
    fn test_trailing_punctuation_stripped() {
        assert_eq!(tokenize("tesis,"), tokenize("tesis"));
        assert_eq!(tokenize("¿ambiental?"), vec!["¿ambiental", "¿ambientales"]);
    }

    #[test]
    fn test_variants_flattened() {
        let tokens = tokenize("Estudiantes");
        assert_eq!(tokens[0], "estudiantes");
        assert!(tokens.contains(&"estudiante".to_string()));
        assert!(tokens.contains(&"estudiant".to_string()));
    }

    #[test]
    fn test_heuristic_singular_artifact() {
        assert!(tokenize("tesis").contains(&"tesi".to_string()));
    }

    #[test]
    fn test_global_dedup_first_seen() {
        // "casa" and "casas" expand to the same variant set; the second
        // word contributes nothing new.
        let tokens = tokenize("casa casas");
        assert_eq!(tokens, vec!["casa", "casas"]);
    }

    #[test]
    fn test_deterministic() {
        let query = "Educación Ambiental en Escuelas";
        assert_eq!(tokenize(query), tokenize(query));
    }

    #[test]
    fn test_decomposed_input_matches_composed() {
        // "educacio\u{301}n" (combining acute) vs precomposed "educación"
        assert_eq!(tokenize("educacio\u{301}n"), tokenize("educación"));
    }
}
