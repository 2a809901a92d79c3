//! Spanish plural/singular heuristics
//!
//! Widens recall by generating plausible number variants for each query
//! word. The rules are heuristic: spurious variants are fine because the
//! scorer filters non-matching records out later, but a missed variant
//! costs recall.

/// Plain vowels checked for the "-s" pluralization rule.
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Expand a normalized word into itself plus its number variants.
///
/// The input is expected to be lowercase and trimmed. The word itself is
/// always the first entry; variants are de-duplicated in generation order
/// and anything of length <= 1 is dropped.
///
/// Artifacts of the rules are intentional: `"tesis"` yields `"tesi"`,
/// `"papel"` yields `"papeles"`.
pub fn expand(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    if len < 2 {
        return vec![word.to_string()];
    }

    let stem = |n: usize| chars[..len - n].iter().collect::<String>();

    let mut variants = vec![word.to_string()];

    if word.ends_with('s') && len > 3 {
        if word.ends_with("es") && len > 4 {
            push_variant(&mut variants, stem(2));
            push_variant(&mut variants, stem(1));
        } else {
            push_variant(&mut variants, stem(1));
        }
    } else if VOWELS.contains(&chars[len - 1]) && len > 2 {
        push_variant(&mut variants, format!("{word}s"));
        // Words in -ción/-sión pluralize to -ones
        if word.ends_with("ción") || word.ends_with("sión") {
            push_variant(&mut variants, format!("{}ones", stem(1)));
        }
    } else if !word.ends_with('s') && len > 3 {
        push_variant(&mut variants, format!("{word}es"));
        if word.ends_with('z') {
            push_variant(&mut variants, format!("{}ces", stem(1)));
        }
    }

    if variants.is_empty() {
        return vec![word.to_string()];
    }
    variants
}

fn push_variant(variants: &mut Vec<String>, candidate: String) {
    if candidate.chars().count() > 1 && !variants.contains(&candidate) {
        variants.push(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_always_first() {
        for word in ["casa", "tesis", "papel", "luz", "no"] {
            assert_eq!(expand(word)[0], word);
        }
    }

    #[test]
    fn test_es_plural_strips_both_suffixes() {
        let variants = expand("estudiantes");
        assert!(variants.contains(&"estudiante".to_string()));
        assert!(variants.contains(&"estudiant".to_string()));
    }

    #[test]
    fn test_single_s_strip() {
        // Heuristic artifact: "tesis" is not a plural, but the rule
        // still strips the final s.
        assert_eq!(expand("tesis"), vec!["tesis", "tesi"]);
    }

    #[test]
    fn test_short_s_words_untouched() {
        assert_eq!(expand("mes"), vec!["mes"]);
        assert_eq!(expand("dos"), vec!["dos"]);
    }

    #[test]
    fn test_vowel_final_adds_s() {
        assert_eq!(expand("casa"), vec!["casa", "casas"]);
        assert_eq!(expand("guía"), vec!["guía", "guías"]);
    }

    #[test]
    fn test_consonant_final_adds_es() {
        let variants = expand("papel");
        assert!(variants.contains(&"papeles".to_string()));
    }

    #[test]
    fn test_z_final_adds_ces() {
        let variants = expand("lápiz");
        assert!(variants.contains(&"lápizes".to_string()));
        assert!(variants.contains(&"lápices".to_string()));
    }

    #[test]
    fn test_short_consonant_words_untouched() {
        assert_eq!(expand("luz"), vec!["luz"]);
        assert_eq!(expand("sol"), vec!["sol"]);
    }

    #[test]
    fn test_accented_cion_takes_consonant_rule() {
        // Final char is n, so the -es rule fires, not the vowel rule.
        assert_eq!(expand("canción"), vec!["canción", "canciónes"]);
    }

    #[test]
    fn test_four_char_es_word_strips_single_s() {
        // Ends in "es" but is too short for the double strip.
        assert_eq!(expand("tres"), vec!["tres", "tre"]);
    }

    #[test]
    fn test_single_char_passthrough() {
        assert_eq!(expand("a"), vec!["a"]);
    }

    #[test]
    fn test_no_duplicates() {
        for word in ["estudiantes", "análisis", "voces", "taza"] {
            let variants = expand(word);
            let unique: std::collections::HashSet<&String> = variants.iter().collect();
            assert_eq!(variants.len(), unique.len(), "duplicates for {word}");
        }
    }
}
