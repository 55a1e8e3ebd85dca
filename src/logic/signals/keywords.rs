//! Tokenization & Sensitive-Keyword Weights
//!
//! The tokenizer is deliberately dumb: word-bounded runs of at least
//! four word characters, lowercased, deduplicated per document in
//! first-appearance order. Anything smarter belongs to a different
//! system.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Minimum token length — shorter words are stop-word noise.
pub const MIN_TOKEN_LEN: usize = 4;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    // \w is Unicode-aware, so accented terms tokenize whole.
    Regex::new(&format!(r"\b\w{{{MIN_TOKEN_LEN},}}\b")).expect("token pattern is valid")
});

/// Extract the deduplicated token list of a lowercased document,
/// preserving first-appearance order so downstream tie-breaks stay
/// deterministic.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for m in TOKEN_RE.find_iter(text) {
        let token = m.as_str();
        if seen.insert(token.to_string()) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Fixed weight table for high-risk terms in the operating language.
/// Unlisted tokens score no bonus.
pub fn sensitive_weight(token: &str) -> i64 {
    match token {
        "m23" => 5,
        "rwanda" => 5,
        "enlèvement" => 5,
        "attaque" => 5,
        "explosion" => 5,
        "goma" => 4,
        "bunia" => 4,
        "armes" => 4,
        "milice" => 4,
        "ituri" => 3,
        "nord-kivu" => 3,
        "sud-kivu" => 3,
        "manifestation" => 3,
        "barrage" => 3,
        _ => 0,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_drops_short_words_and_dedups() {
        let tokens = tokenize("le barrage de la rivière et le barrage routier");
        assert_eq!(tokens, vec!["barrage", "rivière", "routier"]);
    }

    #[test]
    fn tokenize_keeps_accented_terms_whole() {
        let tokens = tokenize("un enlèvement signalé");
        assert!(tokens.contains(&"enlèvement".to_string()));
        assert_eq!(sensitive_weight("enlèvement"), 5);
    }

    #[test]
    fn tokenize_splits_on_punctuation() {
        let tokens = tokenize("attaque: goma, bunia.");
        assert_eq!(tokens, vec!["attaque", "goma", "bunia"]);
    }

    #[test]
    fn neutral_tokens_carry_no_weight() {
        assert_eq!(sensitive_weight("carburant"), 0);
        assert_eq!(sensitive_weight("attaque"), 5);
    }
}
