// Categories for replacements (both sides present)
//
// Evaluation order:
// 1. Orthography: joined texts are identical
// 2. Word order: same tokens, different order
// 3. One-to-one replacements (substitution rules)
// 4. Everything else (multi-token rules)

use errtag_core::label::{CAT_ORTH, CAT_WO};
use errtag_core::token::{Token, join_text};

use super::ClassifyContext;
use super::multi_token::{SpanPair, span_category};
use super::substitution::{SubstitutionPair, substitution_category};

/// Category of a replacement of `o_toks` by `c_toks`. Both must be non-empty.
pub(crate) fn two_sided_category(
    o_toks: &[Token],
    c_toks: &[Token],
    ctx: &ClassifyContext<'_>,
) -> String {
    if is_only_orth_change(o_toks, c_toks) {
        return CAT_ORTH.to_string();
    }
    if is_exact_reordering(o_toks, c_toks) {
        return CAT_WO.to_string();
    }
    if let ([orig], [cor]) = (o_toks, c_toks) {
        return substitution_category(&SubstitutionPair { orig, cor, ctx });
    }
    span_category(&SpanPair::new(o_toks, c_toks, &ctx.resources.pos_map))
}

/// The texts differ only in token boundaries.
pub(crate) fn is_only_orth_change(o_toks: &[Token], c_toks: &[Token]) -> bool {
    join_text(o_toks, "") == join_text(c_toks, "")
}

/// The same token texts (duplicates included) in a different order.
pub(crate) fn is_exact_reordering(o_toks: &[Token], c_toks: &[Token]) -> bool {
    if o_toks.len() != c_toks.len() {
        return false;
    }
    let mut o: Vec<&str> = o_toks.iter().map(|t| t.text.as_str()).collect();
    let mut c: Vec<&str> = c_toks.iter().map(|t| t.text.as_str()).collect();
    o.sort_unstable();
    c.sort_unstable();
    o == c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(*w)).collect()
    }

    #[test]
    fn orth_when_only_spacing_changes() {
        assert!(is_only_orth_change(&toks(&["कर", "के"]), &toks(&["करके"])));
        assert!(is_only_orth_change(&toks(&["a", "bc"]), &toks(&["ab", "c"])));
        assert!(!is_only_orth_change(&toks(&["a"]), &toks(&["A"])));
    }

    #[test]
    fn reordering_keeps_duplicates() {
        assert!(is_exact_reordering(&toks(&["a", "b"]), &toks(&["b", "a"])));
        assert!(is_exact_reordering(&toks(&["a", "a", "b"]), &toks(&["a", "b", "a"])));
        assert!(!is_exact_reordering(&toks(&["a", "a", "b"]), &toks(&["a", "b", "b"])));
        assert!(!is_exact_reordering(&toks(&["a", "b"]), &toks(&["a", "b", "c"])));
    }
}
