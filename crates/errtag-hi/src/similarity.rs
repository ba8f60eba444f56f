// Normalized string similarity
//
// similarity(a, b) = (|a| + |b| - d) / (|a| + |b|)
//
// where d is the weighted Levenshtein distance with insertion and deletion
// costing 1 and substitution costing 2. Lengths count Unicode scalar values,
// so Devanagari vowel signs and viramas are separate units.

const INSERT_COST: usize = 1;
const DELETE_COST: usize = 1;
const SUBSTITUTE_COST: usize = 2;

/// Weighted edit distance between two character slices.
pub fn weighted_levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len() * INSERT_COST;
    }
    if b.is_empty() {
        return a.len() * DELETE_COST;
    }

    let mut prev: Vec<usize> = (0..=b.len()).map(|j| j * INSERT_COST).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = (i + 1) * DELETE_COST;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = prev[j] + if ca == cb { 0 } else { SUBSTITUTE_COST };
            let delete = prev[j + 1] + DELETE_COST;
            let insert = curr[j] + INSERT_COST;
            curr[j + 1] = substitute.min(delete).min(insert);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Similarity of two strings in `[0, 1]`; 1.0 means identical.
///
/// Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let distance = weighted_levenshtein(&a, &b);
    (total - distance) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn distance_basics() {
        assert_eq!(weighted_levenshtein(&chars(""), &chars("abc")), 3);
        assert_eq!(weighted_levenshtein(&chars("abc"), &chars("")), 3);
        assert_eq!(weighted_levenshtein(&chars("abc"), &chars("abc")), 0);
        // Substitution costs the same as delete + insert.
        assert_eq!(weighted_levenshtein(&chars("a"), &chars("b")), 2);
        assert_eq!(weighted_levenshtein(&chars("kitten"), &chars("sitting")), 5);
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("receive", "receive"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("किताब", "किताब"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn transposition_scores_high() {
        // Two indels over fourteen characters.
        let s = similarity("recieve", "receive");
        assert!((s - 12.0 / 14.0).abs() < 1e-9);
        assert!(s > 0.85);
    }

    #[test]
    fn symmetric() {
        assert_eq!(similarity("lemma", "dilemma"), similarity("dilemma", "lemma"));
        assert_eq!(similarity("जाना", "जा"), similarity("जा", "जाना"));
    }

    #[test]
    fn counts_chars_not_bytes() {
        // "जा" is two scalar values, "जाना" four; two deletions.
        assert!((similarity("जाना", "जा") - 4.0 / 6.0).abs() < 1e-9);
    }
}
