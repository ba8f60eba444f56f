// Suffix-stripping stemmer for Hindi
//
// The stemmer scans the word from the left and cuts at the first position
// whose remainder is a known suffix. The scan starts with the full word, so
// the earliest cut point wins.

use super::constants::STEM_SUFFIXES;

/// Lightweight suffix stripper over a fixed suffix table.
#[derive(Debug, Clone, Copy, Default)]
pub struct HindiStemmer;

impl HindiStemmer {
    pub fn new() -> Self {
        Self
    }

    /// Strip the first matching suffix, scanning cut positions left to right.
    ///
    /// Returns `None` when no suffix matches, or when the whole word is a
    /// suffix (which would leave an empty stem). A returned stem is always
    /// a non-empty proper prefix of `word`.
    pub fn stem<'a>(&self, word: &'a str) -> Option<&'a str> {
        for (i, _) in word.char_indices() {
            if STEM_SUFFIXES.contains(&&word[i..]) {
                return if i == 0 { None } else { Some(&word[..i]) };
            }
        }
        None
    }

    /// Whether `a` and `b` reduce to the same stem. Words without a stem never match.
    pub fn same_stem(&self, a: &str, b: &str) -> bool {
        match (self.stem(a), self.stem(b)) {
            (Some(sa), Some(sb)) => sa == sb,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_known_suffix() {
        let s = HindiStemmer::new();
        assert_eq!(s.stem("laDakA"), Some("laDak"));
        assert_eq!(s.stem("laDake"), Some("laDak"));
    }

    #[test]
    fn earliest_cut_point_wins() {
        // "Ane" and "e" both match; "Ane" starts further left.
        let s = HindiStemmer::new();
        assert_eq!(s.stem("jAne"), Some("j"));
        // "AwA" starts before "A" and is preferred.
        assert_eq!(s.stem("KAwA"), Some("K"));
    }

    #[test]
    fn longer_suffix_preferred_over_nested_one() {
        // "AiyAM", "iyAM" and "AM" all end the word.
        let s = HindiStemmer::new();
        assert_eq!(s.stem("baAiyAM"), Some("ba"));
    }

    #[test]
    fn no_suffix_yields_none() {
        let s = HindiStemmer::new();
        assert_eq!(s.stem("ghar"), None);
        assert_eq!(s.stem(""), None);
    }

    #[test]
    fn whole_word_suffix_yields_none() {
        let s = HindiStemmer::new();
        assert_eq!(s.stem("A"), None);
        assert_eq!(s.stem("AeM"), None);
    }

    #[test]
    fn devanagari_words_do_not_match_transliterated_table() {
        let s = HindiStemmer::new();
        assert_eq!(s.stem("लड़का"), None);
    }

    #[test]
    fn joined_table_entry() {
        let s = HindiStemmer::new();
        assert_eq!(s.stem("kogeAo"), Some("k"));
        // "oge" alone is not a suffix, but the trailing "e" is.
        assert_eq!(s.stem("koge"), Some("kog"));
    }

    #[test]
    fn same_stem_requires_both_stems() {
        let s = HindiStemmer::new();
        assert!(s.same_stem("laDakA", "laDake"));
        assert!(!s.same_stem("ghar", "ghar"));
        assert!(!s.same_stem("laDakA", "ghar"));
    }
}
