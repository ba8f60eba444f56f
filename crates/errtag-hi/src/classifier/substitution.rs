// Rules for one-token-to-one-token replacements
//
// The rules form an ordered table. Each rule either decides the category or
// passes; the first decision wins. Spelling rules come before morphology,
// and a word missing from the word list is settled by the spelling rules
// without ever reaching the morphology rules.

use errtag_core::features::VERB_FEATURE_KEYS;
use errtag_core::label::{
    CAT_MORPH, CAT_OTHER, CAT_PROPN, CAT_SPELL, CAT_VERB_FORM, CAT_VERB_INFL, INFL_SUFFIX,
};
use errtag_core::token::Token;

use super::ClassifyContext;
use super::tags::{INFLECTING_TAGS, SAME_ROLE_TAGS, TAG_AUX, TAG_PROPN, TAG_VERB, is_open_class};
use crate::hindi::constants::PRONUNCIATION_VARIANTS;
use crate::similarity::similarity;

/// An original token and its replacement, with the classification context.
pub(crate) struct SubstitutionPair<'a> {
    pub orig: &'a Token,
    pub cor: &'a Token,
    pub ctx: &'a ClassifyContext<'a>,
}

/// A rule returns `Some(category)` to decide, `None` to pass.
pub(crate) type SubstitutionRule = fn(&SubstitutionPair<'_>) -> Option<String>;

/// All single-token rules in evaluation order.
pub(crate) const SUBSTITUTION_RULES: &[(&str, SubstitutionRule)] = &[
    ("pronunciation_variant", pronunciation_variant),
    ("proper_noun", proper_noun),
    ("unknown_word", unknown_word),
    ("inflection", inflection),
    ("derivation", derivation),
    ("auxiliary", auxiliary),
    ("same_role", same_role),
];

/// Category of a one-token replacement.
pub(crate) fn substitution_category(pair: &SubstitutionPair<'_>) -> String {
    SUBSTITUTION_RULES
        .iter()
        .find_map(|(_, rule)| rule(pair))
        .unwrap_or_else(|| CAT_OTHER.to_string())
}

// ---------------------------------------------------------------------------
// Spelling
// ---------------------------------------------------------------------------

/// Whether two words differ only in an ending that is pronounced alike.
///
/// The first pair (in either direction) whose endings match both words
/// decides. The remaining stems are compared after trimming the characters
/// of each ending: trailing ones on the original, both ends on the
/// correction.
pub(crate) fn is_pronunciation_variant(orig: &str, cor: &str) -> bool {
    for &(a, b) in PRONUNCIATION_VARIANTS {
        for (o_end, c_end) in [(a, b), (b, a)] {
            if orig.ends_with(o_end) && cor.ends_with(c_end) {
                let o_stem = orig.trim_end_matches(|ch: char| o_end.contains(ch));
                let c_stem = cor.trim_matches(|ch: char| c_end.contains(ch));
                return o_stem == c_stem;
            }
        }
    }
    false
}

fn pronunciation_variant(pair: &SubstitutionPair<'_>) -> Option<String> {
    is_pronunciation_variant(&pair.orig.text, &pair.cor.text).then(|| CAT_SPELL.to_string())
}

fn proper_noun(pair: &SubstitutionPair<'_>) -> Option<String> {
    (pair.orig.upos == TAG_PROPN || pair.cor.upos == TAG_PROPN).then(|| CAT_PROPN.to_string())
}

fn unknown_word(pair: &SubstitutionPair<'_>) -> Option<String> {
    if pair.ctx.resources.word_list.contains(&pair.orig.text) {
        return None;
    }
    let ratio = similarity(&pair.orig.text, &pair.cor.text);
    if ratio > pair.ctx.options.spell_ratio_threshold {
        Some(CAT_SPELL.to_string())
    } else {
        // Too different to be a typo, e.g. a wrong word choice.
        Some(CAT_OTHER.to_string())
    }
}

// ---------------------------------------------------------------------------
// Morphology
// ---------------------------------------------------------------------------

fn inflection(pair: &SubstitutionPair<'_>) -> Option<String> {
    let (o, c) = (pair.orig, pair.cor);
    let lemma_ratio = similarity(&o.lemma, &c.lemma);
    if lemma_ratio < pair.ctx.options.lemma_ratio_threshold
        || !is_open_class(&o.upos)
        || !is_open_class(&c.upos)
    {
        return None;
    }
    if o.upos != c.upos {
        return Some(CAT_MORPH.to_string());
    }
    if INFLECTING_TAGS.contains(&o.upos.as_str()) {
        return Some(format!("{}{}", o.upos, INFL_SUFFIX));
    }
    if (o.upos == TAG_VERB || o.upos == TAG_AUX) && o.xpos == c.xpos {
        let same_inflection = VERB_FEATURE_KEYS
            .iter()
            .all(|key| o.feats.agrees_on(&c.feats, key));
        let category = if same_inflection { CAT_VERB_INFL } else { CAT_VERB_FORM };
        return Some(category.to_string());
    }
    None
}

fn derivation(pair: &SubstitutionPair<'_>) -> Option<String> {
    let (o, c) = (pair.orig, pair.cor);
    (is_open_class(&o.upos)
        && is_open_class(&c.upos)
        && pair.ctx.stemmer.same_stem(&o.text, &c.text))
    .then(|| CAT_MORPH.to_string())
}

// ---------------------------------------------------------------------------
// General
// ---------------------------------------------------------------------------

fn auxiliary(pair: &SubstitutionPair<'_>) -> Option<String> {
    (pair.orig.deprel.starts_with("aux") && pair.cor.deprel.starts_with("aux"))
        .then(|| CAT_VERB_FORM.to_string())
}

/// Only the original tag is consulted; the corrected tag may differ.
fn same_role(pair: &SubstitutionPair<'_>) -> Option<String> {
    let (o, c) = (pair.orig, pair.cor);
    (SAME_ROLE_TAGS.contains(&o.upos.as_str()) && o.deprel == c.deprel).then(|| o.upos.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassifierOptions;
    use crate::hindi::stemmer::HindiStemmer;
    use crate::resources::{PosMap, Resources, WordList};
    use std::path::Path;

    fn resources() -> Resources {
        let word_list: WordList = [
            "गया", "गई", "जाता", "लड़का", "लड़के", "वह", "उसने", "सुंदर", "और", "laDakA",
        ]
        .into_iter()
        .collect();
        let pos_map = PosMap::from_text("NOUN\tNOUN\nVERB\tVERB\n", Path::new("test-map")).unwrap();
        Resources::new(word_list, pos_map)
    }

    fn run(rule: SubstitutionRule, orig: &Token, cor: &Token) -> Option<String> {
        let resources = resources();
        let stemmer = HindiStemmer::new();
        let options = ClassifierOptions::default();
        let ctx = ClassifyContext {
            resources: &resources,
            stemmer: &stemmer,
            options: &options,
        };
        rule(&SubstitutionPair { orig, cor, ctx: &ctx })
    }

    fn category(orig: &Token, cor: &Token) -> String {
        let resources = resources();
        let stemmer = HindiStemmer::new();
        let options = ClassifierOptions::default();
        let ctx = ClassifyContext {
            resources: &resources,
            stemmer: &stemmer,
            options: &options,
        };
        substitution_category(&SubstitutionPair { orig, cor, ctx: &ctx })
    }

    fn word(text: &str, lemma: &str, upos: &str) -> Token {
        Token::new(text).with_lemma(lemma).with_pos(upos, "")
    }

    #[test]
    fn rule_table_order() {
        let names: Vec<&str> = SUBSTITUTION_RULES.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "pronunciation_variant",
                "proper_noun",
                "unknown_word",
                "inflection",
                "derivation",
                "auxiliary",
                "same_role"
            ]
        );
    }

    #[test]
    fn pronunciation_variants_both_directions() {
        assert!(is_pronunciation_variant("गये", "गए"));
        assert!(is_pronunciation_variant("गए", "गये"));
        assert!(is_pronunciation_variant("नयी", "नई"));
        assert!(is_pronunciation_variant("हुआ", "हुवा"));
        assert!(!is_pronunciation_variant("गये", "आए"));
        assert!(!is_pronunciation_variant("घर", "घरों"));
    }

    #[test]
    fn first_matching_pair_decides() {
        // Both end in pair endings but the stems differ.
        assert!(!is_pronunciation_variant("खाये", "पीए"));
    }

    #[test]
    fn pronunciation_variant_is_spell() {
        let o = word("गये", "जा", "VERB");
        let c = word("गए", "जा", "VERB");
        assert_eq!(category(&o, &c), "SPELL");
    }

    #[test]
    fn proper_noun_on_either_side() {
        let o = word("राम", "राम", "PROPN");
        let c = word("श्याम", "श्याम", "PROPN");
        assert_eq!(run(proper_noun, &o, &c).as_deref(), Some("PROPN"));
        let o = word("राम", "राम", "NOUN");
        assert_eq!(run(proper_noun, &o, &c).as_deref(), Some("PROPN"));
    }

    #[test]
    fn unknown_similar_word_is_spell() {
        let o = word("लडका", "लडका", "NOUN");
        let c = word("लड़का", "लड़का", "NOUN");
        assert_eq!(category(&o, &c), "SPELL");
    }

    #[test]
    fn unknown_dissimilar_word_is_other() {
        let o = word("xyz", "xyz", "VERB");
        let c = word("गया", "जा", "VERB");
        assert_eq!(category(&o, &c), "OTHER");
    }

    #[test]
    fn spelling_threshold_is_strict() {
        // similarity("ab", "ax") == 0.5 exactly
        let o = word("ab", "ab", "NOUN");
        let c = word("ax", "ax", "NOUN");
        assert_eq!(similarity("ab", "ax"), 0.5);
        assert_eq!(category(&o, &c), "OTHER");
    }

    #[test]
    fn empty_text_is_an_unknown_word() {
        // Blank word list lines never add the empty word.
        let o = word("", "", "NOUN");
        let c = word("लड़का", "लड़का", "NOUN");
        assert_eq!(run(unknown_word, &o, &c).as_deref(), Some("OTHER"));
    }

    #[test]
    fn known_word_passes_unknown_word_rule() {
        let o = word("गया", "जा", "VERB");
        let c = word("जाता", "जा", "VERB");
        assert_eq!(run(unknown_word, &o, &c), None);
    }

    #[test]
    fn noun_inflection() {
        let o = word("लड़का", "लड़का", "NOUN");
        let c = word("लड़के", "लड़का", "NOUN");
        assert_eq!(category(&o, &c), "NOUN:INFL");
    }

    #[test]
    fn lemma_threshold_is_inclusive() {
        // 13 shared characters out of 20 on each side: 26/40 == 0.65
        let o = word("लड़का", "abcdefghijklmnopqrst", "NOUN");
        let c = word("लड़के", "abcdefghijklmUVWXYZQ", "NOUN");
        assert_eq!(similarity(&o.lemma, &c.lemma), 0.65);
        assert_eq!(category(&o, &c), "NOUN:INFL");

        // One more differing character drops to 0.6
        let c = word("लड़के", "abcdefghijklTUVWXYZQ", "NOUN");
        assert_eq!(run(inflection, &o, &c), None);
        assert_eq!(category(&o, &c), "OTHER");
    }

    #[test]
    fn different_open_tags_are_morph() {
        let o = word("सुंदर", "सुंदर", "ADJ");
        let c = word("सुंदरता", "सुंदरता", "NOUN");
        assert_eq!(category(&o, &c), "MORPH");
    }

    #[test]
    fn verb_feature_mismatch_is_form() {
        let o = word("गया", "जा", "VERB").with_feats("Tense=Past|Aspect=Perf");
        let c = word("जाता", "जा", "VERB").with_feats("Tense=Pres|Aspect=Imp");
        assert_eq!(category(&o, &c), "VERB:FORM");
    }

    #[test]
    fn verb_feature_match_is_infl() {
        let o = word("गया", "जा", "VERB").with_feats("Tense=Past|Gender=Masc");
        let c = word("गई", "जा", "VERB").with_feats("Tense=Past|Gender=Fem");
        assert_eq!(category(&o, &c), "VERB:INFL");
    }

    #[test]
    fn verb_with_different_fine_tags_passes_inflection() {
        let o = Token::new("गया").with_lemma("जा").with_pos("VERB", "VM");
        let c = Token::new("जाता").with_lemma("जा").with_pos("VERB", "VAUX");
        assert_eq!(run(inflection, &o, &c), None);
    }

    #[test]
    fn low_lemma_similarity_passes_inflection() {
        let o = word("वह", "वह", "PRON");
        let c = word("उसने", "उस", "PRON");
        assert_eq!(run(inflection, &o, &c), None);
    }

    #[test]
    fn derivation_needs_stems_on_both_sides() {
        let o = word("laDakA", "x", "NOUN");
        let c = word("laDake", "y", "NOUN");
        assert_eq!(run(derivation, &o, &c).as_deref(), Some("MORPH"));
        let c = word("ghar", "y", "NOUN");
        assert_eq!(run(derivation, &o, &c), None);
    }

    #[test]
    fn auxiliaries_with_different_lemmas() {
        let o = word("गया", "जा", "AUX").with_deprel("aux");
        let c = word("जाता", "रह", "AUX").with_deprel("aux:pass");
        assert_eq!(category(&o, &c), "VERB:FORM");
    }

    #[test]
    fn same_role_uses_original_tag() {
        let o = word("वह", "वह", "PRON").with_deprel("nsubj");
        let c = word("उसने", "उस", "NOUN").with_deprel("nsubj");
        assert_eq!(category(&o, &c), "PRON");
    }

    #[test]
    fn nothing_matches_is_other() {
        let o = word("और", "और", "CCONJ").with_deprel("cc");
        let c = word("वह", "वह", "PRON").with_deprel("nsubj");
        assert_eq!(category(&o, &c), "OTHER");
    }
}
