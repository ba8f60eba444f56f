// Rules for replacements spanning more than one token on either side
//
// Like the single-token rules these form an ordered table; the first rule
// that decides wins and `OTHER` is the fallback.

use errtag_core::label::{
    CAT_ADJ_FORM, CAT_NOUN_POSS, CAT_OTHER, CAT_VERB, CAT_VERB_FORM, CAT_VERB_TENSE,
};
use errtag_core::token::Token;

use super::tags::{
    MULTI_TOKEN_AUX_DEPS, TAG_NOUN, TAG_PART, TAG_VERB, dep_category, is_particle_verb_set,
    is_rare, single_value,
};
use crate::hindi::constants::DEGREE_MARKERS;
use crate::resources::PosMap;

/// Both sides of a multi-token replacement with their mapped tags and relations.
pub(crate) struct SpanPair<'a> {
    pub o_toks: &'a [Token],
    pub c_toks: &'a [Token],
    pub o_pos: Vec<&'a str>,
    pub c_pos: Vec<&'a str>,
    pub o_dep: Vec<&'a str>,
    pub c_dep: Vec<&'a str>,
}

impl<'a> SpanPair<'a> {
    /// Both sides must be non-empty.
    pub(crate) fn new(o_toks: &'a [Token], c_toks: &'a [Token], pos_map: &'a PosMap) -> Self {
        Self {
            o_toks,
            c_toks,
            o_pos: o_toks.iter().map(|t| pos_map.tag_of(t)).collect(),
            c_pos: c_toks.iter().map(|t| pos_map.tag_of(t)).collect(),
            o_dep: o_toks.iter().map(|t| t.deprel.as_str()).collect(),
            c_dep: c_toks.iter().map(|t| t.deprel.as_str()).collect(),
        }
    }

    fn all_pos(&self) -> Vec<&'a str> {
        self.o_pos.iter().chain(&self.c_pos).copied().collect()
    }

    fn all_dep(&self) -> Vec<&'a str> {
        self.o_dep.iter().chain(&self.c_dep).copied().collect()
    }

    fn same_final_lemma(&self) -> bool {
        match (self.o_toks.last(), self.c_toks.last()) {
            (Some(o), Some(c)) => o.lemma == c.lemma,
            _ => false,
        }
    }

    fn same_first_lemma(&self) -> bool {
        match (self.o_toks.first(), self.c_toks.first()) {
            (Some(o), Some(c)) => o.lemma == c.lemma,
            _ => false,
        }
    }
}

pub(crate) type SpanRule = fn(&SpanPair<'_>) -> Option<String>;

/// All multi-token rules in evaluation order.
pub(crate) const SPAN_RULES: &[(&str, SpanRule)] = &[
    ("auxiliaries", auxiliaries),
    ("same_pos", same_pos),
    ("same_dep", same_dep),
    ("particle_verb", particle_verb),
    ("possessive", possessive),
    ("degree", degree),
];

/// Category of a multi-token replacement.
pub(crate) fn span_category(pair: &SpanPair<'_>) -> String {
    SPAN_RULES
        .iter()
        .find_map(|(_, rule)| rule(pair))
        .unwrap_or_else(|| CAT_OTHER.to_string())
}

fn auxiliaries(pair: &SpanPair<'_>) -> Option<String> {
    pair.all_dep()
        .iter()
        .all(|d| MULTI_TOKEN_AUX_DEPS.contains(d))
        .then(|| CAT_VERB_TENSE.to_string())
}

fn same_pos(pair: &SpanPair<'_>) -> Option<String> {
    let tag = single_value(&pair.all_pos())?;
    // Final verbs with the same lemma are tense changes
    if tag == TAG_VERB && pair.same_final_lemma() {
        return Some(CAT_VERB_TENSE.to_string());
    }
    (!is_rare(tag)).then(|| tag.to_string())
}

fn same_dep(pair: &SpanPair<'_>) -> Option<String> {
    single_value(&pair.all_dep())
        .and_then(dep_category)
        .map(str::to_string)
}

fn particle_verb(pair: &SpanPair<'_>) -> Option<String> {
    if !is_particle_verb_set(&pair.all_pos()) {
        return None;
    }
    let category = if pair.same_final_lemma() { CAT_VERB_FORM } else { CAT_VERB };
    Some(category.to_string())
}

fn possessive(pair: &SpanPair<'_>) -> Option<String> {
    let noun_part = [TAG_NOUN, TAG_PART];
    ((pair.o_pos == noun_part || pair.c_pos == noun_part) && pair.same_first_lemma())
        .then(|| CAT_NOUN_POSS.to_string())
}

fn degree(pair: &SpanPair<'_>) -> Option<String> {
    let marked = |toks: &[Token]| {
        toks.first()
            .is_some_and(|t| DEGREE_MARKERS.contains(&t.text.as_str()))
    };
    ((marked(pair.o_toks) || marked(pair.c_toks))
        && pair.same_final_lemma()
        && pair.o_toks.len() <= 2
        && pair.c_toks.len() <= 2)
        .then(|| CAT_ADJ_FORM.to_string())
}
