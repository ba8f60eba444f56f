// Categories for insertions and deletions
//
// With one side empty, only the tokens that are present can be inspected.

use errtag_core::label::{CAT_OTHER, CAT_VERB, CAT_VERB_TENSE};
use errtag_core::token::Token;

use super::tags::{
    ONE_SIDED_AUX_DEPS, dep_category, is_particle_verb_set, is_rare, single_value,
};
use crate::resources::PosMap;

/// Category of a span of tokens that was inserted or deleted.
pub(crate) fn one_sided_category(toks: &[Token], pos_map: &PosMap) -> String {
    let pos: Vec<&str> = toks.iter().map(|t| pos_map.tag_of(t)).collect();
    let dep: Vec<&str> = toks.iter().map(|t| t.deprel.as_str()).collect();

    // Auxiliary verbs
    if dep.iter().all(|d| ONE_SIDED_AUX_DEPS.contains(d)) {
        return CAT_VERB_TENSE.to_string();
    }
    // One shared, informative POS tag
    if let Some(tag) = single_value(&pos).filter(|t| !is_rare(t)) {
        return tag.to_string();
    }
    // One shared dependency relation that implies a category
    if let Some(cat) = single_value(&dep).and_then(dep_category) {
        return cat.to_string();
    }
    // To-infinitives and phrasal verbs
    if is_particle_verb_set(&pos) {
        return CAT_VERB.to_string();
    }
    CAT_OTHER.to_string()
}
