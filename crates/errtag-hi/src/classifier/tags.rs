// Tag sets and dependency label tables used by the classification rules.

pub(crate) const TAG_VERB: &str = "VERB";
pub(crate) const TAG_AUX: &str = "AUX";
pub(crate) const TAG_NOUN: &str = "NOUN";
pub(crate) const TAG_PART: &str = "PART";
pub(crate) const TAG_PROPN: &str = "PROPN";

/// Coarse tags of open word classes, which can carry inflection.
pub(crate) const OPEN_CLASS_TAGS: &[&str] = &["ADJ", "ADV", "NOUN", "VERB", "ADP", "PRON"];

/// Tags that make uninformative error categories.
pub(crate) const RARE_TAGS: &[&str] = &["INTJ", "NUM", "SYM", "X"];

/// Coarse tags whose inflection errors are labelled `<TAG>:INFL`.
pub(crate) const INFLECTING_TAGS: &[&str] = &["NOUN", "ADJ", "ADP"];

/// Coarse tags used directly as a category when the dependency role is unchanged.
pub(crate) const SAME_ROLE_TAGS: &[&str] = &["VERB", "ADP", "PRON", "ADJ"];

/// Auxiliary relations for insertions and deletions.
pub(crate) const ONE_SIDED_AUX_DEPS: &[&str] = &["aux", "aux:pass"];

/// Auxiliary relations for multi-token replacements.
pub(crate) const MULTI_TOKEN_AUX_DEPS: &[&str] = &["aux", "auxpass"];

/// Dependency relations that imply a category on their own.
const DEP_CATEGORIES: &[(&str, &str)] = &[
    ("acomp", "ADJ"),
    ("amod", "ADJ"),
    ("advmod", "ADV"),
    ("det", "DET"),
    ("prep", "PREP"),
    ("prt", "PART"),
    ("punct", "PUNCT"),
];

pub(crate) fn is_open_class(tag: &str) -> bool {
    OPEN_CLASS_TAGS.contains(&tag)
}

pub(crate) fn is_rare(tag: &str) -> bool {
    RARE_TAGS.contains(&tag)
}

/// Category implied by a dependency relation, if any.
pub(crate) fn dep_category(dep: &str) -> Option<&'static str> {
    DEP_CATEGORIES
        .iter()
        .find(|(d, _)| *d == dep)
        .map(|&(_, cat)| cat)
}

/// The common value when every item is equal; `None` for empty input.
pub(crate) fn single_value<'a>(items: &[&'a str]) -> Option<&'a str> {
    let (&first, rest) = items.split_first()?;
    rest.iter().all(|&x| x == first).then_some(first)
}

/// Whether the tags are exactly the set {PART, VERB}.
pub(crate) fn is_particle_verb_set(tags: &[&str]) -> bool {
    tags.iter().all(|&t| t == TAG_PART || t == TAG_VERB)
        && tags.contains(&TAG_PART)
        && tags.contains(&TAG_VERB)
}
