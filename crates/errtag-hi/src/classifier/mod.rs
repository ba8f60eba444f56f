// Edit type classification
//
// `engine` dispatches on which sides of an edit are present; `one_sided`
// handles insertions and deletions; `two_sided` handles replacements via the
// ordered rule tables in `substitution` and `multi_token`.

pub mod engine;
mod multi_token;
mod one_sided;
mod substitution;
mod tags;
mod two_sided;

use errtag_core::edit::Edit;
use errtag_core::label::EditLabel;

use crate::hindi::stemmer::HindiStemmer;
use crate::resources::Resources;

pub use engine::HindiClassifier;

/// Trait for edit type classifiers.
pub trait EditClassifier {
    /// Assign an error type to `edit`, store it in `edit.label` and return it.
    ///
    /// Classification is total: every edit gets exactly one label.
    fn classify(&self, edit: &mut Edit) -> EditLabel;
}

/// Thresholds used by the classification rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierOptions {
    /// An unknown word whose similarity to its correction is strictly above
    /// this is a spelling error. Default: 0.5.
    pub spell_ratio_threshold: f64,

    /// Lemmas at least this similar are treated as the same word for
    /// inflection rules. Default: 0.65.
    pub lemma_ratio_threshold: f64,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            spell_ratio_threshold: 0.5,
            lemma_ratio_threshold: 0.65,
        }
    }
}

/// Borrowed view of everything the rules consult.
pub(crate) struct ClassifyContext<'a> {
    pub resources: &'a Resources,
    pub stemmer: &'a HindiStemmer,
    pub options: &'a ClassifierOptions,
}
