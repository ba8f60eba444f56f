// HindiClassifier: assigns error types to aligned edits.
//
// The classifier owns shared, read-only resources and holds no per-edit
// state, so one instance can label edits from many threads at once. The only
// shared mutable state is the optional observer (typically a tally).

use std::sync::Arc;

use errtag_core::edit::Edit;
use errtag_core::label::{EditLabel, Operation};
use errtag_core::token::{Token, join_text};

use super::one_sided::one_sided_category;
use super::two_sided::two_sided_category;
use super::{ClassifierOptions, ClassifyContext, EditClassifier};
use crate::hindi::stemmer::HindiStemmer;
use crate::resources::Resources;
use crate::tally::{EditObserver, LabelTally};

/// Error type classifier for Hindi.
pub struct HindiClassifier {
    resources: Arc<Resources>,
    stemmer: HindiStemmer,
    options: ClassifierOptions,
    observer: Option<Arc<dyn EditObserver>>,
}

impl HindiClassifier {
    /// Create a classifier with default options and no observer.
    pub fn new(resources: Arc<Resources>) -> Self {
        Self {
            resources,
            stemmer: HindiStemmer::new(),
            options: ClassifierOptions::default(),
            observer: None,
        }
    }

    /// Replace the classification thresholds.
    pub fn with_options(mut self, options: ClassifierOptions) -> Self {
        self.options = options;
        self
    }

    /// Report every classified edit to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn EditObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ClassifierOptions) {
        self.options = options;
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Compute the label for a pair of spans without touching an edit.
    pub fn label_for(&self, o_toks: &[Token], c_toks: &[Token]) -> EditLabel {
        let pos_map = &self.resources.pos_map;
        match (o_toks.is_empty(), c_toks.is_empty()) {
            // Nothing to nothing: detected but not corrected
            (true, true) => EditLabel::Unknown,
            (true, false) => {
                EditLabel::typed(Operation::Missing, one_sided_category(c_toks, pos_map))
            }
            (false, true) => {
                EditLabel::typed(Operation::Unnecessary, one_sided_category(o_toks, pos_map))
            }
            (false, false) => {
                // Same to same: detected but not corrected
                if join_text(o_toks, " ") == join_text(c_toks, " ") {
                    return EditLabel::Unknown;
                }
                let ctx = ClassifyContext {
                    resources: &self.resources,
                    stemmer: &self.stemmer,
                    options: &self.options,
                };
                EditLabel::typed(
                    Operation::Replacement,
                    two_sided_category(o_toks, c_toks, &ctx),
                )
            }
        }
    }

    /// Classify a batch of independent edits and tally their labels.
    ///
    /// Edits are classified in parallel, each worker keeping its own tally
    /// which is merged at the end. Labels do not depend on the order.
    #[cfg(feature = "parallel")]
    pub fn classify_batch(&self, edits: &mut [Edit]) -> LabelTally {
        use rayon::prelude::*;

        edits
            .par_iter_mut()
            .fold(LabelTally::new, |mut tally, edit| {
                tally.add_label(&self.classify(edit));
                tally
            })
            .reduce(LabelTally::new, |mut a, b| {
                a.merge(b);
                a
            })
    }

    /// Classify a batch of independent edits and tally their labels.
    #[cfg(not(feature = "parallel"))]
    pub fn classify_batch(&self, edits: &mut [Edit]) -> LabelTally {
        let mut tally = LabelTally::new();
        for edit in edits.iter_mut() {
            tally.add_label(&self.classify(edit));
        }
        tally
    }
}

impl EditClassifier for HindiClassifier {
    fn classify(&self, edit: &mut Edit) -> EditLabel {
        let label = self.label_for(&edit.o_toks, &edit.c_toks);
        tracing::debug!(
            orig = %edit.o_str(),
            cor = %edit.c_str(),
            label = %label,
            "classified edit"
        );
        if let Some(observer) = &self.observer {
            observer.observe(edit, &label);
        }
        edit.label = Some(label.clone());
        label
    }
}
