// Edit operations and error type labels
//
// A final label is either the bare `UNK` sentinel or `OP:CATEGORY`, where
// the operation prefix is attached by the dispatcher and the category is
// chosen by the language-specific rules.

use std::fmt;

// ---------------------------------------------------------------------------
// Category constants
// ---------------------------------------------------------------------------

pub const CAT_VERB: &str = "VERB";
pub const CAT_VERB_TENSE: &str = "VERB:TENSE";
pub const CAT_VERB_FORM: &str = "VERB:FORM";
pub const CAT_VERB_INFL: &str = "VERB:INFL";
pub const CAT_NOUN_POSS: &str = "NOUN:POSS";
pub const CAT_ADJ_FORM: &str = "ADJ:FORM";
pub const CAT_SPELL: &str = "SPELL";
pub const CAT_ORTH: &str = "ORTH";
pub const CAT_WO: &str = "WO";
pub const CAT_MORPH: &str = "MORPH";
pub const CAT_PROPN: &str = "PROPN";
pub const CAT_OTHER: &str = "OTHER";

/// Suffix appended to a POS tag for inflectional errors (`NOUN:INFL`).
pub const INFL_SUFFIX: &str = ":INFL";

/// Label of an edit that was detected but could not be classified.
pub const LABEL_UNKNOWN: &str = "UNK";

/// Label of the "no correction needed" sentinel edit.
pub const LABEL_NOOP: &str = "noop";

/// What an edit does to the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Tokens are missing from the original (`M:`).
    Missing,
    /// Tokens in the original are unnecessary (`U:`).
    Unnecessary,
    /// Tokens in the original are replaced (`R:`).
    Replacement,
}

impl Operation {
    /// Single-letter code used in labels.
    pub fn code(self) -> &'static str {
        match self {
            Operation::Missing => "M",
            Operation::Unnecessary => "U",
            Operation::Replacement => "R",
        }
    }
}

/// Error type assigned to an edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditLabel {
    /// Detected but not classifiable.
    Unknown,
    /// An operation together with an error category.
    Typed { op: Operation, category: String },
}

impl EditLabel {
    pub fn typed(op: Operation, category: impl Into<String>) -> Self {
        EditLabel::Typed {
            op,
            category: category.into(),
        }
    }

    /// The operation, if the label is typed.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            EditLabel::Unknown => None,
            EditLabel::Typed { op, .. } => Some(*op),
        }
    }

    /// The category without its operation prefix, if the label is typed.
    pub fn category(&self) -> Option<&str> {
        match self {
            EditLabel::Unknown => None,
            EditLabel::Typed { category, .. } => Some(category),
        }
    }
}

impl fmt::Display for EditLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditLabel::Unknown => f.write_str(LABEL_UNKNOWN),
            EditLabel::Typed { op, category } => write!(f, "{}:{}", op.code(), category),
        }
    }
}
