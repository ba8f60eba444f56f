//! Hindi grammatical error type classifier.
//!
//! Given an aligned edit between an original and a corrected span of
//! annotated tokens, assigns an ERRANT-style label such as `R:SPELL`,
//! `M:DET` or `U:VERB:TENSE`. Rules consult two static resources: a Hindi
//! word list and a map from fine-grained to coarse POS tags.
//!
//! # Architecture
//!
//! - [`classifier`] -- Operation dispatch and the ordered category rule tables
//! - [`resources`] -- Word list and POS map loading
//! - [`hindi`] -- Suffix-stripping stemmer and Hindi word tables
//! - [`similarity`] -- Weighted edit distance and normalised similarity ratio
//! - [`tally`] -- Per-label counts and the classifier observer hook

pub mod classifier;
pub mod hindi;
pub mod resources;
pub mod similarity;
pub mod tally;

pub use classifier::{ClassifierOptions, EditClassifier, HindiClassifier};
pub use resources::Resources;
pub use tally::{EditObserver, LabelTally, SharedTally};
