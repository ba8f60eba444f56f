// Aligned edit between an original and a corrected token span
//
// Edits are produced by the alignment stage, passed once through a
// classifier which sets the label, then rendered or discarded.

use crate::error::SpanError;
use crate::label::EditLabel;
use crate::token::{Token, join_text};

/// One unit of difference between an original and a corrected sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edit {
    /// Start token offset in the original sentence.
    pub o_start: usize,
    /// End token offset (exclusive) in the original sentence.
    pub o_end: usize,
    /// Start token offset in the corrected sentence.
    pub c_start: usize,
    /// End token offset (exclusive) in the corrected sentence.
    pub c_end: usize,
    /// Original-side tokens (empty for insertions).
    pub o_toks: Vec<Token>,
    /// Corrected-side tokens (empty for deletions).
    pub c_toks: Vec<Token>,
    /// Error type; `None` until classified.
    pub label: Option<EditLabel>,
}

impl Edit {
    /// Create an edit from token lists alone, with offsets `0..len` on both sides.
    pub fn new(o_toks: Vec<Token>, c_toks: Vec<Token>) -> Self {
        Self {
            o_start: 0,
            o_end: o_toks.len(),
            c_start: 0,
            c_end: c_toks.len(),
            o_toks,
            c_toks,
            label: None,
        }
    }

    /// Cut an edit out of two annotated sentences.
    pub fn from_spans(
        orig: &[Token],
        cor: &[Token],
        o_start: usize,
        o_end: usize,
        c_start: usize,
        c_end: usize,
    ) -> Result<Self, SpanError> {
        let o_toks = slice_span(orig, o_start, o_end)?;
        let c_toks = slice_span(cor, c_start, c_end)?;
        Ok(Self {
            o_start,
            o_end,
            c_start,
            c_end,
            o_toks: o_toks.to_vec(),
            c_toks: c_toks.to_vec(),
            label: None,
        })
    }

    /// Original span text, tokens separated by single spaces.
    pub fn o_str(&self) -> String {
        join_text(&self.o_toks, " ")
    }

    /// Corrected span text, tokens separated by single spaces.
    pub fn c_str(&self) -> String {
        join_text(&self.c_toks, " ")
    }

    /// Whether the edit has been classified.
    pub fn is_classified(&self) -> bool {
        self.label.is_some()
    }
}

fn slice_span(toks: &[Token], start: usize, end: usize) -> Result<&[Token], SpanError> {
    if start > end {
        return Err(SpanError::Inverted { start, end });
    }
    if end > toks.len() {
        return Err(SpanError::OutOfRange {
            start,
            end,
            len: toks.len(),
        });
    }
    Ok(&toks[start..end])
}
