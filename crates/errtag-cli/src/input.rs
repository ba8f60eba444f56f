// JSON Lines input records and their M2 rendering
//
// Each input line holds one annotated original sentence and any number of
// corrections, each with the token spans of its edits. Every record becomes
// one M2 block: the `S` line, then the `A` lines of each correction (coder id
// = correction index), then a blank line.

use std::io::{self, BufRead, Write};

use serde::Deserialize;

use errtag_core::edit::Edit;
use errtag_core::error::SpanError;
use errtag_core::label::LABEL_NOOP;
use errtag_core::m2;
use errtag_core::token::Token;
use errtag_hi::{EditClassifier, LabelTally};

/// Failure to read or interpret the input stream.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("line {line}: invalid record: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Span {
        line: usize,
        #[source]
        source: SpanError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One original sentence with its corrections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentenceRecord {
    #[serde(default)]
    pub orig: Vec<Token>,
    #[serde(default)]
    pub cors: Vec<Correction>,
}

/// A corrected sentence and the edits that produce it from the original.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Correction {
    #[serde(default)]
    pub toks: Vec<Token>,
    /// `[o_start, o_end, c_start, c_end]` token spans.
    #[serde(default)]
    pub edits: Vec<[usize; 4]>,
}

impl Correction {
    /// Whether the correction leaves the original text unchanged.
    pub fn is_noop(&self, orig: &[Token]) -> bool {
        self.toks.len() == orig.len() && self.toks.iter().zip(orig).all(|(c, o)| c.text == o.text)
    }
}

/// Parse one JSON Lines record. `line` is 1-based and used in errors.
pub fn parse_record(text: &str, line: usize) -> Result<SentenceRecord, InputError> {
    serde_json::from_str(text).map_err(|source| InputError::Json { line, source })
}

/// Classify every edit of a record and render its M2 block.
///
/// Labels (and `noop` for unchanged corrections) are counted in `tally`.
pub fn annotate_record<C: EditClassifier>(
    record: &SentenceRecord,
    classifier: &C,
    tally: &mut LabelTally,
) -> Result<String, SpanError> {
    let mut block = m2::source_line(&record.orig);
    block.push('\n');

    for (coder, cor) in record.cors.iter().enumerate() {
        if cor.is_noop(&record.orig) {
            block.push_str(&m2::noop_line(coder));
            block.push('\n');
            tally.add(LABEL_NOOP);
            continue;
        }
        for &[o_start, o_end, c_start, c_end] in &cor.edits {
            let mut edit = Edit::from_spans(&record.orig, &cor.toks, o_start, o_end, c_start, c_end)?;
            let label = classifier.classify(&mut edit);
            tally.add_label(&label);
            block.push_str(&m2::edit_line(&edit, coder));
            block.push('\n');
        }
    }

    block.push('\n');
    Ok(block)
}

/// Annotate a whole JSON Lines stream, writing M2 blocks to `out`.
///
/// Blank lines and records with an empty original sentence are skipped.
/// Returns the label counts over all records.
pub fn process_input<R, W, C>(input: R, out: &mut W, classifier: &C) -> Result<LabelTally, InputError>
where
    R: BufRead,
    W: Write,
    C: EditClassifier,
{
    let mut tally = LabelTally::new();
    let mut records = 0usize;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_record(&line, line_no)?;
        if record.orig.is_empty() {
            tracing::debug!(line = line_no, "skipping record with empty original");
            continue;
        }
        let block = annotate_record(&record, classifier, &mut tally)
            .map_err(|source| InputError::Span { line: line_no, source })?;
        out.write_all(block.as_bytes())?;
        records += 1;
    }

    tracing::info!(records, edits = tally.total(), "annotation finished");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use errtag_hi::HindiClassifier;
    use errtag_hi::resources::{PosMap, Resources, WordList};
    use std::path::Path;
    use std::sync::Arc;

    fn classifier() -> HindiClassifier {
        let word_list: WordList = ["लड़का", "लड़के", "घर", "यह"].into_iter().collect();
        let pos_map = PosMap::from_text(
            "NOUN\tNOUN\nDET\tDET\nADP\tADP\nVERB\tVERB\n",
            Path::new("test-map"),
        )
        .unwrap();
        HindiClassifier::new(Arc::new(Resources::new(word_list, pos_map)))
    }

    fn run(input: &str) -> Result<(String, LabelTally), InputError> {
        let mut out = Vec::new();
        let tally = process_input(input.as_bytes(), &mut out, &classifier())?;
        Ok((String::from_utf8(out).unwrap(), tally))
    }

    const ORIG: &str = r#"[{"text":"लड़का","lemma":"लड़का","upos":"NOUN","deprel":"nsubj"},{"text":"घर","lemma":"घर","upos":"NOUN","deprel":"obl"}]"#;

    #[test]
    fn edits_become_a_lines() {
        let cor = r#"[{"text":"यह","upos":"DET","deprel":"det"},{"text":"लड़के","lemma":"लड़का","upos":"NOUN","deprel":"nsubj"},{"text":"घर","lemma":"घर","upos":"NOUN","deprel":"obl"}]"#;
        let input = format!(r#"{{"orig":{ORIG},"cors":[{{"toks":{cor},"edits":[[0,0,0,1],[0,1,1,2]]}}]}}"#);
        let (out, tally) = run(&input).unwrap();
        assert_eq!(
            out,
            "S लड़का घर\n\
             A 0 0|||M:DET|||यह|||REQUIRED|||-NONE-|||0\n\
             A 0 1|||R:NOUN:INFL|||लड़के|||REQUIRED|||-NONE-|||0\n\
             \n"
        );
        assert_eq!(tally.get("M:DET"), 1);
        assert_eq!(tally.get("R:NOUN:INFL"), 1);
    }

    #[test]
    fn unchanged_correction_is_noop() {
        let input = format!(r#"{{"orig":{ORIG},"cors":[{{"toks":{ORIG},"edits":[]}}]}}"#);
        let (out, tally) = run(&input).unwrap();
        assert_eq!(
            out,
            "S लड़का घर\nA -1 -1|||noop|||-NONE-|||REQUIRED|||-NONE-|||0\n\n"
        );
        assert_eq!(tally.get("noop"), 1);
    }

    #[test]
    fn coder_ids_follow_correction_order() {
        let input = format!(
            r#"{{"orig":{ORIG},"cors":[{{"toks":{ORIG}}},{{"toks":[{{"text":"घर"}}],"edits":[[0,1,0,0]]}}]}}"#
        );
        let (out, _) = run(&input).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].ends_with("|||0"));
        assert!(lines[2].starts_with("A 0 1|||U:NOUN|||"));
        assert!(lines[2].ends_with("|||1"));
    }

    #[test]
    fn blank_lines_and_empty_originals_skipped() {
        let input = "\n{\"orig\":[],\"cors\":[]}\n   \n";
        let (out, tally) = run(input).unwrap();
        assert!(out.is_empty());
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn bad_json_reports_line() {
        let input = format!("{{\"orig\":{ORIG}}}\nnot json\n");
        let err = run(&input).unwrap_err();
        assert!(matches!(err, InputError::Json { line: 2, .. }));
    }

    #[test]
    fn span_outside_sentence_reports_line() {
        let input = format!(r#"{{"orig":{ORIG},"cors":[{{"toks":[],"edits":[[0,5,0,0]]}}]}}"#);
        let err = run(&input).unwrap_err();
        assert!(matches!(err, InputError::Span { line: 1, .. }));
        assert!(err.to_string().starts_with("line 1: "));
    }
}
