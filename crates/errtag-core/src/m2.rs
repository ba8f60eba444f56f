// M2 rendering
//
// An M2 block is an `S` line with the tokenized original followed by one
// `A` line per edit and per annotator:
//
//   S tok tok tok
//   A <o_start> <o_end>|||<label>|||<correction>|||REQUIRED|||-NONE-|||<coder>

use crate::edit::Edit;
use crate::label::LABEL_NOOP;
use crate::token::{Token, join_text};

const FIELD_SEP: &str = "|||";
const REQUIRED: &str = "REQUIRED";
const NONE: &str = "-NONE-";

/// Render the `S` line for an original sentence.
pub fn source_line(orig: &[Token]) -> String {
    if orig.is_empty() {
        return "S".to_string();
    }
    format!("S {}", join_text(orig, " "))
}

/// Render an `A` line for a classified edit.
///
/// An unclassified edit is rendered with the unknown label.
pub fn edit_line(edit: &Edit, coder: usize) -> String {
    let label = edit
        .label
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| crate::label::LABEL_UNKNOWN.to_string());
    [
        format!("A {} {}", edit.o_start, edit.o_end),
        label,
        edit.c_str(),
        REQUIRED.to_string(),
        NONE.to_string(),
        coder.to_string(),
    ]
    .join(FIELD_SEP)
}

/// Render the sentinel `A` line stating that a correction changes nothing.
pub fn noop_line(coder: usize) -> String {
    format!("A -1 -1{FIELD_SEP}{LABEL_NOOP}{FIELD_SEP}{NONE}{FIELD_SEP}{REQUIRED}{FIELD_SEP}{NONE}{FIELD_SEP}{coder}")
}
