// Part-of-speech tag remapping table
//
// The map file has one `SOURCE<TAB>TARGET` pair per line and collapses the
// annotator's tag set onto the coarser set used in error categories.

use std::path::Path;

use hashbrown::HashMap;

use errtag_core::error::ResourceError;
use errtag_core::token::Token;

/// Targets renamed for readability of the resulting categories.
const TARGET_OVERRIDES: &[(&str, &str)] = &[("ADP", "PREP"), ("PROPN", "NOUN"), ("CCONJ", "CONJ")];

/// Source tags emitted by annotators but missing from published map files.
const FALLBACK_ENTRIES: &[(&str, &str)] = &[
    ("\"\"", "PUNCT"),
    ("SP", "SPACE"),
    ("ADD", "X"),
    ("GW", "X"),
    ("NFP", "X"),
    ("XX", "X"),
];

/// Mapping from source tags to coarse category tags.
#[derive(Debug, Clone, Default)]
pub struct PosMap {
    map: HashMap<String, String>,
}

impl PosMap {
    /// Parse map file contents. `origin` names the source in error messages.
    pub fn from_text(text: &str, origin: &Path) -> Result<Self, ResourceError> {
        let mut map = HashMap::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((source, target)) = line.split_once('\t') else {
                return Err(ResourceError::Malformed {
                    path: origin.to_path_buf(),
                    line: idx + 1,
                    reason: "missing tab separator".to_string(),
                });
            };
            let source = source.trim();
            let target = target.trim();
            if source.is_empty() || target.is_empty() {
                return Err(ResourceError::Malformed {
                    path: origin.to_path_buf(),
                    line: idx + 1,
                    reason: "empty tag".to_string(),
                });
            }
            map.insert(source.to_string(), rename_target(target).to_string());
        }
        for &(source, target) in FALLBACK_ENTRIES {
            map.insert(source.to_string(), target.to_string());
        }
        Ok(Self { map })
    }

    /// Read a map file.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let text = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text, path)
    }

    /// Mapped tag for a source tag.
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.map.get(tag).map(String::as_str)
    }

    /// Category tag of a token: its mapped coarse tag, or its fine-grained
    /// tag when the coarse tag is not in the map.
    pub fn tag_of<'a>(&'a self, token: &'a Token) -> &'a str {
        self.get(&token.upos).unwrap_or(token.xpos.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn rename_target(target: &str) -> &str {
    TARGET_OVERRIDES
        .iter()
        .find(|(from, _)| *from == target)
        .map_or(target, |&(_, to)| to)
}
