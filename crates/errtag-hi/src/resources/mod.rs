// Lexical resources consulted by the classifier
//
// Resources are loaded once at startup and shared read-only (behind `Arc`)
// by every classifier instance and worker thread.

pub mod pos_map;
pub mod word_list;

use std::path::Path;

use errtag_core::error::ResourceError;

pub use pos_map::PosMap;
pub use word_list::WordList;

/// Word list file name inside a resource directory.
pub const WORD_LIST_FILE: &str = "big.txt";

/// POS map file name inside a resource directory.
pub const POS_MAP_FILE: &str = "hi-ptb-map";

/// Read a word list file (one word per line).
pub fn load_word_list(path: &Path) -> Result<WordList, ResourceError> {
    WordList::load(path)
}

/// Read a POS map file (`SOURCE<TAB>TARGET` per line).
pub fn load_pos_map(path: &Path) -> Result<PosMap, ResourceError> {
    PosMap::load(path)
}

/// The static lookup tables needed for classification.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    pub word_list: WordList,
    pub pos_map: PosMap,
}

impl Resources {
    pub fn new(word_list: WordList, pos_map: PosMap) -> Self {
        Self { word_list, pos_map }
    }

    /// Load `big.txt` and `hi-ptb-map` from a resource directory.
    pub fn load_dir(dir: &Path) -> Result<Self, ResourceError> {
        let word_list = load_word_list(&dir.join(WORD_LIST_FILE))?;
        let pos_map = load_pos_map(&dir.join(POS_MAP_FILE))?;
        tracing::info!(
            dir = %dir.display(),
            words = word_list.len(),
            tags = pos_map.len(),
            "loaded lexical resources"
        );
        Ok(Self::new(word_list, pos_map))
    }

    /// Whether a resource directory holds both resource files.
    pub fn is_resource_dir(dir: &Path) -> bool {
        dir.join(WORD_LIST_FILE).is_file() && dir.join(POS_MAP_FILE).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_dir_reports_first_missing_file() {
        let err = Resources::load_dir(Path::new("/nonexistent/errtag")).unwrap_err();
        match err {
            ResourceError::Io { path, .. } => assert!(path.ends_with(WORD_LIST_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_dir_is_not_a_resource_dir() {
        assert!(!Resources::is_resource_dir(Path::new("/nonexistent/errtag")));
    }
}
