// WASM bindings for the Hindi error type classifier.
//
// Provides a `WasmClassifier` class exported via wasm-bindgen that wraps
// `HindiClassifier` from errtag-hi. Resources are passed in as file
// contents since there is no filesystem. Edits and tokens cross the
// boundary as plain JavaScript objects via serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const c = new WasmClassifier(bigTxtText, hiPtbMapText);
//   c.classify({ o_toks: [], c_toks: [{ text: "यह", upos: "DET", deprel: "det" }] });
//                                      // => "M:DET"
//   c.classifyAll([edit1, edit2]);     // => ["R:SPELL", "U:PREP"]
//   c.hasWord("लड़का");                // => true
//   c.stem("laDakA");                  // => "laDak"
//   c.similarity("recieve", "receive"); // => 0.857...
//   c.tally();                         // => { "M:DET": 1, ... }

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use errtag_core::edit::Edit;
use errtag_core::error::ResourceError;
use errtag_core::token::Token;
use errtag_hi::hindi::stemmer::HindiStemmer;
use errtag_hi::resources::{PosMap, WordList};
use errtag_hi::{ClassifierOptions, EditClassifier, HindiClassifier, Resources, SharedTally};

// ============================================================================
// Serde DTO types for JS interop
// ============================================================================

/// An edit as passed from JavaScript: the two token spans.
#[derive(Deserialize)]
struct JsEdit {
    #[serde(default, alias = "oToks")]
    o_toks: Vec<Token>,
    #[serde(default, alias = "cToks")]
    c_toks: Vec<Token>,
}

impl From<JsEdit> for Edit {
    fn from(e: JsEdit) -> Self {
        Edit::new(e.o_toks, e.c_toks)
    }
}

fn resource_error_to_js(e: ResourceError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmClassifier
// ============================================================================

/// Hindi grammatical error type classifier for WebAssembly.
#[wasm_bindgen]
pub struct WasmClassifier {
    classifier: HindiClassifier,
    tally: Arc<SharedTally>,
    stemmer: HindiStemmer,
}

#[wasm_bindgen]
impl WasmClassifier {
    /// Create a classifier from resource file contents.
    ///
    /// - `word_list`: contents of `big.txt` (one word per line)
    /// - `pos_map`: contents of `hi-ptb-map` (`SOURCE<TAB>TARGET` per line)
    #[wasm_bindgen(constructor)]
    pub fn new(word_list: &str, pos_map: &str) -> Result<WasmClassifier, JsError> {
        let word_list = WordList::from_text(word_list);
        let pos_map =
            PosMap::from_text(pos_map, Path::new("hi-ptb-map")).map_err(resource_error_to_js)?;
        let tally = Arc::new(SharedTally::new());
        let classifier = HindiClassifier::new(Arc::new(Resources::new(word_list, pos_map)))
            .with_observer(tally.clone());
        Ok(WasmClassifier {
            classifier,
            tally,
            stemmer: HindiStemmer::new(),
        })
    }

    /// Classify one edit given as `{ o_toks, c_toks }`.
    ///
    /// Tokens are objects with `text`, `lemma`, `upos`, `xpos`, `feats` and
    /// `deprel`; missing fields are empty. Returns the label, e.g. `"R:SPELL"`.
    pub fn classify(&self, edit: JsValue) -> Result<String, JsError> {
        let edit: JsEdit =
            serde_wasm_bindgen::from_value(edit).map_err(|e| JsError::new(&e.to_string()))?;
        let mut edit = Edit::from(edit);
        Ok(self.classifier.classify(&mut edit).to_string())
    }

    /// Classify an array of edits. Returns an array of labels in input order.
    #[wasm_bindgen(js_name = "classifyAll")]
    pub fn classify_all(&self, edits: JsValue) -> Result<js_sys::Array, JsError> {
        let edits: Vec<JsEdit> =
            serde_wasm_bindgen::from_value(edits).map_err(|e| JsError::new(&e.to_string()))?;
        let labels = js_sys::Array::new();
        for edit in edits {
            let mut edit = Edit::from(edit);
            let label = self.classifier.classify(&mut edit);
            labels.push(&JsValue::from_str(&label.to_string()));
        }
        Ok(labels)
    }

    /// Whether a word is in the loaded word list.
    #[wasm_bindgen(js_name = "hasWord")]
    pub fn has_word(&self, word: &str) -> bool {
        self.classifier.resources().word_list.contains(word)
    }

    /// Stem a WX-transliterated word. Returns null when no suffix matches.
    pub fn stem(&self, word: &str) -> Option<String> {
        self.stemmer.stem(word).map(str::to_string)
    }

    /// Similarity of two strings in `[0, 1]`.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        errtag_hi::similarity::similarity(a, b)
    }

    /// Counts of every label assigned so far, as a `{ label: count }` object.
    pub fn tally(&self) -> Result<JsValue, JsError> {
        let obj = js_sys::Object::new();
        for (label, count) in self.tally.snapshot().sorted() {
            js_sys::Reflect::set(
                &obj,
                &JsValue::from_str(label),
                &JsValue::from_f64(count as f64),
            )
            .map_err(|e| JsError::new(&format!("{e:?}")))?;
        }
        Ok(obj.into())
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the similarity above which an unknown word is a spelling error.
    #[wasm_bindgen(js_name = "setSpellRatioThreshold")]
    pub fn set_spell_ratio_threshold(&mut self, value: f64) {
        let options = ClassifierOptions {
            spell_ratio_threshold: value,
            ..*self.classifier.options()
        };
        self.classifier.set_options(options);
    }

    /// Set the lemma similarity at which two words count as the same lemma.
    #[wasm_bindgen(js_name = "setLemmaRatioThreshold")]
    pub fn set_lemma_ratio_threshold(&mut self, value: f64) {
        let options = ClassifierOptions {
            lemma_ratio_threshold: value,
            ..*self.classifier.options()
        };
        self.classifier.set_options(options);
    }
}
