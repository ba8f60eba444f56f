// Annotated token
//
// Tokens are produced by an upstream annotator (tokenizer, tagger,
// lemmatizer, dependency parser) and are only read afterwards.

use serde::{Deserialize, Serialize};

use crate::features::Features;

/// A word with its linguistic annotation.
///
/// Every field defaults to empty when the annotator did not supply it, so
/// classification never has to distinguish "missing" from "empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    /// Surface form.
    pub text: String,

    /// Dictionary form.
    pub lemma: String,

    /// Coarse (universal) part-of-speech tag, e.g. `VERB`.
    pub upos: String,

    /// Fine-grained, tagset-specific part-of-speech tag.
    pub xpos: String,

    /// Morphological features.
    pub feats: Features,

    /// Dependency relation to the head, e.g. `aux` or `nmod`.
    #[serde(alias = "dependency_relation", alias = "dep")]
    pub deprel: String,
}

impl Token {
    /// Create a token carrying only its surface form.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the lemma.
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Set the coarse and fine-grained tags.
    pub fn with_pos(mut self, upos: impl Into<String>, xpos: impl Into<String>) -> Self {
        self.upos = upos.into();
        self.xpos = xpos.into();
        self
    }

    /// Set the features from a `Key=Value|Key=Value` string.
    pub fn with_feats(mut self, feats: &str) -> Self {
        self.feats = Features::parse(feats);
        self
    }

    /// Set the dependency relation.
    pub fn with_deprel(mut self, deprel: impl Into<String>) -> Self {
        self.deprel = deprel.into();
        self
    }
}

/// Join the surface forms of `tokens` with `sep`.
pub fn join_text(tokens: &[Token], sep: &str) -> String {
    let mut out = String::new();
    for (i, tok) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(&tok.text);
    }
    out
}
