// Morphological feature set of a token
//
// Features arrive from the annotator in the CoNLL-U `Key=Value|Key=Value`
// form. They are sparse by construction, so lookups return `Option` and a
// missing key simply compares as absent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Feature key constants
// ---------------------------------------------------------------------------

pub const FEAT_TENSE: &str = "Tense";
pub const FEAT_MOOD: &str = "Mood";
pub const FEAT_VERB_FORM: &str = "VerbForm";
pub const FEAT_ASPECT: &str = "Aspect";

/// Feature keys that together describe the inflection of a verb.
pub const VERB_FEATURE_KEYS: &[&str] = &[FEAT_TENSE, FEAT_MOOD, FEAT_VERB_FORM, FEAT_ASPECT];

/// An ordered key/value map of morphological features.
///
/// Insertion order is preserved so that the feature string round-trips in
/// the order the annotator produced it. Feature sets hold a handful of
/// entries, so a vector with linear lookup is all that is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    entries: Vec<(String, String)>,
}

impl Features {
    /// Create an empty feature set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `Key=Value|Key=Value` string.
    ///
    /// `"_"` and the empty string denote no features. Pairs without `=` are
    /// skipped rather than rejected.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let mut features = Self::new();
        if s.is_empty() || s == "_" {
            return features;
        }
        for pair in s.split('|') {
            if let Some((key, value)) = pair.split_once('=') {
                let key = key.trim();
                if !key.is_empty() {
                    features.set(key, value.trim());
                }
            }
        }
        features
    }

    /// Set a feature value, replacing any previous value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a feature value by key. Returns `None` if not present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether both feature sets agree on `key` (both absent counts as agreement).
    pub fn agrees_on(&self, other: &Features, key: &str) -> bool {
        self.get(key) == other.get(key)
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Features {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("_");
        }
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

impl Serialize for Features {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Features {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| Self::parse(&s)).unwrap_or_default())
    }
}
