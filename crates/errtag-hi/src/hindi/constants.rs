// Hindi language tables shared by the stemmer and the classifier.

/// Inflectional suffixes recognized by the stemmer, in WX transliteration.
///
/// `ogeAo` is a single entry; `oge` and `Ao` on their own are not in the table.
pub(crate) const STEM_SUFFIXES: &[&str] = &[
    "A", "AeM", "awA", "Ane", "egA", "i", "AoM", "awI", "UMgA", "egI", "I", "iyAM", "IM", "UMgI",
    "AegA", "u", "iyoM", "awIM", "AUMgA", "AegI", "U", "AiyAM", "awe", "AUMgI", "AyA", "e",
    "AiyoM", "AwA", "eMge", "Ae", "o", "AMh", "AwI", "eMgI", "AI", "eM", "iyAMh", "AwIM", "AeMge",
    "AIM", "oM", "AiyAMh", "Awe", "AeMgI", "ie", "AM", "awAeM", "manA", "ogeAo", "uAM", "awAoM",
    "anI", "ogI", "Aie", "ueM", "anAeM", "ane", "Aoge", "akara", "uoM", "anAoM", "AnA", "AogI",
    "Akara",
];

/// Word endings that alternate in spelling because they are pronounced
/// alike (य-glide vs. bare vowel sign, आ vs. वा). Each pair is tried as
/// written and reversed.
pub(crate) const PRONUNCIATION_VARIANTS: &[(&str, &str)] = &[
    ("ये", "ए"),
    ("यी", "ई"),
    ("या", "आ"),
    ("यीं", "ईं"),
    ("आ", "वा"),
];

/// Words that mark comparative or superlative degree on a following adjective.
pub(crate) const DEGREE_MARKERS: &[&str] = &["अधिकतम", "अधिक", "परम", "ज्यादा"];
