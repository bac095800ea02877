//! Default phoneme tables for the syllabic generator and the fixed
//! fragment lists used by the legacy generator.

use super::generator::SyllablePattern;

/// Consonant clusters that may open a syllable. `""` means no onset.
pub const DEFAULT_ONSETS: &[&str] = &[
    "", "b", "br", "bl", "c", "cr", "cl", "d", "dr", "f", "fr", "fl", "g", "gr", "gl", "h", "j",
    "k", "kr", "kl", "l", "m", "n", "p", "pr", "pl", "qu", "r", "s", "st", "str", "sl", "t", "tr",
    "v", "w", "z", "zh", "sh", "ch",
];

/// Syllable nuclei: single vowels and digraphs.
pub const DEFAULT_VOWELS: &[&str] = &[
    "a", "e", "i", "o", "u", "ae", "ai", "au", "ea", "ee", "ei", "io", "oa", "oe", "oo", "ou", "ua",
    "ue", "ui",
];

/// Trailing consonants. `""` means no coda.
pub const DEFAULT_CODAS: &[&str] = &[
    "", "b", "d", "g", "k", "l", "m", "n", "r", "s", "t", "th", "nd", "st", "nt", "rk", "rd", "sh",
    "ss", "zz", "ck",
];

pub const DEFAULT_PATTERNS: &[SyllablePattern] = &[
    SyllablePattern::new(true, true, true),
    SyllablePattern::new(true, true, false),
    SyllablePattern::new(false, true, true),
    SyllablePattern::new(false, true, false),
];

pub const DEFAULT_MIN_SYLLABLES: usize = 2;
pub const DEFAULT_MAX_SYLLABLES: usize = 4;

pub const LEGACY_BEGINNINGS: &[&str] = &[
    "Al", "Bar", "Cal", "Da", "El", "Fa", "Gal", "Har", "Is", "Jar", "Ka", "Lor", "Mor", "Nor",
    "Or", "Per", "Qua", "Ra", "Sar", "Tor", "Ur", "Vor", "Wyn", "Xan", "Yar", "Zul",
];

pub const LEGACY_MIDDLES: &[&str] = &[
    "a", "e", "i", "o", "u", "ae", "ia", "ei", "oo", "ou", "ar", "ir", "or", "ul", "an", "en",
];

pub const LEGACY_ENDINGS: &[&str] = &[
    "dor", "ron", "mir", "rak", "lius", "tar", "wen", "dil", "thas", "mon", "ric", "zan", "lith",
    "gorn", "dras", "thus",
];
