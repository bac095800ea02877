//! Fantasy name generation.

pub mod generator;
pub mod legacy;
pub mod tables;

pub use generator::{
    ConfigurationError, GeneratedName, MAX_REPAIR_ATTEMPTS, NameGenerator, PhonemeTable,
    SyllablePattern,
};
pub use legacy::{generate_legacy_name, generate_legacy_name_with};

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_GENERATOR: NameGenerator = NameGenerator::default();
}

/// Name from the default syllabic generator.
pub fn generate_fantasy_name() -> String {
    DEFAULT_GENERATOR.generate_name()
}

/// Uppercase the first character; the rest is left untouched.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
