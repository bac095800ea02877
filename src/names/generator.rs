//! Syllabic fantasy-name generator.
//!
//! Names are built from onset / vowel / coda tables. Each syllable follows one
//! of a small set of [`SyllablePattern`]s, and consecutive syllables are
//! regenerated (a bounded number of times) when the boundary would repeat the
//! same character, e.g. `"tar" + "ren"`.
//!
//! The generator itself is an immutable value: it is `Send + Sync` and every
//! call draws randomness either from the RNG passed in or from
//! `rand::thread_rng()`, so it can be shared across threads without locking.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{debug, trace};

use super::capitalize_first;
use super::tables::{
    DEFAULT_CODAS, DEFAULT_MAX_SYLLABLES, DEFAULT_MIN_SYLLABLES, DEFAULT_ONSETS, DEFAULT_PATTERNS,
    DEFAULT_VOWELS,
};

/// How many times a colliding syllable is regenerated before the last
/// candidate is accepted as-is.
pub const MAX_REPAIR_ATTEMPTS: usize = 5;

/// Rejected generator configuration. Raised at construction only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{0} table must not be empty")]
    EmptyTable(&'static str),
    #[error("vowel table must not contain empty entries")]
    EmptyVowel,
    #[error("at least one syllable pattern is required")]
    NoPatterns,
    #[error("at least one syllable pattern must include the vowel slot")]
    NoVowelPattern,
    #[error("syllable count must be positive (min={min}, max={max})")]
    ZeroSyllables { min: usize, max: usize },
    #[error("min_syllables ({min}) is greater than max_syllables ({max})")]
    InvertedSyllableRange { min: usize, max: usize },
}

/// Which slots take part in a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllablePattern {
    pub onset: bool,
    pub vowel: bool,
    pub coda: bool,
}

impl SyllablePattern {
    pub const fn new(onset: bool, vowel: bool, coda: bool) -> Self {
        Self { onset, vowel, coda }
    }
}

/// Onset, vowel and coda tables. `""` in `onsets`/`codas` stands for an
/// empty slot and is a legitimate pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeTable {
    onsets: Vec<String>,
    vowels: Vec<String>,
    codas: Vec<String>,
}

impl PhonemeTable {
    pub fn new<S: Into<String>>(
        onsets: impl IntoIterator<Item = S>,
        vowels: impl IntoIterator<Item = S>,
        codas: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            onsets: onsets.into_iter().map(Into::into).collect(),
            vowels: vowels.into_iter().map(Into::into).collect(),
            codas: codas.into_iter().map(Into::into).collect(),
        }
    }

    pub fn onsets(&self) -> &[String] { &self.onsets }
    pub fn vowels(&self) -> &[String] { &self.vowels }
    pub fn codas(&self) -> &[String] { &self.codas }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.onsets.is_empty() {
            return Err(ConfigurationError::EmptyTable("onset"));
        }
        if self.vowels.is_empty() {
            return Err(ConfigurationError::EmptyTable("vowel"));
        }
        if self.codas.is_empty() {
            return Err(ConfigurationError::EmptyTable("coda"));
        }
        if self.vowels.iter().any(String::is_empty) {
            return Err(ConfigurationError::EmptyVowel);
        }
        Ok(())
    }
}

impl Default for PhonemeTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_ONSETS.iter().copied(),
            DEFAULT_VOWELS.iter().copied(),
            DEFAULT_CODAS.iter().copied(),
        )
    }
}

/// A generated name together with the syllables it was assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedName {
    pub name: String,
    /// Accepted syllables, before capitalization.
    pub syllables: Vec<String>,
    /// Per syllable: how many times it was regenerated to avoid a boundary
    /// collision (always 0 for the first syllable).
    pub regenerations: Vec<usize>,
}

impl GeneratedName {
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

#[derive(Debug, Clone)]
pub struct NameGenerator {
    table: PhonemeTable,
    patterns: Vec<SyllablePattern>,
    min_syllables: usize,
    max_syllables: usize,
}

impl NameGenerator {
    /// Validate the configuration and build a generator.
    pub fn new(
        table: PhonemeTable,
        patterns: Vec<SyllablePattern>,
        min_syllables: usize,
        max_syllables: usize,
    ) -> Result<Self, ConfigurationError> {
        table.validate()?;
        if patterns.is_empty() {
            return Err(ConfigurationError::NoPatterns);
        }
        if !patterns.iter().any(|p| p.vowel) {
            return Err(ConfigurationError::NoVowelPattern);
        }
        if min_syllables == 0 || max_syllables == 0 {
            return Err(ConfigurationError::ZeroSyllables { min: min_syllables, max: max_syllables });
        }
        if min_syllables > max_syllables {
            return Err(ConfigurationError::InvertedSyllableRange {
                min: min_syllables,
                max: max_syllables,
            });
        }
        Ok(Self { table, patterns, min_syllables, max_syllables })
    }

    /// Default tables and patterns with a custom syllable range.
    pub fn with_syllable_range(min_syllables: usize, max_syllables: usize) -> Result<Self, ConfigurationError> {
        Self::new(PhonemeTable::default(), DEFAULT_PATTERNS.to_vec(), min_syllables, max_syllables)
    }

    pub fn table(&self) -> &PhonemeTable { &self.table }
    pub fn patterns(&self) -> &[SyllablePattern] { &self.patterns }
    pub fn syllable_range(&self) -> (usize, usize) { (self.min_syllables, self.max_syllables) }

    /// One syllable: onset + vowel + coda, skipping the slots the drawn
    /// pattern leaves out.
    pub fn generate_syllable(&self, rng: &mut impl Rng) -> String {
        let pattern = self
            .patterns
            .choose(rng)
            .copied()
            .unwrap_or(SyllablePattern::new(false, true, false));

        let mut syllable = String::new();
        if pattern.onset {
            syllable.push_str(pick(&self.table.onsets, rng));
        }
        if pattern.vowel {
            syllable.push_str(pick(&self.table.vowels, rng));
        }
        if pattern.coda {
            syllable.push_str(pick(&self.table.codas, rng));
        }
        syllable
    }

    /// Generate a name and report how it was assembled.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedName {
        let count = rng.gen_range(self.min_syllables..=self.max_syllables);
        let mut syllables: Vec<String> = Vec::with_capacity(count);
        let mut regenerations = Vec::with_capacity(count);

        for i in 0..count {
            let mut candidate = self.generate_syllable(rng);
            let mut attempts = 0;
            if let Some(prev) = syllables.last() {
                while attempts < MAX_REPAIR_ATTEMPTS && boundary_collides(prev, &candidate) {
                    trace!(target: "names", index = i, rejected = %candidate, "syllable_boundary_collision");
                    candidate = self.generate_syllable(rng);
                    attempts += 1;
                }
            }
            syllables.push(candidate);
            regenerations.push(attempts);
        }

        let name = capitalize_first(&syllables.concat());
        debug!(target: "names", name = %name, syllables = count, "name_generated");
        GeneratedName { name, syllables, regenerations }
    }

    pub fn generate_name_with(&self, rng: &mut impl Rng) -> String {
        self.generate(rng).into_name()
    }

    /// Generate a name from the thread-local RNG.
    pub fn generate_name(&self) -> String {
        self.generate_name_with(&mut rand::thread_rng())
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self {
            table: PhonemeTable::default(),
            patterns: DEFAULT_PATTERNS.to_vec(),
            min_syllables: DEFAULT_MIN_SYLLABLES,
            max_syllables: DEFAULT_MAX_SYLLABLES,
        }
    }
}

fn pick<'a>(items: &'a [String], rng: &mut impl Rng) -> &'a str {
    items.choose(rng).map(String::as_str).unwrap_or_default()
}

/// A missing character on either side never counts as a collision.
fn boundary_collides(prev: &str, candidate: &str) -> bool {
    match (prev.chars().last(), candidate.chars().next()) {
        (Some(last), Some(first)) => last == first,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn single(onset: &str, vowel: &str, coda: &str, pattern: SyllablePattern, n: usize) -> NameGenerator {
        NameGenerator::new(PhonemeTable::new([onset], [vowel], [coda]), vec![pattern], n, n).unwrap()
    }

    #[test]
    fn boundary_collision_rules() {
        assert!(boundary_collides("tar", "ren"));
        assert!(!boundary_collides("tar", "den"));
        assert!(!boundary_collides("", "a"));
        assert!(!boundary_collides("a", ""));
        assert!(!boundary_collides("", ""));
    }

    #[test]
    fn syllable_concatenates_slots_in_order() {
        let g = single("br", "ae", "th", SyllablePattern::new(true, true, true), 1);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(g.generate_syllable(&mut rng), "braeth");
    }

    #[test]
    fn disabled_slots_contribute_nothing() {
        let g = single("zz", "o", "qq", SyllablePattern::new(false, true, false), 1);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(g.generate_syllable(&mut rng), "o");
        }
    }

    #[test]
    fn forced_collisions_stop_after_max_attempts() {
        let g = single("a", "a", "", SyllablePattern::new(true, true, false), 3);
        let mut rng = StdRng::seed_from_u64(3);
        let out = g.generate(&mut rng);
        assert_eq!(out.regenerations, vec![0, MAX_REPAIR_ATTEMPTS, MAX_REPAIR_ATTEMPTS]);
        assert_eq!(out.name, "Aaaaaa");
    }

    #[test]
    fn no_regeneration_without_collision() {
        let g = single("b", "a", "", SyllablePattern::new(true, true, false), 4);
        let mut rng = StdRng::seed_from_u64(11);
        let out = g.generate(&mut rng);
        assert_eq!(out.regenerations, vec![0, 0, 0, 0]);
        assert_eq!(out.name, "Babababa");
    }

    #[test]
    fn same_seed_same_name() {
        let g = NameGenerator::default();
        let a = g.generate_name_with(&mut StdRng::seed_from_u64(42));
        let b = g.generate_name_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_configuration() {
        let patterns = DEFAULT_PATTERNS.to_vec();
        let empty: [&str; 0] = [];
        assert_eq!(
            NameGenerator::new(PhonemeTable::new(["b"], empty, [""]), patterns.clone(), 2, 4).unwrap_err(),
            ConfigurationError::EmptyTable("vowel")
        );
        assert_eq!(
            NameGenerator::new(PhonemeTable::new(empty, ["a"], [""]), patterns.clone(), 2, 4).unwrap_err(),
            ConfigurationError::EmptyTable("onset")
        );
        assert_eq!(
            NameGenerator::new(PhonemeTable::new(["b"], ["a", ""], [""]), patterns.clone(), 2, 4).unwrap_err(),
            ConfigurationError::EmptyVowel
        );
        assert_eq!(
            NameGenerator::new(PhonemeTable::default(), vec![], 2, 4).unwrap_err(),
            ConfigurationError::NoPatterns
        );
        assert_eq!(
            NameGenerator::new(PhonemeTable::default(), vec![SyllablePattern::new(true, false, true)], 2, 4)
                .unwrap_err(),
            ConfigurationError::NoVowelPattern
        );
        assert_eq!(
            NameGenerator::with_syllable_range(0, 3).unwrap_err(),
            ConfigurationError::ZeroSyllables { min: 0, max: 3 }
        );
        assert_eq!(
            NameGenerator::with_syllable_range(5, 2).unwrap_err(),
            ConfigurationError::InvertedSyllableRange { min: 5, max: 2 }
        );
    }

    #[test]
    fn generator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NameGenerator>();
    }
}
