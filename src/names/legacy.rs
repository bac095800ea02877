//! First-generation name tool: beginning + optional middle + ending.

use rand::Rng;
use rand::seq::SliceRandom;

use super::capitalize_first;
use super::tables::{LEGACY_BEGINNINGS, LEGACY_ENDINGS, LEGACY_MIDDLES};

/// Chance that a middle fragment is inserted.
const MIDDLE_PROBABILITY: f64 = 0.5;

pub fn generate_legacy_name_with(rng: &mut impl Rng) -> String {
    let start = LEGACY_BEGINNINGS.choose(rng).copied().unwrap_or_default();
    let middle = if rng.gen_bool(MIDDLE_PROBABILITY) {
        LEGACY_MIDDLES.choose(rng).copied().unwrap_or_default()
    } else {
        ""
    };
    let end = LEGACY_ENDINGS.choose(rng).copied().unwrap_or_default();
    capitalize_first(&format!("{start}{middle}{end}"))
}

pub fn generate_legacy_name() -> String {
    generate_legacy_name_with(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn legacy_name_is_built_from_fragments() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let name = generate_legacy_name_with(&mut rng);
            assert!(LEGACY_BEGINNINGS.iter().any(|b| name.starts_with(b)), "{name}");
            assert!(LEGACY_ENDINGS.iter().any(|e| name.ends_with(e)), "{name}");
            assert!(name.chars().next().is_some_and(char::is_uppercase));
        }
    }

    #[test]
    fn middle_is_sometimes_skipped() {
        let mut rng = StdRng::seed_from_u64(9);
        let short = (0..200)
            .map(|_| generate_legacy_name_with(&mut rng))
            .filter(|n| {
                LEGACY_BEGINNINGS
                    .iter()
                    .any(|b| LEGACY_ENDINGS.iter().any(|e| n.as_str() == format!("{b}{e}")))
            })
            .count();
        assert!(short > 0 && short < 200, "short={short}");
    }
}
