//! Random demo entries for populating an empty list.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::item::TodoIcon;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
];

/// Alpha range for icon tints
const TINT_MIN: f32 = 0.3;
const TINT_MAX: f32 = 0.9;

/// Description and icon for a generated item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub description: String,
    pub icon: TodoIcon,
}

pub fn random_entry<R: Rng + ?Sized>(rng: &mut R) -> SeedEntry {
    let word_count = rng.random_range(1..=5);
    let words: Vec<&str> = (0..word_count)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect();

    SeedEntry {
        description: capitalize(&words.join(" ")),
        icon: TodoIcon::ALL.choose(rng).copied().unwrap_or_default(),
    }
}

/// Icon alpha in `[0.3, 0.9)`
pub fn random_tint<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(TINT_MIN..TINT_MAX)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_entry_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let entry = random_entry(&mut rng);
            let words = entry.description.split(' ').count();
            assert!((1..=5).contains(&words), "got {:?}", entry.description);
            assert!(entry.description.chars().next().is_some_and(|c| c.is_uppercase()));
            assert!(TodoIcon::ALL.contains(&entry.icon));
        }
    }

    #[test]
    fn test_random_tint_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let tint = random_tint(&mut rng);
            assert!((TINT_MIN..TINT_MAX).contains(&tint));
        }
    }

    #[test]
    fn test_same_seed_same_entries() {
        let a = random_entry(&mut StdRng::seed_from_u64(3));
        let b = random_entry(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("lorem ipsum"), "Lorem ipsum");
        assert_eq!(capitalize(""), "");
    }
}
