//! Random id generation.

use uuid::Uuid;

/// Produce a random six-digit id in `[100000, 999999]`.
///
/// Stateless, no persisted counter, and no uniqueness check against
/// existing records; collision avoidance is purely probabilistic within
/// the six-digit space.
pub fn random_user_id() -> u32 {
    let entropy = Uuid::new_v4().as_u128();
    100_000 + (entropy % 900_000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_stay_in_the_six_digit_range() {
        for _ in 0..10_000 {
            let id = random_user_id();
            assert!((100_000..=999_999).contains(&id), "out of range: {id}");
        }
    }

    #[test]
    fn ids_vary() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(random_user_id());
        }
        assert!(seen.len() > 1);
    }
}
