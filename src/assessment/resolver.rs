use super::domain::{Dosha, ScoreVector};

/// Pick the dominant dosha.
///
/// Ties, including the all-zero vector, go to the axis declared first in
/// [`Dosha::ALL`], so an empty assessment resolves to Vata.
pub fn resolve(scores: &ScoreVector) -> Dosha {
    let mut dominant = Dosha::ALL[0];
    let mut best = scores.get(dominant);

    for (dosha, score) in scores.entries().skip(1) {
        if score > best {
            dominant = dosha;
            best = score;
        }
    }

    dominant
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_maximum_wins() {
        assert_eq!(resolve(&ScoreVector::new(1, 5, 2)), Dosha::Pitta);
        assert_eq!(resolve(&ScoreVector::new(0, 0, 1)), Dosha::Kapha);
    }

    #[test]
    fn ties_prefer_declaration_order() {
        assert_eq!(resolve(&ScoreVector::new(0, 4, 4)), Dosha::Pitta);
        assert_eq!(resolve(&ScoreVector::new(4, 0, 4)), Dosha::Vata);
        assert_eq!(resolve(&ScoreVector::new(3, 3, 3)), Dosha::Vata);
    }

    #[test]
    fn all_zero_resolves_to_vata() {
        assert_eq!(resolve(&ScoreVector::zero()), Dosha::Vata);
    }
}
