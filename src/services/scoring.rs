use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{ScoredSubscription, UsageStat, ValidSubscription};

/// Per-signal weights for one scoring profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreWeights {
    pub watchlist: u64,
    pub genre: u64,
}

impl ScoreWeights {
    /// Weights behind the keep/cancel decision
    pub const CLASSIFICATION: Self = Self {
        watchlist: 3,
        genre: 1,
    };

    /// Weights behind the rotation ranking
    pub const ROTATION: Self = Self {
        watchlist: 10,
        genre: 5,
    };

    pub fn score(&self, usage: UsageStat) -> u64 {
        usage.watchlist_count as u64 * self.watchlist + usage.genre_match_count as u64 * self.genre
    }
}

/// Attaches both scores to each subscription
///
/// `usage` must line up with `subscriptions` (as returned by `analyze_usage`).
pub fn score_subscriptions(
    subscriptions: &[ValidSubscription],
    usage: &[UsageStat],
    classification: ScoreWeights,
    rotation: ScoreWeights,
) -> Vec<ScoredSubscription> {
    subscriptions
        .iter()
        .zip(usage.iter().copied())
        .map(|(sub, usage)| ScoredSubscription {
            name: sub.name.clone(),
            cost: sub.cost,
            watchlist_count: usage.watchlist_count,
            genre_match_count: usage.genre_match_count,
            classification_score: classification.score(usage),
            rotation_score: rotation.score(usage),
        })
        .collect()
}

/// Rotation ranking: higher rotation score first, then cheaper, then by name
pub fn rotation_order(a: &ScoredSubscription, b: &ScoredSubscription) -> Ordering {
    b.rotation_score
        .cmp(&a.rotation_score)
        .then_with(|| a.cost.total_cmp(&b.cost))
        .then_with(|| a.name.cmp(&b.name))
}

/// Returns a copy of `scored` sorted by [`rotation_order`]
pub fn rank_for_rotation(scored: &[ScoredSubscription]) -> Vec<ScoredSubscription> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(rotation_order);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubscriptionRecord;

    fn usage(watchlist_count: usize, genre_match_count: usize) -> UsageStat {
        UsageStat {
            watchlist_count,
            genre_match_count,
        }
    }

    fn scored(name: &str, cost: f64, rotation_score: u64) -> ScoredSubscription {
        ScoredSubscription {
            name: name.to_string(),
            cost,
            watchlist_count: 0,
            genre_match_count: 0,
            classification_score: 0,
            rotation_score,
        }
    }

    #[test]
    fn test_profiles_weight_signals_differently() {
        let stat = usage(2, 1);
        assert_eq!(ScoreWeights::CLASSIFICATION.score(stat), 7);
        assert_eq!(ScoreWeights::ROTATION.score(stat), 25);
    }

    #[test]
    fn test_no_signal_scores_zero() {
        assert_eq!(ScoreWeights::CLASSIFICATION.score(UsageStat::default()), 0);
        assert_eq!(ScoreWeights::ROTATION.score(UsageStat::default()), 0);
    }

    #[test]
    fn test_score_subscriptions_keeps_input_order() {
        let subs: Vec<ValidSubscription> = [("Netflix", 15.49), ("HBO Max", 15.99)]
            .iter()
            .map(|(name, cost)| ValidSubscription::try_from(&SubscriptionRecord::new(*name, *cost)).unwrap())
            .collect();
        let stats = vec![usage(2, 0), usage(0, 0)];

        let result = score_subscriptions(
            &subs,
            &stats,
            ScoreWeights::CLASSIFICATION,
            ScoreWeights::ROTATION,
        );

        assert_eq!(result[0].name, "Netflix");
        assert_eq!(result[0].classification_score, 6);
        assert_eq!(result[0].rotation_score, 20);
        assert_eq!(result[1].classification_score, 0);
        assert_eq!(result[1].rotation_score, 0);
    }

    #[test]
    fn test_rank_breaks_ties_by_cost_then_name() {
        let ranked = rank_for_rotation(&[
            scored("Peacock", 5.99, 0),
            scored("Paramount+", 5.99, 0),
            scored("Hulu", 7.99, 10),
            scored("Apple TV+", 6.99, 0),
        ]);

        let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Hulu", "Paramount+", "Peacock", "Apple TV+"]);
    }
}
