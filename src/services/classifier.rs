use crate::models::{Savings, ScoredSubscription};

use super::money::percentage_of;

/// Upper bound on how many subscriptions the cheapest fallback keeps
pub const FALLBACK_KEEP_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Cancel,
}

/// Keep/cancel outcome for one subscription
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub name: String,
    pub cost: f64,
    pub verdict: Verdict,
    pub reason: String,
    /// Kept only because nothing scored above zero
    pub fallback: bool,
}

impl Decision {
    /// Display line, e.g. "Netflix ($15.49/month) - 2 items in your watchlist"
    pub fn summary(&self) -> String {
        format!("{} (${:.2}/month) - {}", self.name, self.cost, self.reason)
    }
}

/// Decisions for every valid subscription, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub decisions: Vec<Decision>,
    pub fallback_applied: bool,
}

impl Classification {
    pub fn kept(&self) -> impl Iterator<Item = &Decision> {
        self.decisions.iter().filter(|d| d.verdict == Verdict::Keep)
    }

    pub fn cancelled(&self) -> impl Iterator<Item = &Decision> {
        self.decisions.iter().filter(|d| d.verdict == Verdict::Cancel)
    }

    /// The keep decision for `name`, if it was kept
    pub fn kept_decision(&self, name: &str) -> Option<&Decision> {
        self.kept().find(|d| d.name == name)
    }

    pub fn keep_summaries(&self) -> Vec<String> {
        self.kept().map(Decision::summary).collect()
    }

    pub fn cancel_summaries(&self) -> Vec<String> {
        self.cancelled().map(Decision::summary).collect()
    }

    /// Monthly amount freed by the cancel set, relative to `actual_spending`
    pub fn savings(&self, actual_spending: f64) -> Savings {
        let amount: f64 = self.cancelled().map(|d| d.cost).sum();
        Savings {
            amount,
            percentage: percentage_of(amount, actual_spending),
        }
    }
}

fn keep_reason(sub: &ScoredSubscription) -> String {
    match (sub.watchlist_count, sub.genre_match_count) {
        (w, g) if w > 0 && g > 0 => format!("{} watchlist items + matches your preferences", w),
        (w, _) if w > 0 => format!("{} items in your watchlist", w),
        (_, g) if g > 0 => format!("Matches your interests ({} relevant items)", g),
        _ => "Aligns with your viewing preferences".to_string(),
    }
}

const CANCEL_REASON: &str = "No current watchlist content - consider rotating when needed";
const FALLBACK_REASON: &str = "Lowest-cost service, kept so you retain some access";

/// How many of the cheapest subscriptions the fallback keeps
///
/// One or two, but never every subscription when there is more than one.
fn fallback_keep_count(total: usize) -> usize {
    FALLBACK_KEEP_LIMIT.min(total.saturating_sub(1)).max(1)
}

/// Splits subscriptions into keep and cancel by classification score
///
/// A subscription is kept when its classification score is positive. When no
/// subscription scores above zero, the cheapest one or two are kept instead so
/// the user is never told to cancel everything.
pub fn classify(scored: &[ScoredSubscription]) -> Classification {
    let mut decisions: Vec<Decision> = scored
        .iter()
        .map(|sub| {
            let keep = sub.classification_score > 0;
            Decision {
                name: sub.name.clone(),
                cost: sub.cost,
                verdict: if keep { Verdict::Keep } else { Verdict::Cancel },
                reason: if keep {
                    keep_reason(sub)
                } else {
                    CANCEL_REASON.to_string()
                },
                fallback: false,
            }
        })
        .collect();

    let fallback_applied = !decisions.is_empty() && decisions.iter().all(|d| d.verdict == Verdict::Cancel);

    if fallback_applied {
        let mut by_cost: Vec<usize> = (0..decisions.len()).collect();
        by_cost.sort_by(|&a, &b| {
            decisions[a]
                .cost
                .total_cmp(&decisions[b].cost)
                .then_with(|| decisions[a].name.cmp(&decisions[b].name))
        });

        for idx in by_cost.into_iter().take(fallback_keep_count(decisions.len())) {
            let decision = &mut decisions[idx];
            decision.verdict = Verdict::Keep;
            decision.reason = FALLBACK_REASON.to_string();
            decision.fallback = true;
        }
    }

    Classification {
        decisions,
        fallback_applied,
    }
}
