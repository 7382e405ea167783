use crate::models::{InterestProfile, UsageStat, ValidSubscription, WatchlistItem};

/// Computes usage signals for each subscription, in input order
///
/// A watchlist item counts toward a subscription when its platform equals the
/// subscription name exactly. The genre signal is a proxy: it repeats the
/// platform count when the user has declared any genre, and is zero otherwise.
/// Per-item genres are not inspected.
pub fn analyze_usage(
    subscriptions: &[ValidSubscription],
    watchlist: &[WatchlistItem],
    interests: Option<&InterestProfile>,
) -> Vec<UsageStat> {
    let genres_declared = interests.is_some_and(InterestProfile::has_genres);

    subscriptions
        .iter()
        .map(|sub| {
            let watchlist_count = watchlist.iter().filter(|item| item.is_on(&sub.name)).count();
            UsageStat {
                watchlist_count,
                genre_match_count: if genres_declared { watchlist_count } else { 0 },
            }
        })
        .collect()
}
