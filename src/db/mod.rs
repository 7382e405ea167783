//! User data the optimizer reads: subscriptions, interests and watchlist.
//!
//! The optimizer never touches the store; handlers load a snapshot first and
//! pass it in, so store failures surface before any computation starts.
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{InterestProfile, SubscriptionRecord, WatchlistItem},
};

pub mod memory;

pub use memory::InMemoryStore;

/// Trait for user data stores
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UserDataStore: Send + Sync {
    /// All subscription records for the user, in insertion order
    async fn subscriptions(&self, user_id: Uuid) -> AppResult<Vec<SubscriptionRecord>>;

    /// Adds a subscription; one per service name per user
    async fn add_subscription(
        &self,
        user_id: Uuid,
        record: SubscriptionRecord,
    ) -> AppResult<SubscriptionRecord>;

    /// Removes the subscription to the named service
    async fn remove_subscription(&self, user_id: Uuid, name: &str) -> AppResult<()>;

    /// The user's interest profile, if one was saved
    async fn interests(&self, user_id: Uuid) -> AppResult<Option<InterestProfile>>;

    /// Replaces the user's interest profile
    async fn set_interests(
        &self,
        user_id: Uuid,
        profile: InterestProfile,
    ) -> AppResult<InterestProfile>;

    /// All watchlist items for the user, in insertion order
    async fn watchlist(&self, user_id: Uuid) -> AppResult<Vec<WatchlistItem>>;

    /// Adds a watchlist item; titles are unique per user
    async fn add_watchlist_item(&self, user_id: Uuid, item: WatchlistItem)
        -> AppResult<WatchlistItem>;

    /// Store name for logging and debugging
    fn name(&self) -> &'static str;
}
