use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{InterestProfile, SubscriptionRecord, WatchlistItem},
};

use super::UserDataStore;

#[derive(Debug, Default)]
struct UserData {
    subscriptions: Vec<SubscriptionRecord>,
    interests: Option<InterestProfile>,
    watchlist: Vec<WatchlistItem>,
}

/// Process-local store; contents are lost on restart
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<Uuid, UserData>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserDataStore for InMemoryStore {
    async fn subscriptions(&self, user_id: Uuid) -> AppResult<Vec<SubscriptionRecord>> {
        let users = self.users.read().await;
        Ok(users
            .get(&user_id)
            .map(|data| data.subscriptions.clone())
            .unwrap_or_default())
    }

    async fn add_subscription(
        &self,
        user_id: Uuid,
        record: SubscriptionRecord,
    ) -> AppResult<SubscriptionRecord> {
        let mut users = self.users.write().await;
        let data = users.entry(user_id).or_default();

        if data.subscriptions.iter().any(|s| s.name == record.name) {
            return Err(AppError::Conflict(format!(
                "Already subscribed to {}",
                record.name
            )));
        }

        data.subscriptions.push(record.clone());
        Ok(record)
    }

    async fn remove_subscription(&self, user_id: Uuid, name: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        let data = users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("Subscription {} not found", name)))?;

        let before = data.subscriptions.len();
        data.subscriptions.retain(|s| s.name != name);
        if data.subscriptions.len() == before {
            return Err(AppError::NotFound(format!("Subscription {} not found", name)));
        }
        Ok(())
    }

    async fn interests(&self, user_id: Uuid) -> AppResult<Option<InterestProfile>> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).and_then(|data| data.interests.clone()))
    }

    async fn set_interests(
        &self,
        user_id: Uuid,
        profile: InterestProfile,
    ) -> AppResult<InterestProfile> {
        let mut users = self.users.write().await;
        users.entry(user_id).or_default().interests = Some(profile.clone());
        Ok(profile)
    }

    async fn watchlist(&self, user_id: Uuid) -> AppResult<Vec<WatchlistItem>> {
        let users = self.users.read().await;
        Ok(users
            .get(&user_id)
            .map(|data| data.watchlist.clone())
            .unwrap_or_default())
    }

    async fn add_watchlist_item(
        &self,
        user_id: Uuid,
        item: WatchlistItem,
    ) -> AppResult<WatchlistItem> {
        let mut users = self.users.write().await;
        let data = users.entry(user_id).or_default();

        if data.watchlist.iter().any(|w| w.title == item.title) {
            return Err(AppError::Conflict(format!(
                "{} is already on the watchlist",
                item.title
            )));
        }

        data.watchlist.push(item.clone());
        Ok(item)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
