use serde::{Deserialize, Serialize};

/// Type of content
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Movie,
    #[default]
    TvShow,
}

/// Where the user is with a watchlist entry
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    #[default]
    WantToWatch,
    CurrentlyWatching,
    Completed,
}

/// A title the user wants to watch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistItem {
    pub title: String,
    /// Platform the title streams on; `None` when unknown
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub status: WatchStatus,
}

impl WatchlistItem {
    pub fn new(title: impl Into<String>, platform: Option<&str>) -> Self {
        Self {
            title: title.into(),
            platform: platform.map(str::to_string),
            content_type: ContentType::TvShow,
            status: WatchStatus::WantToWatch,
        }
    }

    /// Platform name if one is set and non-blank
    ///
    /// Items without a platform cannot be attributed to any subscription.
    pub fn platform(&self) -> Option<&str> {
        self.platform
            .as_deref()
            .filter(|platform| !platform.trim().is_empty())
    }

    /// Exact, case-sensitive match against a subscription name
    pub fn is_on(&self, service_name: &str) -> bool {
        self.platform() == Some(service_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_match_is_case_sensitive() {
        let item = WatchlistItem::new("Stranger Things", Some("Netflix"));
        assert!(item.is_on("Netflix"));
        assert!(!item.is_on("netflix"));
    }

    #[test]
    fn test_blank_platform_treated_as_missing() {
        let item = WatchlistItem::new("Mystery Title", Some("  "));
        assert_eq!(item.platform(), None);
        assert!(!item.is_on("  "));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&WatchStatus::CurrentlyWatching).unwrap();
        assert_eq!(json, "\"currently_watching\"");
    }
}
