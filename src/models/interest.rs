use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which kind of content the user prefers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PreferredContentType {
    Movies,
    TvShows,
    #[default]
    Both,
}

/// A user's declared interests (at most one per user)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InterestProfile {
    /// Favorite genres (e.g., "Drama", "Sci-Fi")
    #[serde(default)]
    pub genres: BTreeSet<String>,
    #[serde(default)]
    pub preferred_content_type: PreferredContentType,
}

impl InterestProfile {
    /// Creates a profile with the given genres
    pub fn with_genres<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
            preferred_content_type: PreferredContentType::Both,
        }
    }

    /// Whether the user has declared any genre interest at all
    pub fn has_genres(&self) -> bool {
        !self.genres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_has_no_genres() {
        let profile = InterestProfile::default();
        assert!(!profile.has_genres());
        assert_eq!(profile.preferred_content_type, PreferredContentType::Both);
    }

    #[test]
    fn test_duplicate_genres_collapse() {
        let profile = InterestProfile::with_genres(["Drama", "Drama", "Comedy"]);
        assert_eq!(profile.genres.len(), 2);
        assert!(profile.has_genres());
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let profile: InterestProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.genres.is_empty());
    }
}
