use serde::Deserialize;

use crate::services::{OptimizerSettings, ScoreWeights};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Keep/cancel weight per watchlist item
    #[serde(default = "default_classification_watchlist_weight")]
    pub classification_watchlist_weight: u64,

    /// Keep/cancel weight per genre match
    #[serde(default = "default_classification_genre_weight")]
    pub classification_genre_weight: u64,

    /// Rotation ranking weight per watchlist item
    #[serde(default = "default_rotation_watchlist_weight")]
    pub rotation_watchlist_weight: u64,

    /// Rotation ranking weight per genre match
    #[serde(default = "default_rotation_genre_weight")]
    pub rotation_genre_weight: u64,

    /// Share of current spend the rotation plan targets
    #[serde(default = "default_target_budget_ratio")]
    pub target_budget_ratio: f64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_classification_watchlist_weight() -> u64 {
    ScoreWeights::CLASSIFICATION.watchlist
}

fn default_classification_genre_weight() -> u64 {
    ScoreWeights::CLASSIFICATION.genre
}

fn default_rotation_watchlist_weight() -> u64 {
    ScoreWeights::ROTATION.watchlist
}

fn default_rotation_genre_weight() -> u64 {
    ScoreWeights::ROTATION.genre
}

fn default_target_budget_ratio() -> f64 {
    crate::services::budget::TARGET_BUDGET_RATIO
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Optimizer policy described by this configuration
    pub fn optimizer_settings(&self) -> OptimizerSettings {
        OptimizerSettings {
            classification_weights: ScoreWeights {
                watchlist: self.classification_watchlist_weight,
                genre: self.classification_genre_weight,
            },
            rotation_weights: ScoreWeights {
                watchlist: self.rotation_watchlist_weight,
                genre: self.rotation_genre_weight,
            },
            target_budget_ratio: self.target_budget_ratio,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
