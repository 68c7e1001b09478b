// Configuration Storage Service
// Handles config file read/write and version backup

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::services::query_normalizer::{QueryFilters, DEFAULT_LANGUAGE, MAX_RESULTS};
use crate::services::sentiment::SentimentError;

pub const DEFAULT_SEARCH_URL: &str = "https://api.twitter.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            search: SearchConfig::default(),
            analysis: AnalysisConfig::default(),
            bearer_token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    #[serde(default = "default_search_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_true")]
    pub exclude_retweets: bool,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_url(),
            language: default_language(),
            exclude_retweets: true,
            max_results: default_max_results(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SearchConfig {
    pub fn query_filters(&self) -> QueryFilters {
        QueryFilters {
            language: self.language.clone(),
            exclude_retweets: self.exclude_retweets,
        }
    }
}

/// Classifier thresholds and display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,
    #[serde(default = "default_sample_size")]
    pub sample_size_per_label: usize,
    /// Display-only; stored posts keep their full text.
    #[serde(default = "default_truncate_length")]
    pub truncate_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.1,
            negative_threshold: -0.1,
            sample_size_per_label: 3,
            truncate_length: 200,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), SentimentError> {
        if !self.positive_threshold.is_finite() || !self.negative_threshold.is_finite() {
            return Err(SentimentError::InvalidConfig(
                "thresholds must be finite numbers".to_string(),
            ));
        }
        if self.positive_threshold < self.negative_threshold {
            return Err(SentimentError::InvalidConfig(format!(
                "positiveThreshold ({}) must not be below negativeThreshold ({})",
                self.positive_threshold, self.negative_threshold
            )));
        }
        Ok(())
    }
}

fn default_version() -> String { env!("CARGO_PKG_VERSION").to_string() }
fn default_search_url() -> String { DEFAULT_SEARCH_URL.to_string() }
fn default_language() -> String { DEFAULT_LANGUAGE.to_string() }
fn default_true() -> bool { true }
fn default_max_results() -> u32 { MAX_RESULTS }
fn default_timeout_secs() -> u64 { 30 }
fn default_positive_threshold() -> f64 { 0.1 }
fn default_negative_threshold() -> f64 { -0.1 }
fn default_sample_size() -> usize { 3 }
fn default_truncate_length() -> usize { 200 }

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("config.json");
        Self { config_dir, config_file }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tweetpulse"))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> Result<(), String> {
        fs::create_dir_all(&self.config_dir)
            .map_err(|e| format!("Failed to create config dir: {}", e))
    }

    /// Load configuration from file, falling back to defaults when absent
    pub fn load(&self) -> Result<AppConfig, String> {
        if !self.config_file.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_file)
            .map_err(|e| format!("Failed to read config: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;

        config.analysis.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig) -> Result<(), String> {
        config.analysis.validate().map_err(|e| e.to_string())?;
        self.ensure_dir()?;

        // Create backup if file exists
        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(&self.config_file, content)
            .map_err(|e| format!("Failed to write config: {}", e))
    }

    /// Create a backup of current config
    fn create_backup(&self) -> Result<(), String> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir)
            .map_err(|e| format!("Failed to create backup dir: {}", e))?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%.3f");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));

        fs::copy(&self.config_file, &backup_file)
            .map_err(|e| format!("Failed to create backup: {}", e))?;

        // Keep only last 10 backups
        self.cleanup_old_backups(&backup_dir, 10)?;

        Ok(())
    }

    /// Remove old backups, keeping only the most recent N
    fn cleanup_old_backups(&self, backup_dir: &Path, keep: usize) -> Result<(), String> {
        let mut entries: Vec<_> = fs::read_dir(backup_dir)
            .map_err(|e| format!("Failed to read backup dir: {}", e))?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
            .collect();

        if entries.len() <= keep {
            return Ok(());
        }

        // Sort by modification time (oldest first)
        entries.sort_by_key(|e| {
            e.metadata()
                .and_then(|m| m.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
        });

        for entry in entries.iter().take(entries.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }

        Ok(())
    }

    /// Get the stored search API bearer token
    pub fn get_bearer_token(&self) -> Result<Option<String>, String> {
        let config = self.load()?;
        Ok(config
            .bearer_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()))
    }

    /// Store the search API bearer token
    pub fn set_bearer_token(&self, token: &str) -> Result<(), String> {
        let mut config = self.load()?;
        config.bearer_token = Some(token.trim().to_string());
        self.save(&config)
    }

    /// Remove the stored bearer token
    pub fn delete_bearer_token(&self) -> Result<(), String> {
        let mut config = self.load()?;
        config.bearer_token = None;
        self.save(&config)
    }
}
