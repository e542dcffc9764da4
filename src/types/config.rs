//! Configuration for seqsim.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::alignment::GapPenalty;
use crate::SeqsimResult;

/// Main configuration for seqsim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Substitution matrix and gap settings.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Built-in substitution matrices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatrixKind {
    /// BLOSUM62 over amino acids.
    Blosum62,
    /// Uniform match/mismatch scores over `alphabet`.
    MatchMismatch,
}

/// Scoring settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Substitution matrix.
    #[serde(default = "default_matrix")]
    pub matrix: MatrixKind,

    /// Match score (match_mismatch only).
    #[serde(default = "default_match_score")]
    pub match_score: f64,

    /// Mismatch score (match_mismatch only).
    #[serde(default = "default_mismatch_score")]
    pub mismatch_score: f64,

    /// Symbols covered by the match_mismatch matrix.
    #[serde(default = "default_alphabet")]
    pub alphabet: String,

    /// Score for symbol pairs outside the matrix. Unset means such pairs are an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<f64>,

    /// Gap penalty model.
    #[serde(default)]
    pub gap: GapPenalty,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            matrix: default_matrix(),
            match_score: default_match_score(),
            mismatch_score: default_mismatch_score(),
            alphabet: default_alphabet(),
            fallback: None,
            gap: GapPenalty::default(),
        }
    }
}

fn default_matrix() -> MatrixKind {
    MatrixKind::Blosum62
}

fn default_match_score() -> f64 {
    2.0
}

fn default_mismatch_score() -> f64 {
    -1.0
}

fn default_alphabet() -> String {
    "ACGT".to_string()
}

/// LRU cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum cache capacity (number of sequence pairs).
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
        }
    }
}

fn default_cache_capacity() -> usize {
    65_536
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> SeqsimResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> SeqsimResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            scoring: ScoringConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
