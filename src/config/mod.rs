//! Configuration module for the search engine
//!
//! This module handles deserialization of engine configuration from JSON.

mod vocabulary;

pub use vocabulary::*;

use crate::error::{FarmerSearchError, Result};
use crate::records::FarmerRecord;
use crate::vocabulary::Vocabulary;
use serde::Deserialize;
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Results per page for search sessions
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Remote table holding farmer rows
    #[serde(default = "default_table")]
    pub table: String,
    /// Fixed match vocabulary; derived from the corpus when absent
    #[serde(default)]
    pub vocabulary: Option<VocabularyConfig>,
}

fn default_page_size() -> usize {
    5
}

fn default_table() -> String {
    "farmers".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            table: default_table(),
            vocabulary: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(FarmerSearchError::InvalidConfig(
                "page_size must be greater than 0".to_string(),
            ));
        }
        if self.table.trim().is_empty() {
            return Err(FarmerSearchError::InvalidConfig(
                "table must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the match vocabulary: the configured lists if any, else the corpus
    pub fn build_vocabulary(&self, corpus: &[FarmerRecord]) -> Vocabulary {
        match &self.vocabulary {
            Some(config) => Vocabulary::from_config(config),
            None => Vocabulary::from_records(corpus),
        }
    }
}
