//! Vocabulary configuration structures

use crate::vocabulary::Category;
use serde::Deserialize;

/// Explicit value lists, one per vocabulary category
///
/// Lets a deployment fix the match vocabulary instead of deriving it from
/// whatever records happen to be loaded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub district: Vec<String>,
    #[serde(default)]
    pub state: Vec<String>,
    #[serde(default)]
    pub religion: Vec<String>,
    #[serde(default)]
    pub caste_category: Vec<String>,
    #[serde(default)]
    pub marital_status: Vec<String>,
    #[serde(default)]
    pub crop_type: Vec<String>,
    #[serde(default)]
    pub crop: Vec<String>,
    #[serde(default)]
    pub fpo_name: Vec<String>,
    #[serde(default)]
    pub source: Vec<String>,
}

impl VocabularyConfig {
    pub fn values(&self, category: Category) -> &[String] {
        match category {
            Category::District => &self.district,
            Category::State => &self.state,
            Category::Religion => &self.religion,
            Category::CasteCategory => &self.caste_category,
            Category::MaritalStatus => &self.marital_status,
            Category::CropType => &self.crop_type,
            Category::Crop => &self.crop,
            Category::FpoName => &self.fpo_name,
            Category::Source => &self.source,
        }
    }
}
