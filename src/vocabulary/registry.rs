//! Vocabulary registry built from a corpus or from configuration

use crate::config::VocabularyConfig;
use crate::records::{sample_farmers, FarmerRecord, Gender};
use crate::vocabulary::Category;
use ahash::AHashSet;
use once_cell::sync::Lazy;
use std::sync::Arc;

static SAMPLE_VOCABULARY: Lazy<Arc<Vocabulary>> =
    Lazy::new(|| Arc::new(Vocabulary::from_records(sample_farmers())));

/// Deduplicated value lists, one per [`Category`]
///
/// Lists keep first-seen order. The registry is read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    lists: [Vec<String>; 9],
}

/// Order-preserving dedup collector
#[derive(Default)]
struct ValueList {
    seen: AHashSet<String>,
    values: Vec<String>,
}

impl ValueList {
    fn push(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        if self.seen.insert(value.to_string()) {
            self.values.push(value.to_string());
        }
    }
}

impl Vocabulary {
    /// Collect the distinct values present in `records`
    pub fn from_records(records: &[FarmerRecord]) -> Self {
        let mut lists: [ValueList; 9] = Default::default();

        for record in records {
            lists[Category::District.index()].push(&record.district);
            lists[Category::State.index()].push(&record.state);
            lists[Category::Religion.index()].push(&record.religion);
            lists[Category::CasteCategory.index()].push(&record.caste_category);
            lists[Category::MaritalStatus.index()].push(&record.marital_status);
            for crop_type in &record.crop_types {
                lists[Category::CropType.index()].push(crop_type);
            }
            for crop in &record.crops {
                lists[Category::Crop.index()].push(crop);
            }
            if let Some(fpo) = &record.fpo_name {
                lists[Category::FpoName.index()].push(fpo);
            }
            lists[Category::Source.index()].push(&record.source);
        }

        let vocabulary = Self {
            lists: lists.map(|l| l.values),
        };
        tracing::debug!(
            "Built vocabulary from {} records: {} districts, {} crops",
            records.len(),
            vocabulary.values(Category::District).len(),
            vocabulary.values(Category::Crop).len()
        );
        vocabulary
    }

    /// Build a registry from explicitly configured lists, independent of any corpus
    pub fn from_config(config: &VocabularyConfig) -> Self {
        let mut lists: [ValueList; 9] = Default::default();
        for category in Category::ALL {
            for value in config.values(category) {
                lists[category.index()].push(value);
            }
        }
        Self {
            lists: lists.map(|l| l.values),
        }
    }

    /// Vocabulary of the bundled sample corpus
    pub fn sample() -> &'static Vocabulary {
        &SAMPLE_VOCABULARY
    }

    /// Shared handle to the sample vocabulary, built once per process
    pub fn shared_sample() -> Arc<Vocabulary> {
        Arc::clone(&SAMPLE_VOCABULARY)
    }

    /// Known values for `category`, in first-seen order
    #[inline]
    pub fn values(&self, category: Category) -> &[String] {
        &self.lists[category.index()]
    }

    /// Known values for `category`, sorted for display in choice lists
    pub fn sorted_values(&self, category: Category) -> Vec<String> {
        let mut values = self.values(category).to_vec();
        values.sort();
        values
    }

    /// Fixed gender choices, not derived from the corpus
    pub fn gender_options() -> [Gender; 3] {
        Gender::ALL
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }
}
