//! Free-text query parser

use crate::filter::{normalize, CropData, Demographics, Filter, Organization, Range};
use crate::vocabulary::{Category, Vocabulary};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;

static MORE_THAN_ACRES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"more than\s+(\d+(?:\.\d+)?)\s*acres?").expect("valid regex"));
static LESS_THAN_ACRES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"less than\s+(\d+(?:\.\d+)?)\s*acres?").expect("valid regex"));

const FEMALE_TERMS: [&str; 2] = ["female", "women"];
const MALE_TERMS: [&str; 2] = ["male", "men"];
const IRRIGATION_TERMS: [&str; 3] = ["irrigation", "irrigated", "water facility"];
const FPO_TERMS: [&str; 3] = ["fpo", "farmer producer organization", "association"];
const RELIGION_TERMS: [&str; 7] = ["hindu", "muslim", "christian", "sikh", "buddhist", "jain", "islam"];

/// Filter extracted from a query, paired with the text it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub filters: Filter,
    pub original_query: String,
}

impl ParseResult {
    /// Same result with the filter in canonical form
    pub fn normalized(self) -> ParseResult {
        ParseResult {
            filters: normalize(self.filters),
            original_query: self.original_query,
        }
    }
}

/// Vocabulary values paired with their lowercase match form
#[derive(Debug, Clone)]
struct Terms(Vec<(String, String)>);

impl Terms {
    fn new(values: &[String]) -> Self {
        Terms(values.iter().map(|v| (v.to_lowercase(), v.clone())).collect())
    }

    /// Every value contained in `text`, in vocabulary order
    fn all_in(&self, text: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(lower, _)| text.contains(lower.as_str()))
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// The last value contained in `text`
    fn last_in(&self, text: &str) -> Option<String> {
        self.0
            .iter()
            .rev()
            .find(|(lower, _)| text.contains(lower.as_str()))
            .map(|(_, value)| value.clone())
    }
}

/// Heuristic free-text parser
///
/// Matching is plain substring containment over the lowercased input, so a
/// vocabulary value inside a longer word still matches. Parsing is pure: the
/// same text and vocabulary always give the same filter.
#[derive(Debug, Clone)]
pub struct QueryParser {
    vocabulary: Arc<Vocabulary>,
    districts: Terms,
    states: Terms,
    crop_types: Terms,
    crops: Terms,
    fpo_names: Terms,
}

impl QueryParser {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self {
            districts: Terms::new(vocabulary.values(Category::District)),
            states: Terms::new(vocabulary.values(Category::State)),
            crop_types: Terms::new(vocabulary.values(Category::CropType)),
            crops: Terms::new(vocabulary.values(Category::Crop)),
            fpo_names: Terms::new(vocabulary.values(Category::FpoName)),
            vocabulary,
        }
    }

    /// Parser over the bundled sample vocabulary
    pub fn sample() -> Self {
        Self::new(Vocabulary::shared_sample())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parse free text into a filter
    ///
    /// Never fails. The returned filter always carries the demographics,
    /// crop data and organization sections, possibly empty; call
    /// [`ParseResult::normalized`] for the canonical form.
    pub fn parse(&self, text: &str) -> ParseResult {
        let query = text.to_lowercase();

        let demographics = Demographics {
            district: self.districts.all_in(&query),
            state: self.states.all_in(&query),
            gender: detect_gender(&query),
            religion: detect_religion(&query),
            marital_status: detect_marital_status(&query),
            ..Default::default()
        };

        let mut crop_data = CropData {
            crop_types: self.crop_types.all_in(&query),
            crops: self.crops.all_in(&query),
            land_owned: detect_land_owned(&query),
            ..Default::default()
        };
        if contains_any(&query, &IRRIGATION_TERMS) {
            crop_data.irrigation_facility = Some(true);
        }

        let mut organization = Organization::default();
        if contains_any(&query, &FPO_TERMS) {
            organization.associated_with_fpo = Some(true);
            organization.fpo_name = self.fpo_names.last_in(&query);
        }

        let filters = Filter {
            demographics: Some(demographics),
            crop_data: Some(crop_data),
            organization: Some(organization),
            source: None,
        };
        tracing::debug!("Parsed query {:?} into {} constraints", text, filters.active_count());

        ParseResult {
            filters,
            original_query: text.to_string(),
        }
    }
}

#[inline]
fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

/// Female terms first: "women" contains "men"
fn detect_gender(text: &str) -> Option<String> {
    if contains_any(text, &FEMALE_TERMS) {
        Some("Female".to_string())
    } else if contains_any(text, &MALE_TERMS) {
        Some("Male".to_string())
    } else {
        None
    }
}

/// Last religion term in list order wins; "islam" maps to Muslim
fn detect_religion(text: &str) -> Option<String> {
    RELIGION_TERMS
        .iter()
        .rev()
        .find(|term| text.contains(**term))
        .map(|term| match *term {
            "islam" => "Muslim".to_string(),
            other => capitalize(other),
        })
}

/// First branch wins: married, unmarried/single, widow, separated
fn detect_marital_status(text: &str) -> Option<String> {
    let status = if text.contains("married") {
        "Married"
    } else if text.contains("unmarried") || text.contains("single") {
        "Single"
    } else if text.contains("widow") {
        "Widow"
    } else if text.contains("separated") {
        "Separated"
    } else {
        return None;
    };
    Some(status.to_string())
}

fn detect_land_owned(text: &str) -> Option<Range<f64>> {
    let capture = |re: &Regex| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
    };
    let range = Range {
        min: capture(&MORE_THAN_ACRES),
        max: capture(&LESS_THAN_ACRES),
    };
    (!range.is_unbounded()).then_some(range)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
