//! Farmer record structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as recorded at ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Display label, also the value gender filters compare against
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single farmer as returned by the data source
///
/// Records are created by ingestion and never mutated while a search runs.
/// `crop_types` and `crops` keep their stored order and may hold duplicates;
/// matching treats them as sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerRecord {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub gender: Gender,
    pub age: u32,
    pub district: String,
    pub state: String,
    #[serde(default)]
    pub religion: String,
    #[serde(default)]
    pub caste_category: String,
    #[serde(default)]
    pub marital_status: String,
    /// Acres
    pub land_owned: f64,
    #[serde(default)]
    pub crop_types: Vec<String>,
    #[serde(default)]
    pub crops: Vec<String>,
    pub irrigation_facility: bool,
    pub associated_with_fpo: bool,
    /// Only present when `associated_with_fpo` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fpo_name: Option<String>,
    pub source: String,
}

impl FarmerRecord {
    /// Check whether the record grows any crop type from `types`
    #[inline]
    pub fn grows_any_type(&self, types: &[String]) -> bool {
        self.crop_types.iter().any(|t| types.contains(t))
    }

    /// Check whether the record grows any crop from `crops`
    #[inline]
    pub fn grows_any_crop(&self, crops: &[String]) -> bool {
        self.crops.iter().any(|c| crops.contains(c))
    }
}
