//! Vocabulary categories

use crate::error::FarmerSearchError;
use std::fmt;
use std::str::FromStr;

/// A category of known values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    District,
    State,
    Religion,
    CasteCategory,
    MaritalStatus,
    CropType,
    Crop,
    FpoName,
    Source,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::District,
        Category::State,
        Category::Religion,
        Category::CasteCategory,
        Category::MaritalStatus,
        Category::CropType,
        Category::Crop,
        Category::FpoName,
        Category::Source,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::District => "district",
            Category::State => "state",
            Category::Religion => "religion",
            Category::CasteCategory => "caste_category",
            Category::MaritalStatus => "marital_status",
            Category::CropType => "crop_type",
            Category::Crop => "crop",
            Category::FpoName => "fpo_name",
            Category::Source => "source",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FarmerSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FarmerSearchError::UnknownCategory(s.to_string()))
    }
}
