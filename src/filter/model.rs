//! Filter data structures

use serde::{Deserialize, Serialize};

/// Inclusive numeric range; an absent bound is unconstrained
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Inclusive on both ends
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Who the farmer is and where they live
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub district: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub state: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caste_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Range<u32>>,
}

/// What the farmer grows and on how much land
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CropData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crop_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crops: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrigation_facility: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_owned: Option<Range<f64>>,
}

/// Farmer producer organization membership
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_with_fpo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fpo_name: Option<String>,
}

/// Where the record came from
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Structured filter over farmer records
///
/// Every leaf is optional and an unset leaf imposes no constraint. Empty
/// lists, empty strings and unbounded ranges count as unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_data: Option<CropData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceFilter>,
}

/// A filter section that can be counted and pruned
pub trait Section: Sized {
    /// Number of set leaves; a range counts once
    fn active_count(&self) -> usize;

    /// Drop unset leaves, and the section itself when nothing is left
    fn prune(self) -> Option<Self>;
}

/// A string leaf is set only when non-empty
#[inline]
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// A range leaf is set only when at least one bound is
#[inline]
pub(crate) fn bounded<T: PartialOrd + Copy>(value: &Option<Range<T>>) -> Option<&Range<T>> {
    value.as_ref().filter(|r| !r.is_unbounded())
}

impl Filter {
    /// Parse a filter from its JSON form
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of active leaves across all sections
    pub fn active_count(&self) -> usize {
        self.demographics.as_ref().map_or(0, Section::active_count)
            + self.crop_data.as_ref().map_or(0, Section::active_count)
            + self.organization.as_ref().map_or(0, Section::active_count)
            + self.source.as_ref().map_or(0, Section::active_count)
    }

    /// True when the filter constrains nothing
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

impl Section for Demographics {
    fn active_count(&self) -> usize {
        [
            !self.district.is_empty(),
            !self.state.is_empty(),
            present(&self.gender).is_some(),
            present(&self.religion).is_some(),
            present(&self.caste_category).is_some(),
            present(&self.marital_status).is_some(),
            bounded(&self.age).is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    fn prune(mut self) -> Option<Self> {
        prune_str(&mut self.gender);
        prune_str(&mut self.religion);
        prune_str(&mut self.caste_category);
        prune_str(&mut self.marital_status);
        prune_range(&mut self.age);
        (self.active_count() > 0).then_some(self)
    }
}

impl Section for CropData {
    fn active_count(&self) -> usize {
        [
            !self.crop_types.is_empty(),
            !self.crops.is_empty(),
            self.irrigation_facility.is_some(),
            bounded(&self.land_owned).is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    fn prune(mut self) -> Option<Self> {
        prune_range(&mut self.land_owned);
        (self.active_count() > 0).then_some(self)
    }
}

impl Section for Organization {
    fn active_count(&self) -> usize {
        usize::from(self.associated_with_fpo.is_some()) + usize::from(present(&self.fpo_name).is_some())
    }

    fn prune(mut self) -> Option<Self> {
        prune_str(&mut self.fpo_name);
        (self.active_count() > 0).then_some(self)
    }
}

impl Section for SourceFilter {
    fn active_count(&self) -> usize {
        usize::from(present(&self.name).is_some())
    }

    fn prune(mut self) -> Option<Self> {
        prune_str(&mut self.name);
        (self.active_count() > 0).then_some(self)
    }
}

fn prune_str(value: &mut Option<String>) {
    if present(value).is_none() {
        *value = None;
    }
}

fn prune_range<T: PartialOrd + Copy>(value: &mut Option<Range<T>>) {
    if bounded(value).is_none() {
        *value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_inclusive() {
        let range = Range::new(18u32, 100);
        assert!(range.contains(18));
        assert!(range.contains(100));
        assert!(!range.contains(17));
        assert!(!range.contains(101));
    }

    #[test]
    fn test_half_open_ranges() {
        assert!(Range::at_least(5.0).contains(5.0));
        assert!(!Range::at_least(5.0).contains(4.9));
        assert!(Range::at_most(10.0).contains(0.0));
        assert!(Range::<f64>::default().is_unbounded());
    }

    #[test]
    fn test_active_count() {
        let filter = Filter {
            demographics: Some(Demographics {
                district: vec!["Nagpur".into()],
                gender: Some(String::new()),
                age: Some(Range::at_least(18)),
                ..Default::default()
            }),
            crop_data: Some(CropData {
                irrigation_facility: Some(false),
                land_owned: Some(Range::default()),
                ..Default::default()
            }),
            organization: None,
            source: Some(SourceFilter {
                name: Some("KVK Survey".into()),
            }),
        };
        assert_eq!(filter.active_count(), 4);
        assert!(!filter.is_empty());
        assert!(Filter::default().is_empty());
    }

    #[test]
    fn test_json_shape_omits_unset_fields() {
        let filter = Filter {
            crop_data: Some(CropData {
                land_owned: Some(Range::at_least(5.0)),
                ..Default::default()
            }),
            ..Default::default()
        };
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, r#"{"crop_data":{"land_owned":{"min":5.0}}}"#);
    }

    #[test]
    fn test_from_json() {
        let filter = Filter::from_json(
            r#"{"demographics":{"district":["Nagpur"]},"crop_data":{"irrigation_facility":true}}"#,
        )
        .unwrap();
        assert_eq!(
            filter.demographics.as_ref().unwrap().district,
            vec!["Nagpur".to_string()]
        );
        assert_eq!(filter.crop_data.as_ref().unwrap().irrigation_facility, Some(true));
    }

    #[test]
    fn test_boolean_fields_reject_strings() {
        assert!(Filter::from_json(r#"{"crop_data":{"irrigation_facility":"true"}}"#).is_err());
    }
}
