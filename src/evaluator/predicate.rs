//! In-memory filter evaluation

use crate::filter::{bounded, present, CropData, Demographics, Filter, Organization, SourceFilter};
use crate::records::FarmerRecord;

/// Check a record against every populated field of `filter`
pub fn matches(filter: &Filter, record: &FarmerRecord) -> bool {
    filter
        .demographics
        .as_ref()
        .map_or(true, |d| matches_demographics(d, record))
        && filter
            .crop_data
            .as_ref()
            .map_or(true, |c| matches_crop_data(c, record))
        && filter
            .organization
            .as_ref()
            .map_or(true, |o| matches_organization(o, record))
        && filter
            .source
            .as_ref()
            .map_or(true, |s| matches_source(s, record))
}

/// Matching records, in their original order
pub fn apply(filter: &Filter, records: &[FarmerRecord]) -> Vec<FarmerRecord> {
    records
        .iter()
        .filter(|record| matches(filter, record))
        .cloned()
        .collect()
}

fn matches_demographics(demo: &Demographics, record: &FarmerRecord) -> bool {
    (demo.district.is_empty() || demo.district.contains(&record.district))
        && (demo.state.is_empty() || demo.state.contains(&record.state))
        && present(&demo.gender).map_or(true, |g| record.gender.as_str() == g)
        && present(&demo.religion).map_or(true, |v| record.religion == v)
        && present(&demo.caste_category).map_or(true, |v| record.caste_category == v)
        && present(&demo.marital_status).map_or(true, |v| record.marital_status == v)
        && bounded(&demo.age).map_or(true, |range| range.contains(record.age))
}

fn matches_crop_data(crop: &CropData, record: &FarmerRecord) -> bool {
    // Lists match on any shared element, not subset or equality
    (crop.crop_types.is_empty() || record.grows_any_type(&crop.crop_types))
        && (crop.crops.is_empty() || record.grows_any_crop(&crop.crops))
        && crop
            .irrigation_facility
            .map_or(true, |v| record.irrigation_facility == v)
        && bounded(&crop.land_owned).map_or(true, |range| range.contains(record.land_owned))
}

fn matches_organization(org: &Organization, record: &FarmerRecord) -> bool {
    org.associated_with_fpo
        .map_or(true, |v| record.associated_with_fpo == v)
        && present(&org.fpo_name).map_or(true, |name| record.fpo_name.as_deref() == Some(name))
}

fn matches_source(source: &SourceFilter, record: &FarmerRecord) -> bool {
    present(&source.name).map_or(true, |name| record.source == name)
}
