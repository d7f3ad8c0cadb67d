//! Proptest strategies shared by the property test modules

use proptest::prelude::*;

use crate::filter::{CropData, Demographics, Filter, Organization, Range, SourceFilter};
use crate::records::{FarmerRecord, Gender};

static DISTRICTS: [&str; 4] = ["Nagpur", "Amravati", "Wardha", "Chandrapur"];
static STATES: [&str; 2] = ["Maharashtra", "Goa"];
static RELIGIONS: [&str; 3] = ["Hindu", "Muslim", "Sikh"];
static CASTES: [&str; 3] = ["OBC", "SC", "General"];
static MARITAL: [&str; 3] = ["Married", "Widow", "Unmarried"];
static CROP_TYPES: [&str; 4] = ["Vegetables", "Cereals", "Fruits", "Cash Crops"];
static CROPS: [&str; 5] = ["Rice", "Wheat", "Cotton", "Oranges", "Tomatoes"];
static FPOS: [&str; 2] = ["Nagpur Farmers Collective", "Amravati Farmers Union"];
static SOURCES: [&str; 2] = ["KVK Survey", "NGO Database"];

pub fn one_of(values: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(values).prop_map(str::to_string)
}

fn some_of(values: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(one_of(values), 0..=3)
}

/// A string leaf: unset, blank, or a vocabulary value
fn maybe(values: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(String::new())),
        4 => one_of(values).prop_map(Some),
    ]
}

/// A record text field: usually a vocabulary value, sometimes blank
fn text_or_blank(values: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        4 => one_of(values),
    ]
}

/// Names with irregular spacing: leading, trailing and doubled spaces
fn name_strategy() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Z][a-z]{0,6}([ ]{0,2}[A-Z][a-z]{0,6}){0,2}[ ]{0,2}"
}

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop::sample::select(Gender::ALL.to_vec())
}

/// Acreage on a quarter-acre grid so range bounds hit exact values often
fn acres() -> impl Strategy<Value = f64> {
    (0u32..=60).prop_map(|q| f64::from(q) / 4.0)
}

fn age_range() -> impl Strategy<Value = Option<Range<u32>>> {
    prop::option::of((prop::option::of(15u32..=70), prop::option::of(15u32..=70)))
        .prop_map(|r| r.map(|(min, max)| Range { min, max }))
}

fn land_range() -> impl Strategy<Value = Option<Range<f64>>> {
    prop::option::of((prop::option::of(acres()), prop::option::of(acres())))
        .prop_map(|r| r.map(|(min, max)| Range { min, max }))
}

pub fn record_strategy() -> impl Strategy<Value = FarmerRecord> {
    (
        (
            0u32..1000,
            name_strategy(),
            gender_strategy(),
            15u32..=70,
            one_of(&DISTRICTS),
            one_of(&STATES),
            text_or_blank(&RELIGIONS),
            text_or_blank(&CASTES),
            text_or_blank(&MARITAL),
        ),
        (
            acres(),
            some_of(&CROP_TYPES),
            some_of(&CROPS),
            any::<bool>(),
            maybe(&FPOS),
            one_of(&SOURCES),
        ),
    )
        .prop_map(
            |(
                (id, name, gender, age, district, state, religion, caste_category, marital_status),
                (land_owned, crop_types, crops, irrigation_facility, fpo_name, source),
            )| FarmerRecord {
                id: id.to_string(),
                name,
                contact: format!("+91 {:010}", id),
                gender,
                age,
                district,
                state,
                religion,
                caste_category,
                marital_status,
                land_owned,
                crop_types,
                crops,
                irrigation_facility,
                associated_with_fpo: fpo_name.as_deref().is_some_and(|n| !n.is_empty()),
                fpo_name,
                source,
            },
        )
}

pub fn records_strategy() -> impl Strategy<Value = Vec<FarmerRecord>> {
    prop::collection::vec(record_strategy(), 0..=24)
}

fn demographics_strategy() -> impl Strategy<Value = Demographics> {
    (
        some_of(&DISTRICTS),
        some_of(&STATES),
        maybe(&["Male", "Female", "Other", "male"]),
        maybe(&RELIGIONS),
        maybe(&CASTES),
        maybe(&MARITAL),
        age_range(),
    )
        .prop_map(
            |(district, state, gender, religion, caste_category, marital_status, age)| Demographics {
                district,
                state,
                gender,
                religion,
                caste_category,
                marital_status,
                age,
            },
        )
}

fn crop_data_strategy() -> impl Strategy<Value = CropData> {
    (
        some_of(&CROP_TYPES),
        some_of(&CROPS),
        prop::option::of(any::<bool>()),
        land_range(),
    )
        .prop_map(|(crop_types, crops, irrigation_facility, land_owned)| CropData {
            crop_types,
            crops,
            irrigation_facility,
            land_owned,
        })
}

fn organization_strategy() -> impl Strategy<Value = Organization> {
    (prop::option::of(any::<bool>()), maybe(&FPOS)).prop_map(|(associated_with_fpo, fpo_name)| {
        Organization {
            associated_with_fpo,
            fpo_name,
        }
    })
}

/// Arbitrary filters, canonical or not
pub fn filter_strategy() -> impl Strategy<Value = Filter> {
    (
        prop::option::of(demographics_strategy()),
        prop::option::of(crop_data_strategy()),
        prop::option::of(organization_strategy()),
        prop::option::of(maybe(&SOURCES).prop_map(|name| SourceFilter { name })),
    )
        .prop_map(|(demographics, crop_data, organization, source)| Filter {
            demographics,
            crop_data,
            organization,
            source,
        })
}
