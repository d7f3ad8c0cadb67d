//! Pure single-field filter updates

use crate::filter::{normalize, Filter, Range};

/// A new value for one leaf of a [`Filter`]
///
/// Empty lists and `None` clear the field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    District(Vec<String>),
    State(Vec<String>),
    Gender(Option<String>),
    Religion(Option<String>),
    CasteCategory(Option<String>),
    MaritalStatus(Option<String>),
    Age(Option<Range<u32>>),
    CropTypes(Vec<String>),
    Crops(Vec<String>),
    IrrigationFacility(Option<bool>),
    LandOwned(Option<Range<f64>>),
    AssociatedWithFpo(Option<bool>),
    FpoName(Option<String>),
    SourceName(Option<String>),
}

impl Filter {
    /// Copy of this filter with one field replaced, in canonical form
    ///
    /// `self` is left untouched.
    pub fn with(&self, update: FieldUpdate) -> Filter {
        let mut next = self.clone();

        match update {
            FieldUpdate::District(v) => demographics(&mut next).district = v,
            FieldUpdate::State(v) => demographics(&mut next).state = v,
            FieldUpdate::Gender(v) => demographics(&mut next).gender = v,
            FieldUpdate::Religion(v) => demographics(&mut next).religion = v,
            FieldUpdate::CasteCategory(v) => demographics(&mut next).caste_category = v,
            FieldUpdate::MaritalStatus(v) => demographics(&mut next).marital_status = v,
            FieldUpdate::Age(v) => demographics(&mut next).age = v,
            FieldUpdate::CropTypes(v) => crop_data(&mut next).crop_types = v,
            FieldUpdate::Crops(v) => crop_data(&mut next).crops = v,
            FieldUpdate::IrrigationFacility(v) => crop_data(&mut next).irrigation_facility = v,
            FieldUpdate::LandOwned(v) => crop_data(&mut next).land_owned = v,
            FieldUpdate::AssociatedWithFpo(v) => {
                next.organization.get_or_insert_with(Default::default).associated_with_fpo = v
            }
            FieldUpdate::FpoName(v) => {
                next.organization.get_or_insert_with(Default::default).fpo_name = v
            }
            FieldUpdate::SourceName(v) => next.source.get_or_insert_with(Default::default).name = v,
        }

        normalize(next)
    }

    pub fn with_districts<I, S>(&self, districts: I) -> Filter
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(FieldUpdate::District(districts.into_iter().map(Into::into).collect()))
    }

    pub fn with_crop_types<I, S>(&self, crop_types: I) -> Filter
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(FieldUpdate::CropTypes(crop_types.into_iter().map(Into::into).collect()))
    }

    pub fn with_gender(&self, gender: Option<&str>) -> Filter {
        self.with(FieldUpdate::Gender(gender.map(str::to_string)))
    }

    pub fn with_age(&self, age: Option<Range<u32>>) -> Filter {
        self.with(FieldUpdate::Age(age))
    }

    pub fn with_irrigation(&self, irrigation: Option<bool>) -> Filter {
        self.with(FieldUpdate::IrrigationFacility(irrigation))
    }

    pub fn with_land_owned(&self, land_owned: Option<Range<f64>>) -> Filter {
        self.with(FieldUpdate::LandOwned(land_owned))
    }
}

fn demographics(filter: &mut Filter) -> &mut crate::filter::Demographics {
    filter.demographics.get_or_insert_with(Default::default)
}

fn crop_data(filter: &mut Filter) -> &mut crate::filter::CropData {
    filter.crop_data.get_or_insert_with(Default::default)
}
