//! Sample farmer corpus bundled with the crate

use crate::error::Result;
use crate::records::FarmerRecord;
use once_cell::sync::Lazy;

const SAMPLE_JSON: &str = include_str!("../../data/sample_farmers.json");

static SAMPLE_FARMERS: Lazy<Vec<FarmerRecord>> =
    Lazy::new(|| parse_farmers(SAMPLE_JSON).expect("bundled sample corpus is valid"));

/// The twelve-record sample corpus
pub fn sample_farmers() -> &'static [FarmerRecord] {
    &SAMPLE_FARMERS
}

/// Deserialize a JSON array of farmer records
pub fn parse_farmers(json: &str) -> Result<Vec<FarmerRecord>> {
    Ok(serde_json::from_str(json)?)
}
