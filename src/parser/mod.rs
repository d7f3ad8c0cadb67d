//! Natural-language query parsing
//!
//! Turns free text like "female farmers in Nagpur with more than 5 acres"
//! into a [`Filter`](crate::filter::Filter) by keyword and vocabulary
//! substring detection.

pub mod cache;
mod query;


pub use cache::*;
pub use query::*;
