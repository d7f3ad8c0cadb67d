//! Vocabulary registry
//!
//! Canonical value lists per category. They drive filter choice lists and
//! double as the match vocabulary the query parser scans for.

mod category;
mod registry;

pub use category::*;
pub use registry::*;
