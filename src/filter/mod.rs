//! Structured filter model
//!
//! A [`Filter`] has four independent sections. Canonical filters carry no
//! empty section and no unset leaf; [`normalize`] produces that form and
//! [`FieldUpdate`] edits a filter without mutating the original.

mod model;
mod normalize;
mod update;


pub use model::*;
pub use normalize::*;
pub use update::*;
