//! Farmer record types and the bundled sample corpus

mod farmer;
mod sample;

pub use farmer::*;
pub use sample::*;
