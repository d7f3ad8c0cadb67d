//! Filter evaluation
//!
//! [`apply`] is the reference semantics: a record matches when it satisfies
//! every populated field of the filter. [`translate`] expresses the same
//! filter as clauses for a remote store. Both sit behind [`FilterEvaluator`]
//! and must return identical record sequences for the same input.

mod backend;
mod predicate;
mod remote;
mod strategy;


pub use backend::*;
pub use predicate::*;
pub use remote::*;
pub use strategy::*;
