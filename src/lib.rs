//! Farmer Search Core - filter engine for farmer record search
//!
//! This crate turns free-text queries and filter-panel selections into a
//! single structured [`Filter`], and evaluates that filter either in memory
//! or by translating it into a query for a remote store.
//!
//! ```text
//! text ─► QueryParser ─► Filter ─► normalize ─► FilterEvaluator ─► records
//!              ▲                                   ├─ InMemoryEvaluator
//!          Vocabulary                              └─ RemoteEvaluator ─► QueryBackend
//! ```
//!
//! # Example
//! ```
//! use farmer_search_core::{apply, sample_farmers, QueryParser};
//!
//! let parsed = QueryParser::sample().parse("irrigated farms in Wardha").normalized();
//! let matches = apply(&parsed.filters, sample_farmers());
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].name, "Harish Joshi");
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod filter;
pub mod parser;
pub mod records;
pub mod session;
pub mod vocabulary;

#[cfg(test)]
mod strategies;

pub use config::{EngineConfig, VocabularyConfig};
pub use error::{FarmerSearchError, Result};
pub use evaluator::{
    apply, matches, translate, FarmerSource, FilterEvaluator, InMemoryEvaluator, MemoryBackend,
    QueryBackend, RemoteEvaluator, RemoteQuery,
};
pub use filter::{normalize, FieldUpdate, Filter, Range};
pub use parser::{CachedParser, ParseResult, QueryParser};
pub use records::{sample_farmers, FarmerRecord, Gender};
pub use session::{SearchSession, SortKey, SortOrder};
pub use vocabulary::{Category, Vocabulary};
