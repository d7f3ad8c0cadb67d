//! Search session
//!
//! Ties the parser and an evaluator together the way a search screen uses
//! them: free-text search, filter-panel edits, sorting and paging over the
//! current result set.

mod pagination;
mod sort;

pub use pagination::*;
pub use sort::*;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::evaluator::FilterEvaluator;
use crate::filter::{normalize, FieldUpdate, Filter};
use crate::parser::{CachedParser, QueryParser};
use crate::records::FarmerRecord;
use tracing::{debug, warn};

/// State of one user's search
///
/// State changes only when an evaluation succeeds; a failed evaluation
/// leaves query, filter and results as they were and returns the error.
pub struct SearchSession<E> {
    parser: CachedParser,
    evaluator: E,
    query: String,
    filter: Filter,
    results: Vec<FarmerRecord>,
    sort: Option<SortOrder>,
    pagination: Pagination,
}

impl<E: FilterEvaluator> SearchSession<E> {
    pub fn new(parser: QueryParser, evaluator: E, page_size: usize) -> Self {
        Self {
            parser: CachedParser::new(parser),
            evaluator,
            query: String::new(),
            filter: Filter::default(),
            results: Vec::new(),
            sort: None,
            pagination: Pagination::new(page_size),
        }
    }

    pub fn from_config(config: &EngineConfig, parser: QueryParser, evaluator: E) -> Self {
        Self::new(parser, evaluator, config.page_size)
    }

    /// Load the unfiltered record set
    pub async fn load(&mut self) -> Result<()> {
        self.run(String::new(), Filter::default()).await
    }

    /// Search with free text; blank text clears every filter
    pub async fn search(&mut self, text: &str) -> Result<()> {
        let filter = if text.trim().is_empty() {
            Filter::default()
        } else {
            self.parser.parse(text).normalized().filters
        };
        self.run(text.to_string(), filter).await
    }

    /// Replace the filter, e.g. after the filter panel changed
    pub async fn update_filters(&mut self, filter: Filter) -> Result<()> {
        let query = self.query.clone();
        self.run(query, normalize(filter)).await
    }

    /// Change one filter field
    pub async fn apply_update(&mut self, update: FieldUpdate) -> Result<()> {
        let filter = self.filter.with(update);
        self.update_filters(filter).await
    }

    pub async fn clear_filters(&mut self) -> Result<()> {
        self.update_filters(Filter::default()).await
    }

    async fn run(&mut self, query: String, filter: Filter) -> Result<()> {
        let results = match self.evaluator.evaluate(&filter).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Search for {:?} failed, keeping previous results: {}", query, e);
                return Err(e);
            }
        };

        debug!(
            "Search {:?} with {} active filters matched {} farmers",
            query,
            filter.active_count(),
            results.len()
        );
        self.query = query;
        self.filter = filter;
        self.pagination.reset(results.len());
        self.results = results;
        Ok(())
    }

    /// Cycle sorting for `key`: ascending, descending, unsorted
    pub fn request_sort(&mut self, key: SortKey) {
        self.sort = SortOrder::next(self.sort, key);
    }

    pub fn change_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    pub fn change_items_per_page(&mut self, items_per_page: usize) {
        self.pagination.set_items_per_page(items_per_page);
    }

    /// Current page of the sorted results
    pub fn page(&self) -> Vec<&FarmerRecord> {
        let sorted = sort_records(&self.results, self.sort);
        sorted[self.pagination.range()].to_vec()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn results(&self) -> &[FarmerRecord] {
        &self.results
    }

    pub fn total_results(&self) -> usize {
        self.results.len()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}
