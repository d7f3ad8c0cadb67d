//! Parse cache - repeated queries skip the vocabulary scan

use crate::parser::{ParseResult, QueryParser};
use ahash::AHashMap;
use parking_lot::RwLock;

/// Entries kept before the cache is emptied
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// A [`QueryParser`] that memoizes results per input text
///
/// Debounced search boxes re-submit the same text often. The cache belongs
/// to this instance only; results are identical to the wrapped parser's.
#[derive(Debug)]
pub struct CachedParser {
    parser: QueryParser,
    cache: RwLock<AHashMap<String, ParseResult>>,
    capacity: usize,
}

impl CachedParser {
    pub fn new(parser: QueryParser) -> Self {
        Self::with_capacity(parser, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(parser: QueryParser, capacity: usize) -> Self {
        Self {
            parser,
            cache: RwLock::new(AHashMap::with_capacity(capacity.min(DEFAULT_CACHE_CAPACITY))),
            capacity: capacity.max(1),
        }
    }

    pub fn parser(&self) -> &QueryParser {
        &self.parser
    }

    /// Get or parse a query, using the cache for repeated text
    pub fn parse(&self, text: &str) -> ParseResult {
        // Fast path: check read lock first
        {
            let cache = self.cache.read();
            if let Some(result) = cache.get(text) {
                return result.clone();
            }
        }

        // Slow path: parse and cache
        let result = self.parser.parse(text);

        {
            let mut cache = self.cache.write();
            if cache.len() >= self.capacity {
                tracing::debug!("Parse cache full ({} entries), clearing", cache.len());
                cache.clear();
            }
            cache.insert(text.to_string(), result.clone());
        }

        result
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}
