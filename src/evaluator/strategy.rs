//! Evaluation strategies behind one interface

use crate::config::EngineConfig;
use crate::error::Result;
use crate::evaluator::{apply, translate, FarmerRow, QueryBackend};
use crate::filter::Filter;
use crate::records::FarmerRecord;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

/// Turns a filter into the matching farmer records
///
/// Every implementation returns the same sequence [`apply`] would return
/// over the full record set, or an error. Errors are never reported as an
/// empty result.
#[async_trait]
pub trait FilterEvaluator: Send + Sync {
    async fn evaluate(&self, filter: &Filter) -> Result<Vec<FarmerRecord>>;
}

/// Record retrieval as seen by callers of the search engine
#[async_trait]
pub trait FarmerSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<FarmerRecord>>;

    /// Same as `apply(filter, fetch_all())`
    async fn fetch_filtered(&self, filter: &Filter) -> Result<Vec<FarmerRecord>>;
}

#[async_trait]
impl<E: FilterEvaluator> FarmerSource for E {
    async fn fetch_all(&self) -> Result<Vec<FarmerRecord>> {
        self.evaluate(&Filter::default()).await
    }

    async fn fetch_filtered(&self, filter: &Filter) -> Result<Vec<FarmerRecord>> {
        self.evaluate(filter).await
    }
}

/// Evaluates filters over records held in memory
#[derive(Debug, Clone)]
pub struct InMemoryEvaluator {
    records: Arc<Vec<FarmerRecord>>,
}

impl InMemoryEvaluator {
    pub fn new(records: Vec<FarmerRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn from_shared(records: Arc<Vec<FarmerRecord>>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[FarmerRecord] {
        &self.records
    }
}

#[async_trait]
impl FilterEvaluator for InMemoryEvaluator {
    async fn evaluate(&self, filter: &Filter) -> Result<Vec<FarmerRecord>> {
        let records = Arc::clone(&self.records);
        let filter = filter.clone();

        // Matching is CPU-bound; keep it off the async workers
        let matched = tokio::task::spawn_blocking(move || apply(&filter, &records)).await?;

        debug!("In-memory evaluation matched {} of {}", matched.len(), self.records.len());
        Ok(matched)
    }
}

/// Evaluates filters by translating them into queries for a backend
#[derive(Debug, Clone)]
pub struct RemoteEvaluator<B> {
    backend: B,
    table: String,
}

impl<B: QueryBackend> RemoteEvaluator<B> {
    pub fn new(backend: B, table: impl Into<String>) -> Self {
        Self {
            backend,
            table: table.into(),
        }
    }

    pub fn from_config(backend: B, config: &EngineConfig) -> Self {
        Self::new(backend, config.table.clone())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[async_trait]
impl<B: QueryBackend> FilterEvaluator for RemoteEvaluator<B> {
    async fn evaluate(&self, filter: &Filter) -> Result<Vec<FarmerRecord>> {
        let query = translate(filter, &self.table);
        debug!("Executing remote query on {}: {}", self.table, query.to_query_string());

        let rows = self.backend.execute(&query).await.map_err(|e| {
            error!("Error fetching filtered farmers: {}", e);
            e
        })?;

        debug!("Remote query returned {} rows", rows.len());
        Ok(rows.into_iter().map(FarmerRow::into_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FarmerSearchError;
    use crate::evaluator::{MemoryBackend, RemoteQuery};
    use crate::records::sample_farmers;

    struct FailingBackend;

    #[async_trait]
    impl QueryBackend for FailingBackend {
        async fn execute(&self, _query: &RemoteQuery) -> Result<Vec<FarmerRow>> {
            Err(FarmerSearchError::FetchFailed("connection refused".to_string()))
        }
    }

    fn nagpur_irrigated() -> Filter {
        Filter::default()
            .with_districts(["Nagpur"])
            .with_irrigation(Some(true))
    }

    #[tokio::test]
    async fn test_in_memory_matches_apply() {
        let evaluator = InMemoryEvaluator::new(sample_farmers().to_vec());
        let result = evaluator.evaluate(&nagpur_irrigated()).await.unwrap();
        assert_eq!(result, apply(&nagpur_irrigated(), sample_farmers()));
        assert_eq!(result.len(), 5);
    }

    #[tokio::test]
    async fn test_remote_matches_in_memory() {
        let remote = RemoteEvaluator::new(MemoryBackend::from_records("farmers", sample_farmers()), "farmers");
        let local = InMemoryEvaluator::new(sample_farmers().to_vec());

        let filter = nagpur_irrigated();
        assert_eq!(
            remote.evaluate(&filter).await.unwrap(),
            local.evaluate(&filter).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_remote_keeps_blank_fpo_and_spacing() {
        let mut blank_fpo = sample_farmers()[1].clone();
        blank_fpo.fpo_name = Some(String::new());
        blank_fpo.marital_status = String::new();
        let mut trailing = sample_farmers()[0].clone();
        trailing.name = "Rajesh ".to_string();
        let records = vec![blank_fpo, trailing];

        let remote = RemoteEvaluator::new(MemoryBackend::from_records("farmers", &records), "farmers");
        let local = InMemoryEvaluator::new(records.clone());

        let filter = Filter::default();
        let remote_result = remote.evaluate(&filter).await.unwrap();
        assert_eq!(remote_result, local.evaluate(&filter).await.unwrap());
        assert_eq!(remote_result, records);
    }

    #[tokio::test]
    async fn test_backend_failure_is_not_empty_result() {
        let remote = RemoteEvaluator::new(FailingBackend, "farmers");
        let err = remote.evaluate(&Filter::default()).await.unwrap_err();
        assert!(matches!(err, FarmerSearchError::FetchFailed(_)));
    }

    #[tokio::test]
    async fn test_no_matches_is_ok_empty() {
        let remote = RemoteEvaluator::new(MemoryBackend::from_records("farmers", sample_farmers()), "farmers");
        let filter = Filter::default().with_districts(["Pune"]);
        assert!(remote.evaluate(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_farmer_source_contract() {
        let evaluator = InMemoryEvaluator::new(sample_farmers().to_vec());
        let all = evaluator.fetch_all().await.unwrap();
        assert_eq!(all, sample_farmers());

        let filtered = evaluator.fetch_filtered(&nagpur_irrigated()).await.unwrap();
        assert_eq!(filtered, apply(&nagpur_irrigated(), &all));
    }

    #[tokio::test]
    async fn test_from_config_uses_table() {
        let config = EngineConfig::from_json(r#"{"table": "growers"}"#).unwrap();
        let remote = RemoteEvaluator::from_config(MemoryBackend::from_records("growers", sample_farmers()), &config);
        assert_eq!(remote.evaluate(&Filter::default()).await.unwrap().len(), 12);
    }
}
