use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use survey_core::model::{
    LearningEnvironment, NewResponse, PrimaryDevice, Response, ResponseId, SatisfactionScore,
    StudyTime,
};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// The aggregation-relevant slice of one stored response.
///
/// This is what the reporter consumes; row order is unspecified and the
/// aggregator never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow {
    pub device: PrimaryDevice,
    pub environment: LearningEnvironment,
    pub study_time: StudyTime,
    pub satisfaction: SatisfactionScore,
}

/// Repository contract for the append-only response log.
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Append one fully-validated response and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the insert fails; the record is not saved.
    async fn append(&self, response: &NewResponse) -> Result<ResponseId, StorageError>;

    /// Fetch a stored response by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get(&self, id: ResponseId) -> Result<Response, StorageError>;

    /// Fetch the report slice of every stored response.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on query failures. An empty store yields an
    /// empty vector, not an error.
    async fn fetch_all(&self) -> Result<Vec<ReportRow>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    rows: Arc<Mutex<Vec<NewResponse>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ResponseRepository for InMemoryRepository {
    async fn append(&self, response: &NewResponse) -> Result<ResponseId, StorageError> {
        let mut guard = self
            .rows
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.push(response.clone());
        // Ids are 1-based positions, monotonic like SQLite's rowid.
        Ok(ResponseId::new(guard.len() as u64))
    }

    async fn get(&self, id: ResponseId) -> Result<Response, StorageError> {
        let guard = self
            .rows
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let index = usize::try_from(id.value())
            .ok()
            .and_then(|v| v.checked_sub(1))
            .ok_or(StorageError::NotFound)?;
        let record = guard.get(index).cloned().ok_or(StorageError::NotFound)?;
        Response::from_persisted(id, record).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    async fn fetch_all(&self) -> Result<Vec<ReportRow>, StorageError> {
        let guard = self
            .rows
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .iter()
            .map(|r| ReportRow {
                device: r.device,
                environment: r.environment,
                study_time: r.study_time,
                satisfaction: r.satisfaction,
            })
            .collect())
    }
}

/// Aggregates the response repository behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub responses: Arc<dyn ResponseRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let responses: Arc<dyn ResponseRepository> = Arc::new(InMemoryRepository::new());
        Self { responses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_core::model::{Gender, LearningStyle};

    fn build_response(name: &str, device: PrimaryDevice) -> NewResponse {
        NewResponse {
            name: name.to_owned(),
            age: 21,
            gender: Gender::Female,
            environment: LearningEnvironment::Online,
            study_hours: 10,
            study_time: StudyTime::Evening,
            study_tools: "Laptop notes".to_owned(),
            device,
            learning_style: LearningStyle::Visual,
            satisfaction: SatisfactionScore::new(7).unwrap(),
        }
    }

    #[tokio::test]
    async fn append_assigns_monotonic_ids() {
        let repo = InMemoryRepository::new();
        let first = repo
            .append(&build_response("Asha", PrimaryDevice::Laptop))
            .await
            .unwrap();
        let second = repo
            .append(&build_response("Bram", PrimaryDevice::Tablet))
            .await
            .unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn get_round_trips_exact_values() {
        let repo = InMemoryRepository::new();
        let id = repo
            .append(&build_response("Asha", PrimaryDevice::Laptop))
            .await
            .unwrap();

        let stored = repo.get(id).await.unwrap();
        assert_eq!(stored.name(), "Asha");
        assert_eq!(stored.age(), 21);
        assert_eq!(stored.device(), PrimaryDevice::Laptop);
        assert_eq!(stored.satisfaction().value(), 7);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let repo = InMemoryRepository::new();
        let err = repo.get(ResponseId::new(99)).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn fetch_all_on_empty_store_is_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_all_returns_report_slice() {
        let repo = InMemoryRepository::new();
        repo.append(&build_response("Asha", PrimaryDevice::Laptop))
            .await
            .unwrap();
        repo.append(&build_response("Bram", PrimaryDevice::Tablet))
            .await
            .unwrap();

        let rows = repo.fetch_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].device, PrimaryDevice::Laptop);
        assert_eq!(rows[1].device, PrimaryDevice::Tablet);
        assert_eq!(rows[0].environment, LearningEnvironment::Online);
    }
}
