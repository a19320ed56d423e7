use std::collections::BTreeMap;
use std::sync::Arc;

use storage::repository::ResponseRepository;
use survey_core::model::{LearningEnvironment, PrimaryDevice, SatisfactionScore, StudyTime};

use crate::error::ReportError;

/// One histogram bucket per score on the 1-10 scale.
pub const SATISFACTION_BUCKETS: usize =
    (SatisfactionScore::MAX - SatisfactionScore::MIN + 1) as usize;

/// The four descriptive summaries computed over every stored response.
///
/// Counts are keyed by the enums themselves so display order is stable;
/// the histogram has one bucket per score, bucket 0 holding score 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyReport {
    pub total: u32,
    pub device_counts: BTreeMap<PrimaryDevice, u32>,
    pub environment_counts: BTreeMap<LearningEnvironment, u32>,
    pub study_time_counts: BTreeMap<StudyTime, u32>,
    pub satisfaction_histogram: [u32; SATISFACTION_BUCKETS],
}

impl SurveyReport {
    pub const BUCKETS: usize = SATISFACTION_BUCKETS;
}

/// Reads the full response log and folds it into a `SurveyReport`.
///
/// Computation only; rendering belongs to the UI layer.
pub struct ReportService {
    responses: Arc<dyn ResponseRepository>,
}

impl ReportService {
    #[must_use]
    pub fn new(responses: Arc<dyn ResponseRepository>) -> Self {
        Self { responses }
    }

    /// Compute the four summaries over all stored responses.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoData` when the store is empty, or
    /// `ReportError::Storage` on fetch failures.
    pub async fn build_report(&self) -> Result<SurveyReport, ReportError> {
        let rows = self.responses.fetch_all().await?;
        if rows.is_empty() {
            return Err(ReportError::NoData);
        }

        let mut device_counts = BTreeMap::new();
        let mut environment_counts = BTreeMap::new();
        let mut study_time_counts = BTreeMap::new();
        let mut satisfaction_histogram = [0u32; SurveyReport::BUCKETS];

        for row in &rows {
            *device_counts.entry(row.device).or_insert(0) += 1;
            *environment_counts.entry(row.environment).or_insert(0) += 1;
            *study_time_counts.entry(row.study_time).or_insert(0) += 1;
            satisfaction_histogram[row.satisfaction.bucket()] += 1;
        }

        let total = u32::try_from(rows.len())
            .map_err(|_| storage::repository::StorageError::Serialization("row count overflow".into()))?;

        Ok(SurveyReport {
            total,
            device_counts,
            environment_counts,
            study_time_counts,
            satisfaction_histogram,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;
    use survey_core::model::{Gender, LearningStyle, NewResponse};

    fn build_response(
        device: PrimaryDevice,
        environment: LearningEnvironment,
        study_time: StudyTime,
        satisfaction: i64,
    ) -> NewResponse {
        NewResponse {
            name: "Asha".into(),
            age: 21,
            gender: Gender::Female,
            environment,
            study_hours: 10,
            study_time,
            study_tools: "Laptop notes".into(),
            device,
            learning_style: LearningStyle::Visual,
            satisfaction: SatisfactionScore::new(satisfaction).unwrap(),
        }
    }

    async fn seeded_service(rows: Vec<NewResponse>) -> ReportService {
        let repo = Arc::new(InMemoryRepository::new());
        for row in &rows {
            repo.append(row).await.unwrap();
        }
        ReportService::new(repo)
    }

    #[tokio::test]
    async fn empty_store_signals_no_data() {
        let service = seeded_service(Vec::new()).await;
        let err = service.build_report().await.unwrap_err();
        assert!(matches!(err, ReportError::NoData));
    }

    #[tokio::test]
    async fn device_frequencies_are_counted() {
        let service = seeded_service(vec![
            build_response(
                PrimaryDevice::Laptop,
                LearningEnvironment::Online,
                StudyTime::Evening,
                5,
            ),
            build_response(
                PrimaryDevice::Laptop,
                LearningEnvironment::Classroom,
                StudyTime::Morning,
                5,
            ),
            build_response(
                PrimaryDevice::Tablet,
                LearningEnvironment::Online,
                StudyTime::Evening,
                5,
            ),
        ])
        .await;

        let report = service.build_report().await.unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.device_counts[&PrimaryDevice::Laptop], 2);
        assert_eq!(report.device_counts[&PrimaryDevice::Tablet], 1);
        assert_eq!(report.device_counts.get(&PrimaryDevice::Desktop), None);

        assert_eq!(report.environment_counts[&LearningEnvironment::Online], 2);
        assert_eq!(
            report.environment_counts[&LearningEnvironment::Classroom],
            1
        );

        assert_eq!(report.study_time_counts[&StudyTime::Evening], 2);
        assert_eq!(report.study_time_counts[&StudyTime::Morning], 1);
    }

    #[tokio::test]
    async fn satisfaction_histogram_buckets_by_score() {
        let service = seeded_service(
            [1, 1, 10, 10, 5]
                .into_iter()
                .map(|s| {
                    build_response(
                        PrimaryDevice::Laptop,
                        LearningEnvironment::Online,
                        StudyTime::Evening,
                        s,
                    )
                })
                .collect(),
        )
        .await;

        let report = service.build_report().await.unwrap();
        let mut expected = [0u32; SurveyReport::BUCKETS];
        expected[0] = 2; // score 1
        expected[4] = 1; // score 5
        expected[9] = 2; // score 10
        assert_eq!(report.satisfaction_histogram, expected);
    }
}
