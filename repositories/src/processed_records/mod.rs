use async_trait::async_trait;
use model::processed_record::ProcessedRecord;

#[cfg(feature = "test_mocks")]
use mockall::mock;

pub mod input_builder;
pub mod processed_records_repository_impl;

#[derive(Debug, thiserror::Error)]
pub enum ProcessedRecordsRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
}

/// Write sink for transformed stream records.
#[async_trait]
pub trait ProcessedRecordsRepository
where
    Self: Sync + Send,
{
    /// Inserts the record, replacing any existing item with the same `id`.
    async fn put_processed_record(
        &self,
        record: ProcessedRecord,
    ) -> Result<(), ProcessedRecordsRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub ProcessedRecordsRepository {}

    #[async_trait]
    impl ProcessedRecordsRepository for ProcessedRecordsRepository {
        async fn put_processed_record(
            &self,
            record: ProcessedRecord,
        ) -> Result<(), ProcessedRecordsRepositoryError>;
    }
}
