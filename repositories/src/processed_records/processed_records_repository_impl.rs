use crate::processed_records::input_builder::build_put_processed_record_input;
use crate::processed_records::{ProcessedRecordsRepository, ProcessedRecordsRepositoryError};
use anyhow::anyhow;
use async_trait::async_trait;
use model::processed_record::ProcessedRecord;
use rusoto_dynamodb::DynamoDb;

pub struct ProcessedRecordsRepositoryImpl<D: DynamoDb + Sync + Send> {
    table_name: String,
    dynamodb_client: D,
}

impl<D: DynamoDb + Sync + Send> ProcessedRecordsRepositoryImpl<D> {
    pub fn new(table_name: String, dynamodb_client: D) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }
}

#[async_trait]
impl<D: DynamoDb + Sync + Send> ProcessedRecordsRepository for ProcessedRecordsRepositoryImpl<D> {
    async fn put_processed_record(
        &self,
        record: ProcessedRecord,
    ) -> Result<(), ProcessedRecordsRepositoryError> {
        let id = record.id.clone();
        let input = build_put_processed_record_input(&self.table_name, record);

        self.dynamodb_client.put_item(input).await.map_err(|e| {
            ProcessedRecordsRepositoryError::Unknown(anyhow!(e).context(format!(
                "Error writing processed record {} to table {}",
                id.as_deref().unwrap_or("unknown"),
                self.table_name
            )))
        })?;

        Ok(())
    }
}
