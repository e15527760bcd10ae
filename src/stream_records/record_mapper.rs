use crate::result::error::OrchestrationError;
use crate::stream_records::dtos::DynamoDbStreamEventData;
use chrono::{DateTime, Utc};
use model::processed_record::{ProcessedRecord, ID_ATTRIBUTE};
use model::tagged_value::TaggedValue;
use repositories::processed_records::ProcessedRecordsRepository;
use serde_dynamo::{AttributeValue, Item};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotAnUpsert(String),
    MissingNewImage,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotAnUpsert(event_name) => {
                write!(f, "event \"{event_name}\" is not an insert or modify")
            }
            SkipReason::MissingNewImage => write!(f, "no new image found in record"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Written { id: Option<String> },
    Skipped(SkipReason),
}

/// Copies inserted and modified stream records into the destination table.
pub struct RecordMapper {
    processed_records_repository: Arc<dyn ProcessedRecordsRepository>,
}

impl RecordMapper {
    pub fn new(processed_records_repository: Arc<dyn ProcessedRecordsRepository>) -> Self {
        Self {
            processed_records_repository,
        }
    }

    /// Transforms one stream record and writes it, or skips it when there is nothing to copy.
    ///
    /// `REMOVE` events and records whose new image is absent or empty are skipped, so
    /// deletions in the source table are never reflected in the destination.
    pub async fn process(
        &self,
        record: DynamoDbStreamEventData,
    ) -> Result<RecordOutcome, OrchestrationError> {
        if !record.is_upsert() {
            return Ok(RecordOutcome::Skipped(SkipReason::NotAnUpsert(
                record.event_name,
            )));
        }

        let new_image = match record.dynamodb.new_image {
            Some(image) if !image.is_empty() => image,
            _ => return Ok(RecordOutcome::Skipped(SkipReason::MissingNewImage)),
        };

        let processed_record = build_processed_record(record.event_name, new_image, Utc::now());
        let id = processed_record.id.clone();

        self.processed_records_repository
            .put_processed_record(processed_record)
            .await?;

        tracing::info!(
            id = id.as_deref().unwrap_or("unknown"),
            "Successfully wrote record to destination table with ID: {}",
            id.as_deref().unwrap_or("unknown")
        );

        Ok(RecordOutcome::Written { id })
    }
}

/// Builds the destination item for a new image. Only a string `id` is carried over as the
/// key, and attributes that are not strings, numbers or booleans are dropped.
pub fn build_processed_record(
    event_name: String,
    mut new_image: Item,
    processed_at: DateTime<Utc>,
) -> ProcessedRecord {
    let id = match new_image.remove(ID_ATTRIBUTE) {
        Some(AttributeValue::S(id)) => Some(id),
        _ => None,
    };

    let mut processed_record = ProcessedRecord::new(id, processed_at, event_name);

    for (name, value) in new_image.drain() {
        processed_record.insert_original_attribute(&name, TaggedValue::from(value));
    }

    processed_record
}
