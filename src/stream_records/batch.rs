use crate::stream_records::dtos::StreamRecord;
use crate::stream_records::record_mapper::{RecordMapper, RecordOutcome};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub received: usize,
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Display for BatchSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Successfully processed {} records", self.processed)
    }
}

/// Runs every record of a stream batch through the mapper in delivery order.
///
/// A failing or undecodable record is logged and left out of the processed count; it never
/// stops the records after it.
pub async fn process_batch(
    records: Vec<StreamRecord>,
    record_mapper: &RecordMapper,
) -> BatchSummary {
    let mut summary = BatchSummary {
        received: records.len(),
        ..BatchSummary::default()
    };

    tracing::info!(
        records = summary.received,
        "Processing {} records from DynamoDB Stream",
        summary.received
    );

    for record in records {
        let record = match record {
            StreamRecord::Decoded(record) => record,
            StreamRecord::Malformed { event_id, error } => {
                summary.failed += 1;
                tracing::error!(
                    event_id = ?event_id,
                    error = %error,
                    "Error decoding record: {error}"
                );
                continue;
            }
        };

        let event_id = record.event_id.clone();
        let event_name = record.event_name.clone();
        let event_source = record.event_source.clone();
        let aws_region = record.aws_region.clone();
        let sequence_number = record.dynamodb.sequence_number.clone();
        let record_id = record.record_id().map(str::to_owned);

        match record_mapper.process(record).await {
            Ok(RecordOutcome::Written { .. }) => summary.processed += 1,
            Ok(RecordOutcome::Skipped(reason)) => {
                summary.skipped += 1;
                tracing::info!(
                    event_id = ?event_id,
                    event_name = %event_name,
                    event_source = ?event_source,
                    aws_region = ?aws_region,
                    sequence_number = ?sequence_number,
                    record_id = ?record_id,
                    "Skipping record: {reason}"
                );
            }
            Err(err) => {
                summary.failed += 1;
                tracing::error!(
                    error = ?err,
                    event_id = ?event_id,
                    event_name = %event_name,
                    event_source = ?event_source,
                    aws_region = ?aws_region,
                    sequence_number = ?sequence_number,
                    record_id = ?record_id,
                    "Error processing record: {err}"
                );
            }
        }
    }

    tracing::info!(
        processed = summary.processed,
        skipped = summary.skipped,
        failed = summary.failed,
        "{summary}"
    );

    summary
}
