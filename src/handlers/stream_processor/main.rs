mod config;

use async_trait::async_trait;
use common::aws_clients::dynamodb::get_dynamodb_client;
use common::config::ConfigLoader;
use config::Config;
use ddb_stream_processor::result::error::OrchestrationError;
use ddb_stream_processor::stream_records::batch::process_batch;
use ddb_stream_processor::stream_records::dtos::DynamoDbStreamEvent;
use ddb_stream_processor::stream_records::record_mapper::RecordMapper;
use ddb_stream_processor::{lambda_main, lambda_structure::lambda_trait::Lambda};
use repositories::processed_records::processed_records_repository_impl::ProcessedRecordsRepositoryImpl;
use std::sync::Arc;
use validator::Validate;

pub struct Persisted {
    pub config: Config,
    pub record_mapper: RecordMapper,
}

pub struct StreamProcessor;

#[async_trait]
impl Lambda for StreamProcessor {
    type PersistedMemory = Persisted;
    type InputBody = DynamoDbStreamEvent;
    type Output = String;
    type Error = OrchestrationError;

    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error> {
        let config = ConfigLoader::load_default::<Config>()?;
        config.validate()?;

        let dynamodb_client = get_dynamodb_client()?;
        let processed_records_repository = Arc::new(ProcessedRecordsRepositoryImpl::new(
            config.destination_table_name.clone(),
            dynamodb_client,
        ));

        Ok(Persisted {
            config,
            record_mapper: RecordMapper::new(processed_records_repository),
        })
    }

    async fn run(
        request: Self::InputBody,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        tracing::debug!(
            destination_table = %state.config.destination_table_name,
            "Copying stream records"
        );

        let summary = process_batch(request.records, &state.record_mapper).await;

        Ok(summary.to_string())
    }
}

lambda_main!(StreamProcessor);
