use crate::config::aws_client_config::AwsClientConfig;
use crate::config::{ConfigError, ConfigLoader};
use rusoto_dynamodb::DynamoDbClient;

pub fn get_dynamodb_client() -> Result<DynamoDbClient, ConfigError> {
    let config = ConfigLoader::load_default::<AwsClientConfig>()?;
    get_dynamodb_client_with_config(&config)
}

pub fn get_dynamodb_client_with_config(
    config: &AwsClientConfig,
) -> Result<DynamoDbClient, ConfigError> {
    Ok(DynamoDbClient::new(config.region()?))
}
