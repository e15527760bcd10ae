use super::ConfigError;
use rusoto_core::region::Region;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Deserialize, Debug, Clone)]
pub struct AwsClientConfig {
    /// Current AWS region.
    aws_region: String,

    /// Only used for development. LocalStack endpoint
    #[serde(default)]
    pub localstack_test_mode_endpoint: Option<String>,
}

impl AwsClientConfig {
    pub fn new(aws_region: String, localstack_test_mode_endpoint: Option<String>) -> Self {
        Self {
            aws_region,
            localstack_test_mode_endpoint,
        }
    }

    pub fn region(&self) -> Result<Region, ConfigError> {
        if let Some(endpoint) = self.localstack_test_mode_endpoint.clone() {
            return Ok(Region::Custom {
                name: self.aws_region.clone(),
                endpoint,
            });
        }

        Region::from_str(&self.aws_region).map_err(|e| {
            ConfigError::Invalid(format!(
                r#"unable to parse AWS region "{}": {e}"#,
                &self.aws_region
            ))
        })
    }
}
