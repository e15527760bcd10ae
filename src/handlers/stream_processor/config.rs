use serde::Deserialize;
use validator::{Validate, ValidationError};

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct Config {
    /// Table the processed records are written to, read from `TABLE_B_NAME`.
    #[serde(rename = "table_b_name")]
    #[validate(length(min = 3, max = 255), custom = "validate_table_name")]
    pub destination_table_name: String,
}

fn validate_table_name(table_name: &str) -> Result<(), ValidationError> {
    let valid = table_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_table_name"))
    }
}
