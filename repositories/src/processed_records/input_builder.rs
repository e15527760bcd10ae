use std::collections::HashMap;

use model::processed_record::ProcessedRecord;
use rusoto_dynamodb::{AttributeValue, PutItemInput};

pub fn build_put_processed_record_input(
    table_name: &str,
    record: ProcessedRecord,
) -> PutItemInput {
    let item: HashMap<String, AttributeValue> = record
        .into_item()
        .into_iter()
        .map(|(name, value)| (name, value.into()))
        .collect();

    PutItemInput {
        item,
        table_name: table_name.to_owned(),
        ..PutItemInput::default()
    }
}
