use model::processed_record::ID_ATTRIBUTE;
use serde::{Deserialize, Deserializer};
use serde_dynamo::{AttributeValue, Item};
use serde_json::Value;

pub const INSERT_STREAM_EVENT: &str = "INSERT";
pub const MODIFY_STREAM_EVENT: &str = "MODIFY";
pub const REMOVE_STREAM_EVENT: &str = "REMOVE";

#[derive(Deserialize, Debug)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct DynamoDbStreamEvent {
    pub records: Vec<StreamRecord>,
}

/// A stream record as delivered, or why it could not be decoded.
///
/// Decoding happens per record so one malformed entry does not fail the whole batch.
#[derive(Debug)]
pub enum StreamRecord {
    Decoded(DynamoDbStreamEventData),
    Malformed {
        event_id: Option<String>,
        error: String,
    },
}

impl<'de> Deserialize<'de> for StreamRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let event_id = value
            .get("eventID")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(match serde_json::from_value(value) {
            Ok(record) => StreamRecord::Decoded(record),
            Err(e) => StreamRecord::Malformed {
                event_id,
                error: e.to_string(),
            },
        })
    }
}

impl From<DynamoDbStreamEventData> for StreamRecord {
    fn from(record: DynamoDbStreamEventData) -> Self {
        StreamRecord::Decoded(record)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DynamoDbStreamEventData {
    #[serde(rename(deserialize = "eventID"))]
    pub event_id: Option<String>,
    #[serde(default)]
    pub event_name: String,
    pub event_source: Option<String>,
    pub aws_region: Option<String>,
    #[serde(default)]
    pub dynamodb: DynamoDbEvent,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct DynamoDbEvent {
    pub keys: Option<Item>,
    pub new_image: Option<Item>,
    pub sequence_number: Option<String>,
}

impl DynamoDbStreamEventData {
    /// Whether the operation kind is one that gets copied to the destination table.
    pub fn is_upsert(&self) -> bool {
        self.event_name == INSERT_STREAM_EVENT || self.event_name == MODIFY_STREAM_EVENT
    }

    /// String `id` of the changed row, looked up in the keys first and then in the new image.
    pub fn record_id(&self) -> Option<&str> {
        self.dynamodb
            .keys
            .as_ref()
            .and_then(string_id)
            .or_else(|| self.dynamodb.new_image.as_ref().and_then(string_id))
    }
}

fn string_id(image: &Item) -> Option<&str> {
    match image.get(ID_ATTRIBUTE) {
        Some(AttributeValue::S(id)) => Some(id.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{DynamoDbStreamEvent, StreamRecord, INSERT_STREAM_EVENT, REMOVE_STREAM_EVENT};
    use serde_dynamo::AttributeValue;
    use serde_json::json;

    #[test]
    fn deserialize_stream_event() {
        let event: DynamoDbStreamEvent = serde_json::from_value(json!({
            "Records": [
                {
                    "eventID": "c4ca4238a0b923820dcc509a6f75849b",
                    "eventName": "INSERT",
                    "eventVersion": "1.1",
                    "eventSource": "aws:dynamodb",
                    "awsRegion": "us-west-2",
                    "dynamodb": {
                        "Keys": { "id": { "S": "42" } },
                        "NewImage": {
                            "id": { "S": "42" },
                            "name": { "S": "alice" },
                            "scores": { "L": [ { "N": "1" } ] }
                        },
                        "SequenceNumber": "4421584500000000017450439091",
                        "SizeBytes": 26,
                        "StreamViewType": "NEW_AND_OLD_IMAGES"
                    },
                    "eventSourceARN": "arn:aws:dynamodb:us-west-2:123456789012:table/TableA/stream/2024-01-01T00:00:00.000"
                },
                {
                    "eventID": "c81e728d9d4c2f636f067f89cc14862c",
                    "eventName": "REMOVE",
                    "dynamodb": {
                        "Keys": { "id": { "S": "43" } },
                        "OldImage": { "id": { "S": "43" } }
                    }
                }
            ]
        }))
        .unwrap();

        assert_eq!(event.records.len(), 2);

        let StreamRecord::Decoded(insert) = &event.records[0] else {
            panic!("insert record should decode");
        };
        assert_eq!(insert.event_name, INSERT_STREAM_EVENT);
        assert!(insert.is_upsert());
        assert_eq!(insert.record_id(), Some("42"));
        assert_eq!(insert.aws_region.as_deref(), Some("us-west-2"));
        assert_eq!(
            insert.dynamodb.sequence_number.as_deref(),
            Some("4421584500000000017450439091")
        );
        let new_image = insert.dynamodb.new_image.as_ref().unwrap();
        assert!(matches!(new_image.get("scores"), Some(AttributeValue::L(_))));
        assert!(matches!(
            new_image.get("name"),
            Some(AttributeValue::S(name)) if name == "alice"
        ));

        let StreamRecord::Decoded(remove) = &event.records[1] else {
            panic!("remove record should decode");
        };
        assert_eq!(remove.event_name, REMOVE_STREAM_EVENT);
        assert!(!remove.is_upsert());
        assert!(remove.dynamodb.new_image.is_none());
        assert_eq!(remove.record_id(), Some("43"));
    }

    #[test]
    fn malformed_record_does_not_fail_the_event() {
        let event: DynamoDbStreamEvent = serde_json::from_value(json!({
            "Records": [
                {
                    "eventID": "1",
                    "eventName": "INSERT",
                    "dynamodb": {
                        "NewImage": { "id": { "S": "a", "N": "1" } }
                    }
                },
                {
                    "eventID": "2",
                    "eventName": "MODIFY",
                    "dynamodb": {
                        "NewImage": { "id": { "S": "b" } }
                    }
                }
            ]
        }))
        .unwrap();

        assert!(matches!(
            &event.records[0],
            StreamRecord::Malformed { event_id: Some(id), .. } if id == "1"
        ));
        assert!(matches!(
            &event.records[1],
            StreamRecord::Decoded(record) if record.record_id() == Some("b")
        ));
    }

    #[test]
    fn missing_event_name_is_not_an_upsert() {
        let event: DynamoDbStreamEvent = serde_json::from_value(json!({
            "Records": [
                {
                    "eventID": "1",
                    "dynamodb": {
                        "NewImage": { "id": { "S": "a" } }
                    }
                }
            ]
        }))
        .unwrap();

        let StreamRecord::Decoded(record) = &event.records[0] else {
            panic!("record without event name should decode");
        };
        assert!(record.event_name.is_empty());
        assert!(!record.is_upsert());
    }
}
