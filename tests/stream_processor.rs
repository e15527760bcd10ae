use ddb_stream_processor::stream_records::batch::process_batch;
use ddb_stream_processor::stream_records::dtos::DynamoDbStreamEvent;
use ddb_stream_processor::stream_records::record_mapper::RecordMapper;
use model::processed_record::ProcessedRecord;
use model::tagged_value::TaggedValue;
use repositories::processed_records::input_builder::build_put_processed_record_input;
use repositories::processed_records::MockProcessedRecordsRepository;
use rstest::*;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

fn build_record(event_name: &str, id: &str, new_image: Option<Value>) -> Value {
    let mut dynamodb = json!({
        "ApproximateCreationDateTime": 1479499740,
        "Keys": {
            "id": { "S": id }
        },
        "SequenceNumber": "13021600000000001596893679",
        "SizeBytes": 112,
        "StreamViewType": "NEW_AND_OLD_IMAGES"
    });

    if let Some(new_image) = new_image {
        dynamodb["NewImage"] = new_image;
    }

    json!({
        "eventID": format!("event-{id}"),
        "eventName": event_name,
        "eventVersion": "1.1",
        "eventSource": "aws:dynamodb",
        "awsRegion": "us-west-2",
        "dynamodb": dynamodb,
        "eventSourceARN": "arn:aws:dynamodb:us-west-2:123456789012:table/TableA/stream/2024-01-01T00:00:00.000"
    })
}

#[fixture]
fn stream_event() -> DynamoDbStreamEvent {
    serde_json::from_value(json!({
        "Records": [
            build_record("INSERT", "42", Some(json!({
                "id": { "S": "42" },
                "name": { "S": "alice" },
                "age": { "N": "30" },
                "active": { "BOOL": true },
                "tags": { "SS": ["a", "b"] },
                "address": { "M": { "city": { "S": "Lisbon" } } },
                "nickname": { "NULL": true }
            }))),
            build_record("MODIFY", "43", Some(json!({}))),
            build_record("REMOVE", "44", None),
            build_record("INSERT", "46", Some(json!({
                "id": { "S": "46", "N": "46" }
            }))),
            build_record("MODIFY", "45", Some(json!({
                "id": { "S": "45" },
                "balance": { "N": "-12.5" }
            })))
        ]
    }))
    .expect("stream event should deserialize")
}

#[rstest]
#[tokio::test]
async fn stream_event_is_copied_to_destination_items(stream_event: DynamoDbStreamEvent) {
    let written: Arc<Mutex<Vec<ProcessedRecord>>> = Arc::default();
    let sink = written.clone();

    let mut repository = MockProcessedRecordsRepository::new();
    repository
        .expect_put_processed_record()
        .times(2)
        .returning(move |record| {
            sink.lock().unwrap().push(record);
            Ok(())
        });

    let mapper = RecordMapper::new(Arc::new(repository));
    let summary = process_batch(stream_event.records, &mapper).await;

    assert_eq!(summary.received, 5);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.to_string(), "Successfully processed 2 records");

    let written = written.lock().unwrap();
    assert_eq!(written[0].id.as_deref(), Some("42"));
    assert_eq!(written[1].id.as_deref(), Some("45"));

    let input = build_put_processed_record_input("TableB", written[0].clone());
    let mut names: Vec<&str> = input.item.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "eventType",
            "id",
            "original_active",
            "original_age",
            "original_name",
            "processedAt"
        ]
    );
    assert_eq!(input.item["eventType"].s.as_deref(), Some("INSERT"));
    assert_eq!(input.item["original_age"].n.as_deref(), Some("30"));
    assert_eq!(input.item["original_active"].bool, Some(true));

    let processed_at = input.item["processedAt"].s.as_deref().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(processed_at).is_ok());

    assert_eq!(
        written[1].original_attributes().get("original_balance"),
        Some(&TaggedValue::N("-12.5".to_owned()))
    );
    assert_eq!(written[1].event_type, "MODIFY");
}
