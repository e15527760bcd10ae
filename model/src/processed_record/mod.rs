use crate::tagged_value::TaggedValue;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_dynamo::AttributeValue;
use std::collections::{BTreeMap, HashMap};

pub const ID_ATTRIBUTE: &str = "id";
pub const PROCESSED_AT_ATTRIBUTE: &str = "processedAt";
pub const EVENT_TYPE_ATTRIBUTE: &str = "eventType";
pub const ORIGINAL_ATTRIBUTE_PREFIX: &str = "original_";

/// Item written to the destination table for every inserted or modified source row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedRecord {
    pub id: Option<String>,
    pub processed_at: DateTime<Utc>,
    pub event_type: String,
    original_attributes: BTreeMap<String, TaggedValue>,
}

impl ProcessedRecord {
    pub fn new(id: Option<String>, processed_at: DateTime<Utc>, event_type: String) -> Self {
        Self {
            id,
            processed_at,
            event_type,
            original_attributes: BTreeMap::new(),
        }
    }

    /// Copies a source attribute as `original_<name>`.
    ///
    /// Returns `false` and leaves the record untouched when the value is not a string,
    /// number or boolean.
    pub fn insert_original_attribute(&mut self, name: &str, value: TaggedValue) -> bool {
        if !value.is_supported() {
            return false;
        }

        self.original_attributes
            .insert(format!("{ORIGINAL_ATTRIBUTE_PREFIX}{name}"), value);
        true
    }

    /// Copied source attributes, keyed by their prefixed destination name.
    pub fn original_attributes(&self) -> &BTreeMap<String, TaggedValue> {
        &self.original_attributes
    }

    pub fn processed_at_iso8601(&self) -> String {
        self.processed_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Flattens the record into destination attribute names and values.
    pub fn into_attributes(self) -> BTreeMap<String, TaggedValue> {
        let processed_at = self.processed_at_iso8601();
        let mut attributes = self.original_attributes;

        if let Some(id) = self.id {
            attributes.insert(ID_ATTRIBUTE.to_owned(), TaggedValue::S(id));
        }
        attributes.insert(
            PROCESSED_AT_ATTRIBUTE.to_owned(),
            TaggedValue::S(processed_at),
        );
        attributes.insert(
            EVENT_TYPE_ATTRIBUTE.to_owned(),
            TaggedValue::S(self.event_type),
        );

        attributes
    }

    /// The destination item as DynamoDB attribute values.
    pub fn into_item(self) -> HashMap<String, AttributeValue> {
        self.into_attributes()
            .into_iter()
            .filter_map(|(name, value)| value.into_attribute_value().map(|value| (name, value)))
            .collect()
    }
}
