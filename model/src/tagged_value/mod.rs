use serde_dynamo::AttributeValue;

pub const STRING_TYPE: &str = "S";
pub const NUMBER_TYPE: &str = "N";
pub const BOOLEAN_TYPE: &str = "BOOL";

/// A DynamoDB attribute value as delivered in a stream image.
///
/// Only the scalar string, number and boolean kinds are carried through; every other kind
/// (lists, maps, sets, binary, null) collapses into `Unsupported`, which keeps the type tag
/// it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaggedValue {
    S(String),
    /// Numbers travel as their decimal string representation.
    N(String),
    Bool(bool),
    Unsupported(String),
}

impl TaggedValue {
    pub fn type_tag(&self) -> &str {
        match self {
            TaggedValue::S(_) => STRING_TYPE,
            TaggedValue::N(_) => NUMBER_TYPE,
            TaggedValue::Bool(_) => BOOLEAN_TYPE,
            TaggedValue::Unsupported(tag) => tag,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, TaggedValue::Unsupported(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TaggedValue::S(s) => Some(s),
            _ => None,
        }
    }

    /// The DynamoDB value to write. Unsupported values have none.
    pub fn into_attribute_value(self) -> Option<AttributeValue> {
        match self {
            TaggedValue::S(s) => Some(AttributeValue::S(s)),
            TaggedValue::N(n) => Some(AttributeValue::N(n)),
            TaggedValue::Bool(b) => Some(AttributeValue::Bool(b)),
            TaggedValue::Unsupported(_) => None,
        }
    }
}

impl From<AttributeValue> for TaggedValue {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::S(s) => TaggedValue::S(s),
            AttributeValue::N(n) => TaggedValue::N(n),
            AttributeValue::Bool(b) => TaggedValue::Bool(b),
            AttributeValue::B(_) => TaggedValue::Unsupported("B".to_owned()),
            AttributeValue::Null(_) => TaggedValue::Unsupported("NULL".to_owned()),
            AttributeValue::M(_) => TaggedValue::Unsupported("M".to_owned()),
            AttributeValue::L(_) => TaggedValue::Unsupported("L".to_owned()),
            AttributeValue::Ss(_) => TaggedValue::Unsupported("SS".to_owned()),
            AttributeValue::Ns(_) => TaggedValue::Unsupported("NS".to_owned()),
            AttributeValue::Bs(_) => TaggedValue::Unsupported("BS".to_owned()),
        }
    }
}
