pub mod processed_record;
pub mod tagged_value;
