pub mod processed_records;
