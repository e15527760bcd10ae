pub mod batch;
pub mod dtos;
pub mod record_mapper;
