pub mod duration_ext;
pub mod field_context;
pub mod thousands_ext;
