pub mod avatar;
pub mod result_summary;
pub mod types;
