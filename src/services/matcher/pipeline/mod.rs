pub mod batch;
pub mod full_pipeline;
pub mod quick_pipeline;
