pub mod normalizer;
pub mod scoring;
