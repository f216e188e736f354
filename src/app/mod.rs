pub mod inputs;
pub mod pipelines;
pub mod render;
pub mod report;
