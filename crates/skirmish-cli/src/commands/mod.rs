pub mod batch;
pub mod fight;
