pub mod service;

pub use service::{DataType, GenerateRequest, GeneratedData, GeneratorService};
