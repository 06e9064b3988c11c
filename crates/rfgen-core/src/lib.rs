pub mod config;
pub mod error;
pub mod fetch;
pub mod ir;
pub mod parse;
pub mod pipeline;
pub mod transform;

pub use pipeline::{Generation, generate_model};

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from the intermediate model.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        model: &ir::IntermediateModel,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
