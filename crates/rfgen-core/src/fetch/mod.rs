pub mod http;
pub mod memory;

use crate::error::GenerateError;
use crate::parse::schema::SchemaDocument;

pub use http::HttpSchemaSource;
pub use memory::StaticSchemaSource;

/// Something that can retrieve and parse a schema document by URL.
pub trait SchemaSource {
    fn fetch(&self, url: &str) -> Result<SchemaDocument, GenerateError>;
}
