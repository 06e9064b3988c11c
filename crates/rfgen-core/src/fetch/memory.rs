use indexmap::IndexMap;

use crate::error::{FetchError, GenerateError};
use crate::parse::{self, schema::SchemaDocument};

use super::SchemaSource;

/// Serves schema documents from memory, keyed by URL.
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaSource {
    documents: IndexMap<String, String>,
}

impl StaticSchemaSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the raw JSON text served for `url`.
    pub fn with_document(mut self, url: impl Into<String>, json: impl Into<String>) -> Self {
        self.documents.insert(url.into(), json.into());
        self
    }
}

impl SchemaSource for StaticSchemaSource {
    fn fetch(&self, url: &str) -> Result<SchemaDocument, GenerateError> {
        let body = self
            .documents
            .get(url)
            .ok_or_else(|| FetchError::NotFound(url.to_string()))?;
        parse::from_json(body).map_err(|e| {
            log::error!("error with data from {url}:\n{body}");
            e.into()
        })
    }
}
