pub mod schema;

use crate::error::ParseError;
use schema::SchemaDocument;

/// Parse a schema document from JSON text.
pub fn from_json(input: &str) -> Result<SchemaDocument, ParseError> {
    let doc: SchemaDocument = serde_json::from_str(input)?;
    Ok(doc)
}

