use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A JSON Schema type keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Null,
}

impl SchemaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
            SchemaType::Null => "null",
        }
    }
}

/// The `type` field can be a single type or an array of types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(SchemaType),
    Multiple(Vec<SchemaType>),
}

/// A Redfish schema document: the root object with its `definitions` map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `None` when the document has no `definitions` key at all, which is
    /// only acceptable for re-export stubs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<IndexMap<String, SchemaNode>>,
}

impl SchemaDocument {
    pub fn definition(&self, name: &str) -> Option<&SchemaNode> {
        self.definitions.as_ref().and_then(|defs| defs.get(name))
    }

    /// Definitions in document order; empty when the key is absent.
    pub fn iter_definitions(&self) -> impl Iterator<Item = (&String, &SchemaNode)> {
        self.definitions.iter().flatten()
    }
}

/// A JSON Schema fragment in the Redfish/Swordfish profile.
///
/// Only the keywords the translator looks at are modelled; everything else
/// in the document is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<TypeSet>,

    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "longDescription", skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaNode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    #[serde(rename = "anyOf", default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<SchemaNode>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,

    #[serde(
        rename = "enumDescriptions",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub enum_descriptions: IndexMap<String, String>,

    #[serde(
        rename = "enumLongDescriptions",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub enum_long_descriptions: IndexMap<String, String>,

    // Redfish carries a version note string here; older schemas use a bool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<serde_json::Value>,

    #[serde(rename = "readonly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl SchemaNode {
    /// True when the declared `type` is exactly the given single type.
    pub fn is_type(&self, ty: SchemaType) -> bool {
        matches!(self.schema_type, Some(TypeSet::Single(t)) if t == ty)
    }

    /// The `anyOf` list on the node itself, or failing that on its `items`.
    pub fn any_of_alternatives(&self) -> Option<&[SchemaNode]> {
        if !self.any_of.is_empty() {
            return Some(self.any_of.as_slice());
        }
        self.items
            .as_deref()
            .filter(|items| !items.any_of.is_empty())
            .map(|items| items.any_of.as_slice())
    }

    /// The `$ref` declared directly inside `items`.
    pub fn items_ref(&self) -> Option<&str> {
        self.items.as_deref().and_then(|i| i.reference.as_deref())
    }

    /// Whether the `deprecated` annotation is present and truthy.
    pub fn is_deprecated(&self) -> bool {
        match &self.deprecated {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// The documentation text, preferring `longDescription` over `description`.
    pub fn doc_text(&self) -> &str {
        self.long_description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(self.description.as_deref())
            .unwrap_or("")
    }

    /// String enum literals in declaration order.
    pub fn enum_literals(&self) -> impl Iterator<Item = &str> {
        self.enum_values.iter().filter_map(|v| v.as_str())
    }

    /// Description for one enum literal, long form first.
    pub fn enum_member_doc(&self, literal: &str) -> &str {
        self.enum_long_descriptions
            .get(literal)
            .map(String::as_str)
            .filter(|d| !d.is_empty())
            .or_else(|| self.enum_descriptions.get(literal).map(String::as_str))
            .unwrap_or("")
    }
}

/// The last path segment of a JSON reference, e.g. `Foo` for `#/definitions/Foo`.
pub fn ref_target_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}
