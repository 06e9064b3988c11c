use std::fmt;

use serde::Serialize;

/// Shared types that live in the client library's `common` package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommonType {
    Status,
    Identifier,
    Link,
}

impl CommonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommonType::Status => "Status",
            CommonType::Identifier => "Identifier",
            CommonType::Link => "Link",
        }
    }
}

/// A target-language type expression for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeExpr {
    Integer,
    Boolean,
    String,
    Common(CommonType),
    /// A type declared elsewhere in the schema, by name.
    Named(String),
    /// A raw JSON Schema type token passed through unchanged.
    Primitive(String),
    Array(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn array_of(inner: TypeExpr) -> Self {
        TypeExpr::Array(Box::new(inner))
    }

    /// The element type for arrays, the type itself otherwise.
    pub fn element(&self) -> &TypeExpr {
        match self {
            TypeExpr::Array(inner) => inner.element(),
            other => other,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Integer => f.write_str("int"),
            TypeExpr::Boolean => f.write_str("bool"),
            TypeExpr::String => f.write_str("string"),
            TypeExpr::Common(c) => write!(f, "common.{}", c.as_str()),
            TypeExpr::Named(name) | TypeExpr::Primitive(name) => f.write_str(name),
            TypeExpr::Array(inner) => write!(f, "[]{inner}"),
        }
    }
}

/// Identifies which inference rule produced a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleKind {
    CountName,
    StatusName,
    IdentifierName,
    DescriptionName,
    NestedObject,
    NullableUnion,
    AnyOfRef,
    ItemsRef,
    NavigationLink,
    DefaultString,
}

/// The outcome of type inference for one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedType {
    pub expr: TypeExpr,
    /// Literal wire field name, set when the identifier no longer matches it.
    pub wire_name: Option<String>,
    pub rule: RuleKind,
    /// True when no rule could infer a precise type and string was assumed.
    pub fell_back: bool,
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.wire_name {
            Some(wire) => write!(f, "{} `json:\"{wire}\"`", self.expr),
            None => write!(f, "{}", self.expr),
        }
    }
}
