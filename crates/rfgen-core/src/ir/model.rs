use serde::Serialize;

use crate::config::SchemaFamily;

use super::types::ResolvedType;

/// Everything a renderer needs to emit one schema object's source file.
#[derive(Debug, Clone, Serialize)]
pub struct IntermediateModel {
    pub object_name: String,
    pub package: SchemaFamily,
    pub classes: Vec<ClassDescriptor>,
    pub enums: Vec<EnumDescriptor>,
}

impl IntermediateModel {
    pub fn new(object_name: impl Into<String>, package: SchemaFamily) -> Self {
        Self {
            object_name: object_name.into(),
            package,
            classes: Vec::new(),
            enums: Vec::new(),
        }
    }

    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&EnumDescriptor> {
        self.enums.iter().find(|e| e.name == name)
    }
}

/// An object-typed schema definition.
#[derive(Debug, Clone, Serialize)]
pub struct ClassDescriptor {
    pub name: String,
    pub description: Comment,
    pub attrs: Vec<AttrDescriptor>,
}

impl ClassDescriptor {
    pub fn attr(&self, name: &str) -> Option<&AttrDescriptor> {
        self.attrs.iter().find(|a| a.name == name)
    }
}

/// One property of a class.
#[derive(Debug, Clone, Serialize)]
pub struct AttrDescriptor {
    /// Normalized target-language identifier.
    pub name: String,
    /// Property name exactly as it appears in the schema.
    pub raw_name: String,
    #[serde(rename = "type")]
    pub ty: ResolvedType,
    pub description: Comment,
}

/// A string enumeration definition.
#[derive(Debug, Clone, Serialize)]
pub struct EnumDescriptor {
    pub name: String,
    pub description: Comment,
    pub members: Vec<EnumMemberDescriptor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnumMemberDescriptor {
    /// The literal enum value, verbatim.
    pub name: String,
    pub description: Comment,
}

/// Documentation text already wrapped into lines, without comment markers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Comment {
    pub lines: Vec<String>,
}

impl Comment {
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The comment as one space-joined sentence.
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }

    /// Prefix every line with `marker` and join with newlines.
    pub fn render(&self, marker: &str) -> String {
        self.lines
            .iter()
            .map(|line| format!("{marker}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
