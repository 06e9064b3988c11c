use heck::ToSnakeCase;
use rfgen_core::config::CommentConfig;
use rfgen_core::ir::IntermediateModel;
use rfgen_core::{CodeGenerator, GeneratedFile};
use thiserror::Error;

use crate::emitters;

#[derive(Debug, Error)]
pub enum GoError {
    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),
}

/// Configuration for the Go generator.
#[derive(Debug, Clone)]
pub struct GoConfig {
    /// Output file name; derived from the object name when unset.
    pub file_name: Option<String>,
    /// Prefix of every comment line; struct fields and constants get it
    /// indented by one tab.
    pub comment_marker: String,
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            file_name: None,
            comment_marker: "// ".to_string(),
        }
    }
}

impl GoConfig {
    /// Use the same marker the comments were wrapped for.
    pub fn from_comments(comments: &CommentConfig) -> Self {
        Self {
            comment_marker: comments.marker.clone(),
            ..Self::default()
        }
    }
}

/// Go source generator for the gofish client library layout.
pub struct GoGenerator;

impl CodeGenerator for GoGenerator {
    type Config = GoConfig;
    type Error = GoError;

    fn generate(
        &self,
        model: &IntermediateModel,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error> {
        let path = config
            .file_name
            .clone()
            .unwrap_or_else(|| format!("{}.go", model.object_name.to_snake_case()));
        log::debug!("rendering {} into {path}", model.object_name);

        Ok(vec![GeneratedFile {
            path,
            content: emitters::source::emit_source(model, &config.comment_marker)?,
        }])
    }
}
