use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Base URL of the published Redfish schema bundle.
pub const REDFISH_SCHEMA_BASE: &str = "http://redfish.dmtf.org/schemas/v1/";

/// Base URL of the published Swordfish schema bundle.
pub const SWORDFISH_SCHEMA_BASE: &str = "http://redfish.dmtf.org/schemas/swordfish/v1/";

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".rfgen.yaml";

/// Which schema family an object belongs to. Doubles as the output package name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaFamily {
    Redfish,
    #[default]
    Swordfish,
}

impl SchemaFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaFamily::Redfish => "redfish",
            SchemaFamily::Swordfish => "swordfish",
        }
    }
}

impl fmt::Display for SchemaFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level project configuration loaded from `.rfgen.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RfgenConfig {
    pub family: SchemaFamily,
    /// Output file; stdout when unset.
    pub output: Option<String>,
    pub schema_base: SchemaBases,
    pub naming: NamingConfig,
    pub comments: CommentConfig,
}

/// Per-family URL prefixes that object names are appended to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchemaBases {
    pub redfish: String,
    pub swordfish: String,
}

impl Default for SchemaBases {
    fn default() -> Self {
        Self {
            redfish: REDFISH_SCHEMA_BASE.to_string(),
            swordfish: SWORDFISH_SCHEMA_BASE.to_string(),
        }
    }
}

impl SchemaBases {
    pub fn base_for(&self, family: SchemaFamily) -> &str {
        match family {
            SchemaFamily::Redfish => &self.redfish,
            SchemaFamily::Swordfish => &self.swordfish,
        }
    }

    /// URL of the (possibly stub) document for `object`.
    pub fn url_for(&self, family: SchemaFamily, object: &str) -> String {
        format!("{}{}.json", self.base_for(family), object)
    }
}

/// Exact-match identifier overrides for ambiguous abbreviations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub overrides: IndexMap<String, String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            overrides: default_name_overrides(),
        }
    }
}

pub fn default_name_overrides() -> IndexMap<String, String> {
    [("Oem", "OEM"), ("Id", "ID")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Comment wrapping and the curated descriptions for ubiquitous fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommentConfig {
    /// Maximum line width, comment marker included.
    pub width: usize,
    /// Prefix of every comment line in the generated source.
    pub marker: String,
    pub curated: IndexMap<String, String>,
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            width: 79,
            marker: "// ".to_string(),
            curated: default_curated_descriptions(),
        }
    }
}

pub fn default_curated_descriptions() -> IndexMap<String, String> {
    [
        (
            "Description",
            "Description provides a description of this resource.",
        ),
        ("Id", "ID uniquely identifies the resource."),
        ("Name", "Name is the name of the resource or array element."),
        ("@odata.context", "ODataContext is the odata context."),
        ("@odata.etag", "ODataEtag is the odata etag."),
        ("@odata.id", "ODataID is the odata identifier."),
        ("@odata.type", "ODataType is the odata type."),
        (
            "Identifier",
            "Identifier shall be unique within the managed ecosystem.",
        ),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<RfgenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: RfgenConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# rfgen configuration
family: swordfish        # redfish | swordfish
# output: storage_pool.go   # defaults to stdout

schema_base:
  redfish: http://redfish.dmtf.org/schemas/v1/
  swordfish: http://redfish.dmtf.org/schemas/swordfish/v1/

naming:
  overrides:
    Oem: OEM
    Id: ID

comments:
  width: 79
  marker: "// "
  # curated:             # replaces the built-in table when set
  #   Description: Description provides a description of this resource.
"#
}
