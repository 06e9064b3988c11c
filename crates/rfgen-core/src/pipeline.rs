use crate::config::{RfgenConfig, SchemaFamily};
use crate::error::{GenerateError, ParseError};
use crate::fetch::SchemaSource;
use crate::ir::IntermediateModel;
use crate::transform::{Diagnostics, Translator, resolve_canonical_url};

/// The result of translating one schema object.
#[derive(Debug, Clone)]
pub struct Generation {
    pub model: IntermediateModel,
    pub diagnostics: Diagnostics,
    /// The versioned document the model was built from.
    pub canonical_url: String,
}

/// Fetch `object` from the `family` bundle and translate it.
///
/// The stub document is fetched first and chased to its canonical versioned
/// document, which is then classified. Any fetch or parse failure aborts the
/// whole run, as does a versioned document without a `definitions` key. A
/// stub may omit it.
pub fn generate_model(
    source: &dyn SchemaSource,
    config: &RfgenConfig,
    family: SchemaFamily,
    object: &str,
) -> Result<Generation, GenerateError> {
    let stub_url = config.schema_base.url_for(family, object);
    log::debug!("{stub_url}");
    let stub = source.fetch(&stub_url)?;

    let canonical_url = resolve_canonical_url(&stub_url, &stub, object);
    let document = if canonical_url == stub_url {
        stub
    } else {
        log::debug!("{object} resolves to {canonical_url}");
        source.fetch(&canonical_url)?
    };
    if document.definitions.is_none() {
        log::error!("{canonical_url} has no definitions");
        return Err(ParseError::MissingDefinitions(canonical_url).into());
    }

    let mut diagnostics = Diagnostics::default();
    let model = Translator::from_config(config).classify_with_diagnostics(
        &document,
        object,
        family,
        &mut diagnostics,
    );
    log::debug!(
        "{object}: {} classes, {} enums, {} string fallbacks",
        model.classes.len(),
        model.enums.len(),
        diagnostics.fallback_count()
    );

    Ok(Generation {
        model,
        diagnostics,
        canonical_url,
    })
}
