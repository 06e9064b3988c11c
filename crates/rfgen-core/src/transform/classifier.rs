use std::collections::HashSet;

use crate::config::{RfgenConfig, SchemaFamily};
use crate::ir::{
    AttrDescriptor, ClassDescriptor, EnumDescriptor, EnumMemberDescriptor, IntermediateModel,
};
use crate::parse::schema::{SchemaDocument, SchemaNode, SchemaType};

use super::comment::CommentSynthesizer;
use super::diagnostics::{Diagnostics, Fallback};
use super::name_normalizer::NameNormalizer;
use super::type_resolver::TypeResolver;

/// Definition name used by Redfish for action stubs.
const ACTIONS_DEFINITION: &str = "Actions";

/// Properties hoisted into the common entity base type.
const HOISTED_PROPERTIES: [&str; 2] = ["Name", "Id"];

/// Turns schema documents into an [`IntermediateModel`].
#[derive(Debug, Clone, Default)]
pub struct Translator {
    normalizer: NameNormalizer,
    comments: CommentSynthesizer,
    resolver: TypeResolver,
}

impl Translator {
    pub fn new(normalizer: NameNormalizer, comments: CommentSynthesizer) -> Self {
        Self {
            resolver: TypeResolver::new(normalizer.clone()),
            normalizer,
            comments,
        }
    }

    pub fn from_config(config: &RfgenConfig) -> Self {
        Self::new(
            NameNormalizer::new(config.naming.overrides.clone()),
            CommentSynthesizer::from_config(&config.comments),
        )
    }

    /// Classify every definition of `doc` into classes and enums.
    pub fn classify(
        &self,
        doc: &SchemaDocument,
        object_name: &str,
        package: SchemaFamily,
    ) -> IntermediateModel {
        let mut diagnostics = Diagnostics::default();
        self.classify_with_diagnostics(doc, object_name, package, &mut diagnostics)
    }

    /// Same as [`Translator::classify`], also recording what was skipped or guessed.
    pub fn classify_with_diagnostics(
        &self,
        doc: &SchemaDocument,
        object_name: &str,
        package: SchemaFamily,
        diagnostics: &mut Diagnostics,
    ) -> IntermediateModel {
        let mut model = IntermediateModel::new(object_name, package);

        for (name, definition) in doc.iter_definitions() {
            if name == ACTIONS_DEFINITION {
                continue;
            }

            if definition.is_type(SchemaType::Object) {
                if is_action_binding(definition) {
                    log::debug!("skipping action binding object {name}");
                    diagnostics.action_bindings.push(name.clone());
                    continue;
                }
                let class = self.build_class(name, definition, diagnostics);
                model.classes.push(class);
            } else if definition.enum_literals().next().is_some() {
                model.enums.push(self.build_enum(name, definition));
            } else {
                log::debug!("skipping unrepresentable definition {name}");
                diagnostics.unrepresentable.push(name.clone());
            }
        }

        model
    }

    fn build_class(
        &self,
        name: &str,
        definition: &SchemaNode,
        diagnostics: &mut Diagnostics,
    ) -> ClassDescriptor {
        let mut attrs = Vec::new();
        let mut seen = HashSet::new();

        for (prop_name, prop) in &definition.properties {
            if HOISTED_PROPERTIES.contains(&prop_name.as_str()) || prop.is_deprecated() {
                continue;
            }

            let ty = self.resolver.resolve(prop_name, prop);
            if ty.fell_back {
                diagnostics.string_fallbacks.push(Fallback {
                    owner: name.to_string(),
                    property: prop_name.clone(),
                });
            }

            let attr_name = self.normalizer.normalize(prop_name);
            if !seen.insert(attr_name.clone()) {
                log::warn!("{name}: property {prop_name} normalizes to duplicate {attr_name}");
                diagnostics.name_collisions.push(Fallback {
                    owner: name.to_string(),
                    property: prop_name.clone(),
                });
            }

            attrs.push(AttrDescriptor {
                name: attr_name,
                raw_name: prop_name.clone(),
                ty,
                description: self.comments.comment(prop_name, prop.doc_text()),
            });
        }

        ClassDescriptor {
            name: name.to_string(),
            description: self.comments.comment(name, definition.doc_text()),
            attrs,
        }
    }

    fn build_enum(&self, name: &str, definition: &SchemaNode) -> EnumDescriptor {
        let members = definition
            .enum_literals()
            .map(|literal| EnumMemberDescriptor {
                name: literal.to_string(),
                description: self.comments.enum_member(
                    literal,
                    name,
                    definition.enum_member_doc(literal),
                ),
            })
            .collect();

        EnumDescriptor {
            name: name.to_string(),
            description: self.comments.comment(name, definition.doc_text()),
            members,
        }
    }
}

/// OData action bindings carry both `target` and `title` properties.
fn is_action_binding(definition: &SchemaNode) -> bool {
    definition.properties.contains_key("target") && definition.properties.contains_key("title")
}
