use crate::ir::{CommonType, ResolvedType, RuleKind, TypeExpr};
use crate::parse::schema::{SchemaNode, SchemaType, TypeSet, ref_target_name};

use super::name_normalizer::NameNormalizer;

/// The property being typed: its raw schema name and its schema node.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub name: &'a str,
    pub node: &'a SchemaNode,
}

/// One step of the inference chain.
///
/// `produce` returning `None` means the rule claimed the property but found
/// nothing precise, so the property is typed as string and counted as a
/// fallback.
pub struct TypeRule {
    pub kind: RuleKind,
    pub applies: fn(&RuleInput<'_>) -> bool,
    pub produce: fn(&RuleInput<'_>) -> Option<TypeExpr>,
}

/// Inference rules in precedence order; the first rule that applies wins.
pub static RULES: &[TypeRule] = &[
    TypeRule {
        kind: RuleKind::CountName,
        applies: |i: &RuleInput<'_>| i.name.to_lowercase().contains("count"),
        produce: |_: &RuleInput<'_>| Some(TypeExpr::Integer),
    },
    TypeRule {
        kind: RuleKind::StatusName,
        applies: |i: &RuleInput<'_>| i.name == "Status",
        produce: |_: &RuleInput<'_>| Some(TypeExpr::Common(CommonType::Status)),
    },
    TypeRule {
        kind: RuleKind::IdentifierName,
        applies: |i: &RuleInput<'_>| i.name == "Identifier",
        produce: |_: &RuleInput<'_>| Some(TypeExpr::Common(CommonType::Identifier)),
    },
    TypeRule {
        kind: RuleKind::DescriptionName,
        applies: |i: &RuleInput<'_>| i.name == "Description",
        produce: |_: &RuleInput<'_>| Some(TypeExpr::String),
    },
    TypeRule {
        kind: RuleKind::NestedObject,
        applies: |i: &RuleInput<'_>| i.node.is_type(SchemaType::Object),
        produce: |i: &RuleInput<'_>| Some(TypeExpr::Named(i.name.to_string())),
    },
    TypeRule {
        kind: RuleKind::NullableUnion,
        applies: |i: &RuleInput<'_>| {
            matches!(i.node.schema_type, Some(TypeSet::Multiple(_)))
        },
        produce: first_non_null_member,
    },
    TypeRule {
        kind: RuleKind::AnyOfRef,
        applies: |i: &RuleInput<'_>| i.node.any_of_alternatives().is_some(),
        produce: |i: &RuleInput<'_>| {
            i.node
                .any_of_alternatives()?
                .iter()
                .find_map(|alt| alt.reference.as_deref())
                .map(|r| TypeExpr::Named(ref_target_name(r).to_string()))
        },
    },
    TypeRule {
        kind: RuleKind::ItemsRef,
        applies: |i: &RuleInput<'_>| i.node.items_ref().is_some(),
        produce: |i: &RuleInput<'_>| {
            i.node
                .items_ref()
                .map(|r| TypeExpr::Named(ref_target_name(r).to_string()))
        },
    },
    TypeRule {
        kind: RuleKind::NavigationLink,
        applies: |i: &RuleInput<'_>| {
            i.name.chars().next().is_some_and(char::is_lowercase)
                && !i.name.to_lowercase().contains("odata")
        },
        produce: |_: &RuleInput<'_>| Some(TypeExpr::Common(CommonType::Link)),
    },
    TypeRule {
        kind: RuleKind::DefaultString,
        applies: |_: &RuleInput<'_>| true,
        // Only a declared string is a precise answer here.
        produce: |i: &RuleInput<'_>| {
            i.node
                .is_type(SchemaType::String)
                .then_some(TypeExpr::String)
        },
    },
];

fn first_non_null_member(input: &RuleInput<'_>) -> Option<TypeExpr> {
    let Some(TypeSet::Multiple(types)) = &input.node.schema_type else {
        return None;
    };
    types
        .iter()
        .find(|t| **t != SchemaType::Null)
        .map(|t| match t {
            SchemaType::Integer | SchemaType::Number => TypeExpr::Integer,
            SchemaType::Boolean => TypeExpr::Boolean,
            other => TypeExpr::Primitive(other.as_str().to_string()),
        })
}

/// Infers target-language types for schema properties.
#[derive(Debug, Clone, Default)]
pub struct TypeResolver {
    normalizer: NameNormalizer,
}

impl TypeResolver {
    pub fn new(normalizer: NameNormalizer) -> Self {
        Self { normalizer }
    }

    /// Resolve the type of property `name`. Never fails; unknown shapes become string.
    pub fn resolve(&self, name: &str, node: &SchemaNode) -> ResolvedType {
        let input = RuleInput { name, node };
        let (rule, produced) = RULES
            .iter()
            .find(|rule| (rule.applies)(&input))
            .map(|rule| (rule.kind, (rule.produce)(&input)))
            .unwrap_or((RuleKind::DefaultString, None));

        let fell_back = produced.is_none();
        if fell_back {
            log::debug!("no precise type for property {name} ({rule:?}); defaulting to string");
        }
        let mut expr = produced.unwrap_or(TypeExpr::String);

        if node.is_type(SchemaType::Array) {
            expr = TypeExpr::array_of(expr);
        }

        let wire_name = (name.contains("odata") || self.normalizer.is_overridden(name))
            .then(|| name.to_string());

        ResolvedType {
            expr,
            wire_name,
            rule,
            fell_back,
        }
    }
}
