use rfgen_core::ir::{ResolvedType, TypeExpr};

/// Map a `TypeExpr` to its Go type string representation.
pub fn type_expr_to_go(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Integer => "int".to_string(),
        TypeExpr::Boolean => "bool".to_string(),
        TypeExpr::String => "string".to_string(),
        TypeExpr::Common(common) => format!("common.{}", common.as_str()),
        TypeExpr::Named(name) => name.clone(),
        TypeExpr::Primitive(token) => match token.as_str() {
            "string" => "string".to_string(),
            "object" => "map[string]interface{}".to_string(),
            "array" => "[]interface{}".to_string(),
            _ => "interface{}".to_string(),
        },
        TypeExpr::Array(inner) => format!("[]{}", type_expr_to_go(inner)),
    }
}

/// Go field type, with a `json` struct tag when the wire name differs.
pub fn resolved_to_go_field(resolved: &ResolvedType) -> String {
    let base = type_expr_to_go(&resolved.expr);
    match &resolved.wire_name {
        Some(wire) => format!("{base} `json:\"{wire}\"`"),
        None => base,
    }
}

/// Make an enum literal usable inside a Go identifier.
pub fn go_identifier(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        format!("V{cleaned}")
    } else {
        cleaned
    }
}
