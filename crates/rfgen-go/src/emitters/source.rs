use minijinja::{Environment, context};
use rfgen_core::ir::{ClassDescriptor, EnumDescriptor, IntermediateModel};

use crate::generator::GoError;
use crate::type_mapper::{go_identifier, resolved_to_go_field};

/// Comment prefixes for top-level declarations and for indented members.
struct Markers {
    top: String,
    member: String,
}

/// Emit one Go source file holding every enum and struct of the model.
pub fn emit_source(model: &IntermediateModel, marker: &str) -> Result<String, GoError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_template("source.go.j2", include_str!("../../templates/source.go.j2"))?;
    let tmpl = env.get_template("source.go.j2")?;

    let markers = Markers {
        top: marker.to_string(),
        member: format!("\t{marker}"),
    };
    let enums: Vec<_> = model.enums.iter().map(|e| enum_to_ctx(e, &markers)).collect();
    let classes: Vec<_> = model
        .classes
        .iter()
        .map(|c| class_to_ctx(c, &markers))
        .collect();

    let rendered = tmpl.render(context! {
        object_name => model.object_name.clone(),
        package => model.package.as_str(),
        classes => classes,
        enums => enums,
    })?;
    Ok(rendered)
}

fn enum_to_ctx(e: &EnumDescriptor, markers: &Markers) -> minijinja::Value {
    let members: Vec<minijinja::Value> = e
        .members
        .iter()
        .map(|m| {
            context! {
                ident => format!("{}{}", go_identifier(&m.name), e.name),
                value => m.name.clone(),
                comment => m.description.render(&markers.member),
            }
        })
        .collect();

    context! {
        name => e.name.clone(),
        comment => e.description.render(&markers.top),
        members => members,
    }
}

fn class_to_ctx(class: &ClassDescriptor, markers: &Markers) -> minijinja::Value {
    let attrs: Vec<minijinja::Value> = class
        .attrs
        .iter()
        .map(|a| {
            context! {
                name => a.name.clone(),
                type => resolved_to_go_field(&a.ty),
                comment => a.description.render(&markers.member),
            }
        })
        .collect();

    context! {
        name => class.name.clone(),
        comment => class.description.render(&markers.top),
        attrs => attrs,
    }
}
