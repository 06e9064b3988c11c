use rfgen_core::config::SchemaFamily;
use rfgen_core::ir::{CommonType, IntermediateModel, RuleKind, TypeExpr};
use rfgen_core::parse;
use rfgen_core::transform::Translator;

const VOLUME_V1_4_1: &str = include_str!("fixtures/volume-v1_4_1.json");

fn volume_model() -> IntermediateModel {
    let doc = parse::from_json(VOLUME_V1_4_1).expect("fixture should parse");
    Translator::default().classify(&doc, "Volume", SchemaFamily::Swordfish)
}

#[test]
fn volume_attribute_names_in_schema_order() {
    let model = volume_model();
    let volume = model.class("Volume").expect("should have Volume");
    let names: Vec<&str> = volume.attrs.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "ODataContext",
            "ODataEtag",
            "ODataID",
            "ODataType",
            "BlockSizeBytes",
            "Capacity",
            "CapacitySources",
            "CapacitySourcesCount",
            "Description",
            "Encrypted",
            "Identifiers",
            "InitializeType",
            "Links",
            "OEM",
            "Status",
            "replicaTargets",
        ]
    );
}

#[test]
fn volume_attribute_types() {
    let model = volume_model();
    let volume = model.class("Volume").unwrap();
    let ty = |name: &str| volume.attr(name).unwrap().ty.to_string();

    assert_eq!(ty("ODataID"), "string `json:\"@odata.id\"`");
    assert_eq!(ty("BlockSizeBytes"), "int");
    assert_eq!(ty("Capacity"), "string");
    assert_eq!(ty("CapacitySources"), "[]CapacitySource");
    assert_eq!(
        ty("CapacitySourcesCount"),
        "int `json:\"CapacitySources@odata.count\"`"
    );
    assert_eq!(ty("Description"), "string");
    assert_eq!(ty("Encrypted"), "bool");
    assert_eq!(ty("Identifiers"), "[]Identifier");
    assert_eq!(ty("InitializeType"), "InitializeType");
    assert_eq!(ty("OEM"), "string `json:\"Oem\"`");
    assert_eq!(ty("Status"), "common.Status");
    assert_eq!(ty("replicaTargets"), "[]idRef");

    let status = volume.attr("Status").unwrap();
    assert_eq!(status.ty.expr, TypeExpr::Common(CommonType::Status));
    assert_eq!(status.ty.rule, RuleKind::StatusName);
}

#[test]
fn volume_excludes_hoisted_and_deprecated() {
    let model = volume_model();
    let volume = model.class("Volume").unwrap();
    for raw in ["Id", "Name", "AccessCapabilities"] {
        assert!(
            volume.attrs.iter().all(|a| a.raw_name != raw),
            "{raw} should be excluded"
        );
    }
}

#[test]
fn links_class() {
    let model = volume_model();
    let links = model.class("Links").expect("should have Links");
    let attrs: Vec<(String, String)> = links
        .attrs
        .iter()
        .map(|a| (a.name.clone(), a.ty.to_string()))
        .collect();
    assert_eq!(
        attrs,
        vec![
            ("Drives".to_string(), "[]Drive".to_string()),
            (
                "DrivesCount".to_string(),
                "int `json:\"Drives@odata.count\"`".to_string()
            ),
            ("OEM".to_string(), "string `json:\"Oem\"`".to_string()),
        ]
    );
}

#[test]
fn never_emits_actions_or_bindings() {
    let model = volume_model();
    assert!(model.class("Actions").is_none());
    assert!(model.class("Initialize").is_none());
    assert!(model.enumeration("Duration").is_none());
}

#[test]
fn comments_use_cutpoints_and_curated_text() {
    let model = volume_model();
    let volume = model.class("Volume").unwrap();

    assert!(
        volume.description.lines[0].starts_with("Volume is used to represent a volume"),
        "{:?}",
        volume.description
    );
    assert_eq!(
        volume.description.text(),
        "Volume is used to represent a volume, virtual disk, logical disk, LUN, or \
         other logical storage for a Redfish implementation."
    );
    assert_eq!(
        volume.attr("ODataType").unwrap().description.text(),
        "ODataType is the odata type."
    );
    assert_eq!(
        volume.attr("Description").unwrap().description.text(),
        "Description provides a description of this resource."
    );
    for attr in &volume.attrs {
        for line in &attr.description.lines {
            assert!(line.len() <= 76, "{}: {line:?}", attr.name);
        }
    }
}

#[test]
fn enum_members_prefer_long_descriptions() {
    let model = volume_model();
    let init = model.enumeration("InitializeType").unwrap();
    let members: Vec<&str> = init.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(members, vec!["Fast", "Slow"]);

    assert_eq!(
        init.members[1].description.text(),
        "SlowInitializeType shall be prepared for use slowly, by completely erasing \
         the volume."
    );
    assert!(
        init.members[0]
            .description
            .text()
            .starts_with("FastInitializeType The volume is prepared for use quickly")
    );
}
