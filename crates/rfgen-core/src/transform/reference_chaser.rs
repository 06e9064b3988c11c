use crate::parse::schema::SchemaDocument;

/// References containing this marker point at ID-only link schemas.
const ID_REF_MARKER: &str = "idRef";

/// Pick the concrete versioned document a re-export stub points to.
///
/// Looks up the definition named `object_name` and takes the greatest
/// `anyOf` reference (document part only, before `#`) under plain string
/// ordering. Version segments are not zero padded, so `v1_10_0` sorts below
/// `v1_2_0`; this matches the historical output of the generator and is
/// left as is. Returns `base_url` when nothing qualifies.
pub fn resolve_canonical_url(base_url: &str, doc: &SchemaDocument, object_name: &str) -> String {
    let Some(definition) = doc.definition(object_name) else {
        log::debug!("{object_name} not defined in stub; keeping {base_url}");
        return base_url.to_string();
    };

    definition
        .any_of
        .iter()
        .filter_map(|alt| alt.reference.as_deref())
        .filter(|reference| !reference.contains(ID_REF_MARKER))
        .map(|reference| reference.split('#').next().unwrap_or(reference))
        .filter(|url| !url.is_empty())
        .max()
        .map(str::to_string)
        .unwrap_or_else(|| base_url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const BASE: &str = "http://redfish.dmtf.org/schemas/v1/Thing.json";

    fn stub(alternatives: &[&str]) -> SchemaDocument {
        let any_of: Vec<serde_json::Value> = alternatives
            .iter()
            .map(|r| serde_json::json!({ "$ref": r }))
            .collect();
        let json = serde_json::json!({
            "definitions": { "Thing": { "anyOf": any_of } }
        });
        parse::from_json(&json.to_string()).unwrap()
    }

    #[test]
    fn test_lexicographic_not_numeric() {
        let doc = stub(&[
            "http://redfish.dmtf.org/schemas/v1/Thing.v1_2_0.json#/definitions/Thing",
            "http://redfish.dmtf.org/schemas/v1/Thing.v1_10_0.json#/definitions/Thing",
        ]);
        assert_eq!(
            resolve_canonical_url(BASE, &doc, "Thing"),
            "http://redfish.dmtf.org/schemas/v1/Thing.v1_2_0.json"
        );
    }

    #[test]
    fn test_ignores_id_ref() {
        let doc = stub(&[
            "http://redfish.dmtf.org/schemas/v1/odata-v4.json#/definitions/idRef",
            "http://redfish.dmtf.org/schemas/v1/Thing.v1_0_3.json#/definitions/Thing",
        ]);
        assert_eq!(
            resolve_canonical_url(BASE, &doc, "Thing"),
            "http://redfish.dmtf.org/schemas/v1/Thing.v1_0_3.json"
        );
    }

    #[test]
    fn test_no_candidates_keeps_base() {
        let doc = stub(&["http://redfish.dmtf.org/schemas/v1/odata-v4.json#/definitions/idRef"]);
        assert_eq!(resolve_canonical_url(BASE, &doc, "Thing"), BASE);

        let doc = stub(&["#/definitions/Local"]);
        assert_eq!(resolve_canonical_url(BASE, &doc, "Thing"), BASE);
    }

    #[test]
    fn test_missing_definition_keeps_base() {
        let doc = stub(&["http://redfish.dmtf.org/schemas/v1/Thing.v1_0_0.json"]);
        assert_eq!(resolve_canonical_url(BASE, &doc, "Other"), BASE);
    }
}
