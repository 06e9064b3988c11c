use indexmap::IndexMap;

use crate::config::default_name_overrides;

const ODATA_MARKER: &str = "@odata";

/// Maps raw schema property names to target-language identifiers.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    overrides: IndexMap<String, String>,
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new(default_name_overrides())
    }
}

impl NameNormalizer {
    pub fn new(overrides: IndexMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Whether `name` has an exact entry in the override table.
    pub fn is_overridden(&self, name: &str) -> bool {
        self.overrides.contains_key(name)
    }

    /// Normalize a raw property name.
    ///
    /// - `Oem` → `OEM`, `Id` → `ID` (exact match only)
    /// - `@odata.nextLink` → `ODataNextLink`
    /// - `@odata.count` → `Count`
    /// - `Members@odata.nextLink` → `MembersODataNextLink`
    /// - anything else is returned unchanged
    pub fn normalize(&self, raw: &str) -> String {
        if raw.contains(ODATA_MARKER) {
            return self.normalize_odata(raw);
        }
        self.lookup(raw)
    }

    fn lookup(&self, raw: &str) -> String {
        self.overrides
            .get(raw)
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }

    fn normalize_odata(&self, raw: &str) -> String {
        let segments: Vec<&str> = raw.split('.').collect();
        let first = segments[0];
        let last = segments[segments.len() - 1];

        let replacement = if last.contains("count") { "" } else { "OData" };
        let head = first.replace(ODATA_MARKER, replacement);

        // `Members@odata` alone has no trailing segment to title-case.
        if segments.len() == 1 {
            return head;
        }
        format!("{head}{}", self.lookup(&title_case(last)))
    }
}

/// Uppercase the first character, leave the rest alone.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_are_exact_match() {
        let n = NameNormalizer::default();
        assert_eq!(n.normalize("Oem"), "OEM");
        assert_eq!(n.normalize("Id"), "ID");
        assert_eq!(n.normalize("OemActions"), "OemActions");
        assert_eq!(n.normalize("VolumeId"), "VolumeId");
    }

    #[test]
    fn test_plain_names_unchanged() {
        let n = NameNormalizer::default();
        for name in ["Capacity", "links", "RAIDType", "Members", ""] {
            assert_eq!(n.normalize(name), name);
        }
    }

    #[test]
    fn test_odata_next_link() {
        let n = NameNormalizer::default();
        assert_eq!(n.normalize("@odata.nextLink"), "ODataNextLink");
    }

    #[test]
    fn test_odata_count_drops_prefix() {
        let n = NameNormalizer::default();
        assert_eq!(n.normalize("@odata.count"), "Count");
        assert_eq!(n.normalize("Members@odata.count"), "MembersCount");
    }

    #[test]
    fn test_odata_id_applies_override_to_tail() {
        let n = NameNormalizer::default();
        assert_eq!(n.normalize("@odata.id"), "ODataID");
        assert_eq!(n.normalize("@odata.type"), "ODataType");
        assert_eq!(n.normalize("@odata.etag"), "ODataEtag");
    }

    #[test]
    fn test_odata_with_owner_prefix() {
        let n = NameNormalizer::default();
        assert_eq!(
            n.normalize("Members@odata.nextLink"),
            "MembersODataNextLink"
        );
    }

    #[test]
    fn test_substituted_table() {
        let mut table = IndexMap::new();
        table.insert("Uuid".to_string(), "UUID".to_string());
        let n = NameNormalizer::new(table);
        assert_eq!(n.normalize("Uuid"), "UUID");
        assert_eq!(n.normalize("Oem"), "Oem");
        assert!(n.is_overridden("Uuid"));
        assert!(!n.is_overridden("Id"));
    }
}
