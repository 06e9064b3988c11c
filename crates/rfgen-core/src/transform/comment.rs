use indexmap::IndexMap;
use textwrap::Options;

use crate::config::CommentConfig;
use crate::ir::Comment;

/// Default cutpoint for entity descriptions.
pub const ENTITY_CUTPOINT: &str = "used";
/// Default connective between the entity name and its description.
pub const ENTITY_PREFIX: &str = " is";
/// Cutpoint used for enum member descriptions.
pub const MEMBER_CUTPOINT: &str = "shall";

/// Builds wrapped documentation comments from schema descriptions.
#[derive(Debug, Clone)]
pub struct CommentSynthesizer {
    curated: IndexMap<String, String>,
    text_width: usize,
}

impl Default for CommentSynthesizer {
    fn default() -> Self {
        Self::from_config(&CommentConfig::default())
    }
}

impl CommentSynthesizer {
    /// `width` is the full line width; `marker` is what renderers put in front.
    pub fn new(curated: IndexMap<String, String>, width: usize, marker: &str) -> Self {
        Self {
            curated,
            text_width: width.saturating_sub(marker.chars().count()).max(1),
        }
    }

    pub fn from_config(config: &CommentConfig) -> Self {
        Self::new(config.curated.clone(), config.width, &config.marker)
    }

    /// Comment for a class, enum, or attribute: `"<name> is <description from 'used'>"`.
    pub fn comment(&self, name: &str, description: &str) -> Comment {
        self.comment_with(name, description, ENTITY_CUTPOINT, ENTITY_PREFIX)
    }

    /// Comment for one enum member, read as `"<Value><Enum> shall ..."`.
    pub fn enum_member(&self, value: &str, enum_name: &str, description: &str) -> Comment {
        self.comment_with(&format!("{value}{enum_name}"), description, MEMBER_CUTPOINT, "")
    }

    /// Build a comment starting `description` at the first `cutpoint`.
    ///
    /// Curated names ignore `description` and return their fixed sentence.
    pub fn comment_with(
        &self,
        name: &str,
        description: &str,
        cutpoint: &str,
        prefix: &str,
    ) -> Comment {
        if let Some(curated) = self.curated.get(name) {
            return Comment::single(curated.clone());
        }

        let tail = description
            .find(cutpoint)
            .map_or(description, |idx| &description[idx..]);
        let sentence = format!("{name}{prefix} {tail}")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if sentence.is_empty() {
            return Comment::default();
        }

        let lines = textwrap::wrap(&sentence, Options::new(self.text_width))
            .into_iter()
            .map(|line| line.into_owned())
            .collect();
        Comment { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_name_ignores_description() {
        let c = CommentSynthesizer::default();
        let comment = c.comment("Description", "anything at all");
        assert_eq!(
            comment.lines,
            vec!["Description provides a description of this resource."]
        );
        let comment = c.comment("@odata.id", "");
        assert_eq!(comment.lines, vec!["ODataID is the odata identifier."]);
    }

    #[test]
    fn test_cutpoint_found() {
        let c = CommentSynthesizer::default();
        let comment = c.comment(
            "Capacity",
            "This property shall contain the capacity used for storage.",
        );
        assert_eq!(comment.text(), "Capacity is used for storage.");
    }

    #[test]
    fn test_cutpoint_absent_uses_whole_description() {
        let c = CommentSynthesizer::default();
        let comment = c.comment("Encrypted", "Whether the volume is encrypted.");
        assert_eq!(comment.text(), "Encrypted is Whether the volume is encrypted.");
    }

    #[test]
    fn test_empty_description_degrades() {
        let c = CommentSynthesizer::default();
        assert_eq!(c.comment("Widget", "").lines, vec!["Widget is"]);
        assert!(c.comment_with("", "", "used", "").is_empty());
    }

    #[test]
    fn test_enum_member_reads_naturally() {
        let c = CommentSynthesizer::default();
        let comment = c.enum_member("On", "PowerState", "The value shall mean powered on.");
        assert_eq!(comment.lines, vec!["OnPowerState shall mean powered on."]);
    }

    #[test]
    fn test_wraps_to_width_including_marker() {
        let c = CommentSynthesizer::default();
        let description = "This property shall contain the identifier used to correlate \
            this resource with the storage pool that provides its capacity, and the \
            value is expected to remain stable across service restarts.";
        let comment = c.comment("CapacitySources", description);
        assert!(comment.lines.len() > 1);
        for line in &comment.lines {
            assert!(line.len() + 3 <= 79, "line too long: {line:?}");
        }
        assert!(comment.lines[0].starts_with("CapacitySources is used to correlate"));
    }

    #[test]
    fn test_newlines_are_collapsed() {
        let c = CommentSynthesizer::default();
        let comment = c.comment("Foo", "first\n\nsecond   third");
        assert_eq!(comment.lines, vec!["Foo is first second third"]);
    }

    #[test]
    fn test_substituted_curated_table() {
        let mut curated = IndexMap::new();
        curated.insert("Status".to_string(), "Status is the status.".to_string());
        let c = CommentSynthesizer::new(curated, 79, "// ");
        assert_eq!(c.comment("Status", "ignored").text(), "Status is the status.");
        assert_eq!(c.comment("Description", "").text(), "Description is");
    }
}
