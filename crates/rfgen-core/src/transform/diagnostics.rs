use serde::Serialize;

/// A property whose type could not be inferred and was assumed to be a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fallback {
    pub owner: String,
    pub property: String,
}

/// Non-fatal observations gathered while translating a document.
///
/// Nothing recorded here changes the generated model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    pub string_fallbacks: Vec<Fallback>,
    /// Definitions that are neither objects nor enums.
    pub unrepresentable: Vec<String>,
    /// Objects skipped because they describe an action binding (`target` + `title`).
    pub action_bindings: Vec<String>,
    /// Attributes whose normalized name repeats an earlier one in the same class.
    pub name_collisions: Vec<Fallback>,
}

impl Diagnostics {
    pub fn fallback_count(&self) -> usize {
        self.string_fallbacks.len()
    }

    pub fn is_clean(&self) -> bool {
        self.string_fallbacks.is_empty()
            && self.unrepresentable.is_empty()
            && self.name_collisions.is_empty()
    }
}
