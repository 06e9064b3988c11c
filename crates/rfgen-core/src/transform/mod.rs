pub mod classifier;
pub mod comment;
pub mod diagnostics;
pub mod name_normalizer;
pub mod reference_chaser;
pub mod type_resolver;

pub use classifier::Translator;
pub use diagnostics::Diagnostics;
pub use reference_chaser::resolve_canonical_url;
