use crate::exemptions::ExemptionTable;
use crate::vocabulary::Vocabulary;
use std::sync::OnceLock;

/// Read-only configuration shared by every declaration and class entry.
///
/// Holds no generation state, so one instance can serve any number of
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    exemptions: ExemptionTable,
    vocabulary: Option<Vocabulary>,
}

impl Transpiler {
    pub fn new(exemptions: ExemptionTable) -> Self {
        Self {
            exemptions,
            vocabulary: None,
        }
    }

    /// Only emit typed constructors that `vocabulary` knows about
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    pub fn exemptions(&self) -> &ExemptionTable {
        &self.exemptions
    }

    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vocabulary.as_ref()
    }
}

/// Built-in exemptions, no vocabulary check
pub fn default_transpiler() -> &'static Transpiler {
    static DEFAULT: OnceLock<Transpiler> = OnceLock::new();
    DEFAULT.get_or_init(Transpiler::default)
}
