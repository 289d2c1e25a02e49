use serde::{Deserialize, Serialize};

/// Switches for JSON parsing and writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsonOptions {
    /// Write only properties changed after initialization (PATCH bodies),
    /// plus explicit nulls for properties cleared since.
    pub backing_store_changes_only: bool,

    /// Indent the output.
    pub pretty: bool,

    /// Fail on unknown enum strings even for lenient enums.
    pub strict_enums: bool,
}

impl JsonOptions {
    #[must_use]
    pub fn changes_only() -> Self {
        Self {
            backing_store_changes_only: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn with_strict_enums(mut self, strict: bool) -> Self {
        self.strict_enums = strict;
        self
    }
}
